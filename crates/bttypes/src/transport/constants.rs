// Transport codes
pub const BT_TRANSPORT_AUTO: u8 = 0x00;
pub const BT_TRANSPORT_BR_EDR: u8 = 0x01;
pub const BT_TRANSPORT_LE: u8 = 0x02;
