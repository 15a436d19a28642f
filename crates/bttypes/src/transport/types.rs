use crate::transport::constants::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Auto,
    BrEdr,
    Le,
}

impl Transport {
    /// Returns the transport for a raw code, or `None` if the code is not
    /// one of the three assigned values.
    pub fn from_code(value: u8) -> Option<Transport> {
        match value {
            BT_TRANSPORT_AUTO => Some(Transport::Auto),
            BT_TRANSPORT_BR_EDR => Some(Transport::BrEdr),
            BT_TRANSPORT_LE => Some(Transport::Le),
            _ => None,
        }
    }

    /// The raw code as carried in APIs and HCI parameters.
    pub fn code(&self) -> u8 {
        u8::from(*self)
    }
}

impl From<Transport> for u8 {
    fn from(value: Transport) -> Self {
        match value {
            Transport::Auto => BT_TRANSPORT_AUTO,
            Transport::BrEdr => BT_TRANSPORT_BR_EDR,
            Transport::Le => BT_TRANSPORT_LE,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transport::Auto => "BT_TRANSPORT_AUTO",
            Transport::BrEdr => "BT_TRANSPORT_BR_EDR",
            Transport::Le => "BT_TRANSPORT_LE",
        })
    }
}

/// Returns the symbolic name of a transport code for log output.
///
/// Codes outside the assigned set are not an error; they render as
/// `UNKNOWN[<code>]` so the raw value still shows up in the log line.
pub fn transport_text(transport: u8) -> String {
    match Transport::from_code(transport) {
        Some(t) => t.to_string(),
        None => format!("UNKNOWN[{}]", transport),
    }
}
