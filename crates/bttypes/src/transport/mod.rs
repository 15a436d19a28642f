//! Bluetooth transport identifiers
//!
//! This module defines the codes that tag which radio mode (automatic,
//! BR/EDR, or Low Energy) a connection or request uses.

pub mod constants;
pub mod types;


pub use constants::*;
pub use types::{transport_text, Transport};
