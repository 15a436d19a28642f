//! BtTypes - shared type definitions for a Bluetooth host stack
//!
//! This library holds the small, stack-wide Bluetooth value types that the
//! protocol layers share. Currently it provides the transport identifiers
//! (automatic, classic BR/EDR, and Low Energy) together with helpers for
//! rendering them in log and debug output.

pub mod transport;

// Re-export common types for convenience
pub use transport::{transport_text, Transport};
