//! IPv4 address value type and dotted-decimal codec.
//!
//! This module handles conversion between dotted-decimal text and the packed
//! 32-bit form, and bitwise masking for subnet computation.

pub mod address;
pub mod codec;

// Re-export commonly used types
pub use address::Address;
pub use codec::{format, mask, parse, AddressError};
