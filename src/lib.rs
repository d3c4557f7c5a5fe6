//! # ipv4codec - Dotted-decimal IPv4 address conversion
//!
//! This library converts IPv4 addresses between their dotted-decimal text
//! form and a compact 32-bit integer form, and applies bit masks for subnet
//! computation. It is a pure value-conversion library meant to be embedded
//! in larger networking tools.
//!
//! ## Overview
//!
//! - `parse`: validate and pack `"o0.o1.o2.o3"` into an [`Address`]
//! - `format`: render any [`Address`] back to canonical dotted-decimal
//! - `mask`: bitwise AND of two addresses
//!
//! [`Address`] is a `Copy` newtype over `u32` with the first octet in the
//! most significant byte, so `192.168.1.1` is `3232235777`.
//!
//! ## Example Usage
//!
//! ```rust
//! use ipv4codec::{format, mask, parse};
//!
//! let host = parse("192.168.1.3")?;
//! let netmask = parse("255.255.255.0")?;
//!
//! let network = mask(host, netmask);
//! assert_eq!(format(network), "192.168.1.0");
//! assert_eq!(network.value(), 3232235776);
//! # Ok::<(), ipv4codec::AddressError>(())
//! ```
//!
//! ## Configuration Fields
//!
//! `Address` implements serde's `Serialize` and `Deserialize` through its
//! dotted-decimal string, so it can be used directly in config structs:
//!
//! ```yaml
//! nodes:
//!   - name: "A0"
//!     ip: "11.0.0.1"
//! ```
//!
//! ## Error Handling
//!
//! Parsing returns [`AddressError`]. Text that fails the dotted-decimal check
//! yields `AddressError::InvalidFormat`; the remaining variants come from a
//! second numeric check that only fires if the first one is bypassed.
//! `format` and `mask` never fail.
//!
//! Rejected input is recorded at `trace` level through the `log` facade.

pub mod ip;

pub use ip::{format, mask, parse, Address, AddressError};
