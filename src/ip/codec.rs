//! Dotted-decimal codec.
//!
//! Converts between the textual `o0.o1.o2.o3` form of an IPv4 address and
//! its packed 32-bit integer form, and applies bit masks.

use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::Regex;

use super::address::Address;

/// Four dot-separated segments, each 0-255
const DOTTED_DECIMAL: &str =
    r"^((25[0-5]|2[0-4][0-9]|[1]?[0-9]?[0-9])\.){3}(25[0-5]|2[0-4][0-9]|[0-1]?[0-9]?[0-9])$";

/// Compiled dotted-decimal pattern, shared read-only
static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOTTED_DECIMAL).expect("Invalid dotted-decimal regex"));

/// Errors that can occur while parsing an address
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Invalid IPv4 address format: {input:?}")]
    InvalidFormat { input: String },

    #[error("Failed to convert octet {segment:?} to int")]
    InvalidOctet {
        segment: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Address octet {value} out of range (must be 0-255)")]
    OctetOutOfRange { value: i64 },
}

impl AddressError {
    /// True when the text failed the structural dotted-decimal check
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, AddressError::InvalidFormat { .. })
    }
}

/// Parse a dotted-decimal string into an [`Address`].
///
/// The text is first matched against the dotted-decimal pattern, then each
/// octet is converted and range checked again before packing.
///
/// # Examples
/// ```
/// use ipv4codec::{parse, Address};
///
/// assert_eq!(parse("192.168.1.1"), Ok(Address::new(3232235777)));
/// assert!(parse("192.168.1.256").is_err());
/// ```
pub fn parse(text: &str) -> Result<Address, AddressError> {
    if !PATTERN.is_match(text) {
        log::trace!("Rejected IPv4 address {:?}: does not match dotted-decimal format", text);
        return Err(AddressError::InvalidFormat {
            input: text.to_string(),
        });
    }

    let octets = convert_octets(text)?;

    let mut packed: u32 = 0;
    for octet in &octets[..octets.len() - 1] {
        packed |= u32::from(*octet);
        packed <<= 8;
    }
    packed |= u32::from(octets[octets.len() - 1]);

    Ok(Address::new(packed))
}

/// Convert each segment of a structurally valid address to an octet.
///
/// The pattern already rules out every failure here; the checks stay in case
/// the pattern is ever loosened.
fn convert_octets(text: &str) -> Result<[u8; 4], AddressError> {
    let mut octets = [0u8; 4];
    let mut segments = text.split('.');

    for slot in octets.iter_mut() {
        let segment = segments.next().ok_or_else(|| AddressError::InvalidFormat {
            input: text.to_string(),
        })?;
        let value: i64 = segment.parse().map_err(|source| AddressError::InvalidOctet {
            segment: segment.to_string(),
            source,
        })?;
        *slot = u8::try_from(value).map_err(|_| AddressError::OctetOutOfRange { value })?;
    }

    if segments.next().is_some() {
        return Err(AddressError::InvalidFormat {
            input: text.to_string(),
        });
    }

    Ok(octets)
}

/// Format an [`Address`] as a dotted-decimal string.
///
/// Total over all 32-bit values; octets are written without leading zeros.
///
/// # Examples
/// ```
/// use ipv4codec::{format, Address};
///
/// assert_eq!(format(Address::new(3232235777)), "192.168.1.1");
/// assert_eq!(format(Address::new(0)), "0.0.0.0");
/// ```
pub fn format(addr: Address) -> String {
    let value = addr.value();
    let octets = [
        (value >> 24) as u8,
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ];

    octets
        .iter()
        .map(|octet| octet.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Apply `mask` to `addr` with a bitwise AND.
///
/// Any 32-bit mask is accepted, contiguous or not.
///
/// # Examples
/// ```
/// use ipv4codec::{mask, parse};
///
/// let host = parse("192.168.1.3")?;
/// let netmask = parse("255.255.255.0")?;
/// assert_eq!(mask(host, netmask), parse("192.168.1.0")?);
/// # Ok::<(), ipv4codec::AddressError>(())
/// ```
pub fn mask(addr: Address, mask: Address) -> Address {
    Address::new(addr.value() & mask.value())
}
