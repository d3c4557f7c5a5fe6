//! IPv4 address value type.
//!
//! `Address` is a plain 32-bit value with the first dotted-decimal octet in
//! the most significant byte. It serializes as its dotted-decimal string so
//! it can be used directly as an `ip:` field in YAML or JSON configuration.

use std::fmt;
use std::net::Ipv4Addr;
use std::ops::BitAnd;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codec::{self, AddressError};

/// Integer representation of an IPv4 address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(u32);

impl Address {
    pub const fn new(value: u32) -> Self {
        Address(value)
    }

    /// Build an address from its four octets, most significant first
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Address(u32::from_be_bytes(octets))
    }

    /// The packed 32-bit value
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Decompose into four octets, most significant first
    pub const fn octets(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Apply a bit mask, see [`codec::mask`]
    pub fn mask(self, mask: Address) -> Address {
        codec::mask(self, mask)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format(*self))
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        codec::parse(value)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        codec::parse(&value)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        codec::format(addr)
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address(value)
    }
}

impl From<Address> for u32 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Address::from_octets(octets)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address::from_octets(ip.octets())
    }
}

impl From<Address> for Ipv4Addr {
    fn from(addr: Address) -> Self {
        let [a, b, c, d] = addr.octets();
        Ipv4Addr::new(a, b, c, d)
    }
}

impl BitAnd for Address {
    type Output = Address;

    fn bitand(self, rhs: Address) -> Address {
        codec::mask(self, rhs)
    }
}
