//! Core network types for interface representation.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::Serialize;

/// Address family to return from a lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    /// IPv4 addresses only.
    #[default]
    #[serde(rename = "ipv4")]
    V4,
    /// IPv6 addresses only.
    #[serde(rename = "ipv6")]
    V6,
    /// Both IPv4 and IPv6 addresses.
    Both,
}

impl IpVersion {
    /// Returns true if this version includes IPv4.
    #[must_use]
    pub const fn includes_v4(self) -> bool {
        matches!(self, Self::V4 | Self::Both)
    }

    /// Returns true if this version includes IPv6.
    #[must_use]
    pub const fn includes_v6(self) -> bool {
        matches!(self, Self::V6 | Self::Both)
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
            Self::Both => write!(f, "Both"),
        }
    }
}

/// A snapshot of a single network interface's addresses at a point in time.
///
/// Address order within each family follows the order reported by the
/// operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterSnapshot {
    /// The OS-reported interface name (e.g., "eth0", "ztabcdef12").
    pub name: String,
    /// All IPv4 addresses assigned to this interface.
    pub ipv4_addresses: Vec<Ipv4Addr>,
    /// All IPv6 addresses assigned to this interface.
    pub ipv6_addresses: Vec<Ipv6Addr>,
}

impl AdapterSnapshot {
    /// Creates a new adapter snapshot.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ipv4_addresses: Vec<Ipv4Addr>,
        ipv6_addresses: Vec<Ipv6Addr>,
    ) -> Self {
        Self {
            name: name.into(),
            ipv4_addresses,
            ipv6_addresses,
        }
    }

    /// Creates an empty snapshot for the named interface.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new(), Vec::new())
    }

    /// Appends an address to the list matching its family.
    pub fn push(&mut self, addr: IpAddr) {
        match addr {
            IpAddr::V4(v4) => self.ipv4_addresses.push(v4),
            IpAddr::V6(v6) => self.ipv6_addresses.push(v6),
        }
    }

    /// Iterates over the addresses of the requested family.
    ///
    /// For [`IpVersion::Both`], IPv4 addresses are yielded before IPv6 addresses.
    pub fn addresses(&self, version: IpVersion) -> impl Iterator<Item = IpAddr> + '_ {
        let v4 = self
            .ipv4_addresses
            .iter()
            .filter(move |_| version.includes_v4())
            .map(|addr| IpAddr::V4(*addr));
        let v6 = self
            .ipv6_addresses
            .iter()
            .filter(move |_| version.includes_v6())
            .map(|addr| IpAddr::V6(*addr));
        v4.chain(v6)
    }
}
