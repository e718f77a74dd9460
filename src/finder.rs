//! Overlay interface address lookup.
//!
//! [`InterfaceAddressFinder`] answers "which addresses are bound to
//! interfaces whose name contains X?". Every call enumerates the
//! interfaces afresh; nothing is cached between calls.
//!
//! Two error policies are offered:
//!
//! - [`InterfaceAddressFinder::find_addresses`] and
//!   [`InterfaceAddressFinder::find`] are fail-soft: enumeration failures
//!   are logged and reported as an empty result.
//! - [`InterfaceAddressFinder::try_find_addresses`] and
//!   [`InterfaceAddressFinder::try_find`] return a [`FindError`] so callers
//!   can tell "no match" apart from "could not look".

use std::net::{IpAddr, Ipv4Addr};

use thiserror::Error;

use crate::network::filter::{FilterError, FilteredFetcher, NameContainsFilter};
use crate::network::platform::SystemFetcher;
use crate::network::{AddressFetcher, FetchError, IpVersion};

/// Name substring used by ZeroTier for its virtual adapters.
pub const DEFAULT_FILTER: &str = "zt";

/// Error type for address lookups.
#[derive(Debug, Error)]
pub enum FindError {
    /// The name filter was empty.
    #[error("Invalid interface filter: {0}")]
    Filter(#[from] FilterError),

    /// The interface list could not be read.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Looks up addresses of interfaces selected by name.
///
/// # Example
///
/// ```no_run
/// use zt_addrs::InterfaceAddressFinder;
///
/// let finder = InterfaceAddressFinder::system();
/// for addr in finder.find_addresses("zt") {
///     println!("{addr}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InterfaceAddressFinder<F = SystemFetcher> {
    fetcher: F,
}

impl InterfaceAddressFinder<SystemFetcher> {
    /// Creates a finder over the host's real interfaces.
    #[must_use]
    pub const fn system() -> Self {
        Self::new(SystemFetcher::new())
    }
}

impl<F> InterfaceAddressFinder<F> {
    /// Creates a finder over the given fetcher.
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Returns a reference to the underlying fetcher.
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: AddressFetcher> InterfaceAddressFinder<F> {
    /// Returns the IPv4 addresses of interfaces whose name contains `name_substring`.
    ///
    /// Results follow OS enumeration order. An empty vector means no interface
    /// matched, matched interfaces had no IPv4 address, or the lookup failed;
    /// failures are logged, not returned. Use [`Self::try_find_addresses`] to
    /// distinguish them.
    pub fn find_addresses(&self, name_substring: &str) -> Vec<Ipv4Addr> {
        self.try_find_addresses(name_substring)
            .unwrap_or_else(|e| log_failure(name_substring, &e))
    }

    /// Fail-soft lookup of addresses of the requested family.
    ///
    /// Same error policy as [`Self::find_addresses`].
    pub fn find(&self, name_substring: &str, version: IpVersion) -> Vec<IpAddr> {
        self.try_find(name_substring, version)
            .unwrap_or_else(|e| log_failure(name_substring, &e))
    }

    /// Fail-soft lookup of ZeroTier addresses ([`DEFAULT_FILTER`]).
    pub fn find_zerotier_addresses(&self) -> Vec<Ipv4Addr> {
        self.find_addresses(DEFAULT_FILTER)
    }

    /// Returns the IPv4 addresses of interfaces whose name contains `name_substring`.
    ///
    /// # Errors
    ///
    /// Returns [`FindError::Filter`] if `name_substring` is empty, or
    /// [`FindError::Fetch`] if the interfaces could not be enumerated.
    pub fn try_find_addresses(&self, name_substring: &str) -> Result<Vec<Ipv4Addr>, FindError> {
        let addresses = self.try_find(name_substring, IpVersion::V4)?;
        Ok(addresses
            .into_iter()
            .filter_map(|addr| match addr {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .collect())
    }

    /// Returns addresses of the requested family for interfaces whose name
    /// contains `name_substring`.
    ///
    /// For [`IpVersion::Both`], each interface's IPv4 addresses precede its
    /// IPv6 addresses.
    ///
    /// # Errors
    ///
    /// Returns [`FindError::Filter`] if `name_substring` is empty, or
    /// [`FindError::Fetch`] if the interfaces could not be enumerated.
    pub fn try_find(
        &self,
        name_substring: &str,
        version: IpVersion,
    ) -> Result<Vec<IpAddr>, FindError> {
        let filter = NameContainsFilter::new(name_substring)?;
        let matched = FilteredFetcher::new(&self.fetcher, filter);
        let adapters = matched.fetch()?;

        let addresses: Vec<IpAddr> = adapters
            .iter()
            .flat_map(|adapter| adapter.addresses(version))
            .collect();

        tracing::debug!(
            "Found {} {} address(es) on interfaces matching '{}'",
            addresses.len(),
            version,
            matched.filter().needle()
        );

        Ok(addresses)
    }
}

/// Records a swallowed lookup failure and yields the empty result.
fn log_failure<T>(name_substring: &str, error: &FindError) -> Vec<T> {
    match error {
        FindError::Filter(e) => tracing::warn!("Ignoring address lookup: {e}"),
        FindError::Fetch(e) => tracing::error!(
            "Error getting addresses for interfaces matching '{name_substring}': {e}"
        ),
    }
    Vec::new()
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod tests;
