//! Native interface fetching via the `if-addrs` crate.

use std::collections::HashMap;
use std::io;
use std::net::IpAddr;

use crate::network::{AdapterSnapshot, AddressFetcher, FetchError};

/// [`AddressFetcher`] backed by the operating system's interface list.
///
/// The OS reports one record per (interface, address) pair; this fetcher
/// folds them into one [`AdapterSnapshot`] per interface name.
///
/// # Example
///
/// ```no_run
/// use zt_addrs::network::{AddressFetcher, platform::SystemFetcher};
///
/// let fetcher = SystemFetcher::new();
/// for adapter in fetcher.fetch().unwrap() {
///     println!("{}: {:?}", adapter.name, adapter.ipv4_addresses);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemFetcher {
    _private: (),
}

impl SystemFetcher {
    /// Creates a new system interface fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressFetcher for SystemFetcher {
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
        let interfaces = if_addrs::get_if_addrs().map_err(map_io_error)?;
        tracing::trace!("OS reported {} interface address record(s)", interfaces.len());

        let adapters = group_by_interface(
            interfaces
                .into_iter()
                .map(|iface| {
                    let ip = iface.ip();
                    (iface.name, ip)
                }),
        );
        tracing::debug!("Enumerated {} network interface(s)", adapters.len());

        Ok(adapters)
    }
}

/// Folds per-address records into one snapshot per interface.
///
/// Interfaces appear in the order their first record was seen; addresses
/// keep their relative order within each family.
pub fn group_by_interface<I>(records: I) -> Vec<AdapterSnapshot>
where
    I: IntoIterator<Item = (String, IpAddr)>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut adapters: Vec<AdapterSnapshot> = Vec::new();

    for (name, addr) in records {
        let slot = *index.entry(name).or_insert_with_key(|name| {
            adapters.push(AdapterSnapshot::empty(name.clone()));
            adapters.len() - 1
        });
        adapters[slot].push(addr);
    }

    adapters
}

fn map_io_error(error: io::Error) -> FetchError {
    if error.kind() == io::ErrorKind::PermissionDenied {
        FetchError::PermissionDenied {
            context: error.to_string(),
        }
    } else {
        FetchError::Io(error)
    }
}
