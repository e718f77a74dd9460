//! Platform network interface fetcher implementations.
//!
//! # Platform Support
//!
//! All platforms go through the `if-addrs` crate, which wraps `getifaddrs`
//! on Unix-like systems and `GetAdaptersAddresses` on Windows.

mod system;

pub use system::{SystemFetcher, group_by_interface};
