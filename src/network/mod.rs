//! Network layer for fetching and representing interface information.
//!
//! This module provides types and traits for:
//! - Representing interface snapshots ([`AdapterSnapshot`])
//! - Address family selection ([`IpVersion`])
//! - Fetching interface information ([`AddressFetcher`])
//! - Name-based filtering ([`filter`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
mod fetcher;
pub mod filter;
pub mod platform;

#[cfg(test)]
mod filter_tests;

pub use adapter::{AdapterSnapshot, IpVersion};
pub use fetcher::{AddressFetcher, FetchError};
