//! Interface filtering by name.
//!
//! # Design
//!
//! - **Pure Matchers**: [`NameContainsFilter`] only answers
//!   "does this interface match?".
//! - **Decorator**: [`FilteredFetcher`] applies filtering transparently
//!   to any [`AddressFetcher`] implementation.

use thiserror::Error;

use super::{AdapterSnapshot, AddressFetcher, FetchError};

/// Error type for filter construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// An empty substring would match every interface.
    #[error("Interface name filter must not be empty")]
    Empty,
}

/// Trait for filtering network interfaces.
///
/// Filters must be `Send + Sync` so a configured finder can be shared across threads.
pub trait AdapterFilter: Send + Sync {
    /// Returns `true` if the interface should be included, `false` to filter it out.
    fn matches(&self, adapter: &AdapterSnapshot) -> bool;
}

/// Matches interfaces whose name contains a substring.
///
/// Matching is case-sensitive containment: `"zt"` matches `"zt0"` and
/// `"ztabc"` and `"vzt"`, but not `"ZT0"` or `"eth0"`.
///
/// # Examples
///
/// ```
/// use zt_addrs::network::filter::{AdapterFilter, NameContainsFilter};
/// use zt_addrs::network::AdapterSnapshot;
///
/// let filter = NameContainsFilter::new("zt").unwrap();
///
/// assert!(filter.matches(&AdapterSnapshot::empty("ztabc")));
/// assert!(!filter.matches(&AdapterSnapshot::empty("eth0")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsFilter {
    needle: String,
}

impl NameContainsFilter {
    /// Creates a filter matching names that contain `needle`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Empty`] if `needle` is empty.
    pub fn new(needle: impl Into<String>) -> Result<Self, FilterError> {
        let needle = needle.into();
        if needle.is_empty() {
            return Err(FilterError::Empty);
        }
        Ok(Self { needle })
    }

    /// Returns the substring this filter looks for.
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl AdapterFilter for NameContainsFilter {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        adapter.name.contains(self.needle.as_str())
    }
}

/// A fetcher decorator that applies a filter to results.
///
/// This wraps any [`AddressFetcher`] and drops the interfaces rejected
/// by the provided [`AdapterFilter`], keeping enumeration order.
///
/// # Examples
///
/// ```no_run
/// use zt_addrs::network::AddressFetcher;
/// use zt_addrs::network::filter::{FilteredFetcher, NameContainsFilter};
/// use zt_addrs::network::platform::SystemFetcher;
///
/// let fetcher = FilteredFetcher::new(SystemFetcher::new(), NameContainsFilter::new("zt").unwrap());
/// let adapters = fetcher.fetch().unwrap(); // Only zt* interfaces
/// ```
#[derive(Debug)]
pub struct FilteredFetcher<F, A> {
    inner: F,
    filter: A,
}

impl<F, A> FilteredFetcher<F, A> {
    /// Creates a new filtered fetcher.
    #[must_use]
    pub const fn new(inner: F, filter: A) -> Self {
        Self { inner, filter }
    }

    /// Returns a reference to the inner fetcher.
    pub const fn inner(&self) -> &F {
        &self.inner
    }

    /// Returns a reference to the filter.
    pub const fn filter(&self) -> &A {
        &self.filter
    }
}

impl<F: AddressFetcher, A: AdapterFilter> AddressFetcher for FilteredFetcher<F, A> {
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
        let snapshots = self.inner.fetch()?;
        Ok(snapshots
            .into_iter()
            .filter(|adapter| self.filter.matches(adapter))
            .collect())
    }
}

impl<T: AdapterFilter + ?Sized> AdapterFilter for &T {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        (*self).matches(adapter)
    }
}

impl AdapterFilter for Box<dyn AdapterFilter> {
    fn matches(&self, adapter: &AdapterSnapshot) -> bool {
        self.as_ref().matches(adapter)
    }
}
