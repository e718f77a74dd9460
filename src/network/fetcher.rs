//! Address fetching trait and error types.

use super::AdapterSnapshot;
use thiserror::Error;

/// Error type for interface enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide whether to surface the failure or fall back to an empty result.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The operating system refused to enumerate interfaces.
    #[error("Interface enumeration failed: {0}")]
    Io(#[from] std::io::Error),

    /// Permission denied to access network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },
}

impl FetchError {
    /// Returns true if the failure was caused by missing privileges.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

/// Trait for fetching network interface address information.
///
/// This is the seam between lookup logic and the operating system.
/// Tests substitute a mock implementation returning canned snapshots.
///
/// # Example
///
/// ```
/// use zt_addrs::network::{AdapterSnapshot, AddressFetcher, FetchError};
///
/// struct Fixed(Vec<AdapterSnapshot>);
///
/// impl AddressFetcher for Fixed {
///     fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let fetcher = Fixed(vec![AdapterSnapshot::empty("zt0")]);
/// assert_eq!(fetcher.fetch().unwrap()[0].name, "zt0");
/// ```
pub trait AddressFetcher: Send + Sync {
    /// Fetches the current state of all network interfaces.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when:
    /// - The OS enumeration call fails (`FetchError::Io`)
    /// - Insufficient permissions to access network information (`FetchError::PermissionDenied`)
    ///
    /// # Implementation Notes
    ///
    /// - Implementations should return ALL interfaces; filtering is done by the caller
    /// - Interface order should follow the OS enumeration order
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError>;
}

impl<T: AddressFetcher + ?Sized> AddressFetcher for &T {
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
        (*self).fetch()
    }
}

impl<T: AddressFetcher + ?Sized> AddressFetcher for Box<T> {
    fn fetch(&self) -> Result<Vec<AdapterSnapshot>, FetchError> {
        self.as_ref().fetch()
    }
}
