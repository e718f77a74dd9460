//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use crate::network::IpVersion;

use super::OutputFormat;

/// Default interface name substring (ZeroTier adapters).
pub const FILTER: &str = crate::finder::DEFAULT_FILTER;

/// Default address family.
pub const IP_VERSION: IpVersion = IpVersion::V4;

/// Default output format.
pub const FORMAT: OutputFormat = OutputFormat::Text;

/// Default path written by the `init` subcommand.
pub const CONFIG_FILE: &str = "zt-addrs.toml";
