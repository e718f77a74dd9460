//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::validated::OutputFormat;

/// zt-addrs: overlay interface address lookup
///
/// Prints the addresses bound to network interfaces whose name contains
/// a substring (ZeroTier `zt*` adapters by default).
#[derive(Debug, Parser)]
#[command(name = "zt-addrs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Interface name substring to match (case-sensitive) [default: zt]
    #[arg(long, short, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// Address family to report [default: ipv4]
    #[arg(long = "ip-version", value_enum)]
    pub ip_version: Option<IpVersionArg>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Fail with a non-zero exit code when interfaces cannot be enumerated
    #[arg(long)]
    pub strict: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for zt-addrs
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// IP version argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IpVersionArg {
    /// IPv4 addresses only
    #[value(name = "ipv4")]
    V4,
    /// IPv6 addresses only
    #[value(name = "ipv6")]
    V6,
    /// Both IPv4 and IPv6 addresses
    #[value(name = "both")]
    Both,
}

impl From<IpVersionArg> for crate::network::IpVersion {
    fn from(arg: IpVersionArg) -> Self {
        match arg {
            IpVersionArg::V4 => Self::V4,
            IpVersionArg::V6 => Self::V6,
            IpVersionArg::Both => Self::Both,
        }
    }
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// One address per line
    Text,
    /// A single JSON object
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => Self::Text,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
