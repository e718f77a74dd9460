//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::network::IpVersion;
use crate::network::filter::NameContainsFilter;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// How lookup results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One address per line.
    Text,
    /// A single JSON object with the query and its addresses.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Interface name filter
    pub filter: NameContainsFilter,

    /// Address family to report
    pub ip_version: IpVersion,

    /// Whether enumeration failures are fatal
    pub strict: bool,

    /// Output format
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ filter: {:?}, ip_version: {}, strict: {}, format: {} }}",
            self.filter.needle(),
            self.ip_version,
            self.strict,
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The filter is empty
    /// - The TOML `ip_version` or `format` value is not recognized
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let filter = Self::resolve_filter(cli, toml)?;
        let ip_version = Self::resolve_ip_version(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        // Merge strict (CLI wins if true)
        let strict = cli.strict || toml.is_some_and(|t| t.lookup.strict);

        Ok(Self {
            filter,
            ip_version,
            strict,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_filter(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<NameContainsFilter, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let value = cli
            .filter
            .as_deref()
            .or_else(|| toml.and_then(|t| t.lookup.filter.as_deref()))
            .unwrap_or(defaults::FILTER);

        NameContainsFilter::new(value).map_err(|e| ConfigError::InvalidFilter {
            value: value.to_string(),
            source: e,
        })
    }

    fn resolve_ip_version(cli: &Cli, toml: Option<&TomlConfig>) -> Result<IpVersion, ConfigError> {
        if let Some(version) = cli.ip_version {
            return Ok(version.into());
        }

        match toml.and_then(|t| t.lookup.ip_version.as_deref()) {
            Some(value) => parse_ip_version(value),
            None => Ok(defaults::IP_VERSION),
        }
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        match toml.and_then(|t| t.output.format.as_deref()) {
            Some(value) => parse_output_format(value),
            None => Ok(defaults::FORMAT),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_ip_version(s: &str) -> Result<IpVersion, ConfigError> {
    match s.to_lowercase().as_str() {
        "ipv4" | "v4" | "4" => Ok(IpVersion::V4),
        "ipv6" | "v6" | "6" => Ok(IpVersion::V6),
        "both" | "all" | "dual" => Ok(IpVersion::Both),
        _ => Err(ConfigError::InvalidIpVersion {
            value: s.to_string(),
        }),
    }
}

fn parse_output_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" | "plain" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
