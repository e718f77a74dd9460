//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Lookup configuration section
    #[serde(default)]
    pub lookup: LookupSection,

    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,
}

/// Lookup configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupSection {
    /// Interface name substring
    pub filter: Option<String>,

    /// Address family: "ipv4", "ipv6", or "both"
    pub ip_version: Option<String>,

    /// Fail instead of printing nothing when enumeration fails
    #[serde(default)]
    pub strict: bool,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# zt-addrs Configuration File

[lookup]
# Interface name substring, matched case-sensitively anywhere in the name
# (default: "zt", the ZeroTier adapter prefix)
filter = "zt"

# Address family to report (default: "ipv4")
# Accepted values: "ipv4"/"v4"/"4", "ipv6"/"v6"/"6", or "both"/"all"/"dual"
ip_version = "ipv4"

# Exit with an error when interfaces cannot be enumerated, instead of
# logging the failure and printing nothing
# strict = false

[output]
# Output format: "text" (one address per line) or "json"
# format = "text"
"#
    .to_string()
}
