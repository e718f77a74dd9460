//! Configuration layer for zt-addrs.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Every setting has a default, so running without any configuration looks
//! up the IPv4 addresses of `zt*` interfaces.
//!
//! # Boolean Flag Semantics
//!
//! `--strict` uses OR semantics: if set `true` in either CLI or TOML, the
//! result is `true`. The CLI cannot turn off a TOML `strict = true`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, IpVersionArg, OutputFormatArg};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{OutputFormat, ValidatedConfig, write_default_config};
