//! Application execution logic.
//!
//! Performs one lookup with the validated configuration and writes the
//! result to the given output.

use std::io::{self, Write};
use std::net::IpAddr;

use serde::Serialize;
use thiserror::Error;

use zt_addrs::config::{OutputFormat, ValidatedConfig};
use zt_addrs::network::{AddressFetcher, IpVersion};
use zt_addrs::{FindError, InterfaceAddressFinder};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Lookup failed in strict mode.
    #[error("Address lookup failed: {0}")]
    Lookup(#[source] FindError),

    /// Failed to write results.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),

    /// Failed to serialize results.
    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// The JSON shape of a lookup result.
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    /// The name substring that was matched.
    pub filter: &'a str,
    /// The address family that was requested.
    pub ip_version: IpVersion,
    /// Matching addresses in enumeration order.
    pub addresses: &'a [IpAddr],
}

/// Executes one lookup and prints the result.
///
/// In strict mode, enumeration failures are returned as [`RunError::Lookup`].
/// Otherwise they are logged and an empty result is printed.
///
/// # Errors
///
/// Returns [`RunError`] if the lookup fails in strict mode or the output
/// cannot be written.
pub fn execute<F: AddressFetcher, W: Write>(
    config: &ValidatedConfig,
    finder: &InterfaceAddressFinder<F>,
    out: &mut W,
) -> Result<(), RunError> {
    let needle = config.filter.needle();

    let addresses = if config.strict {
        finder
            .try_find(needle, config.ip_version)
            .map_err(RunError::Lookup)?
    } else {
        finder.find(needle, config.ip_version)
    };

    if addresses.is_empty() {
        tracing::info!(
            "No {} address found on interfaces matching '{needle}'",
            config.ip_version
        );
    }

    render(config, &addresses, out)
}

/// Writes addresses in the configured format.
fn render<W: Write>(
    config: &ValidatedConfig,
    addresses: &[IpAddr],
    out: &mut W,
) -> Result<(), RunError> {
    match config.format {
        OutputFormat::Text => {
            for addr in addresses {
                writeln!(out, "{addr}")?;
            }
        }
        OutputFormat::Json => {
            let report = LookupReport {
                filter: config.filter.needle(),
                ip_version: config.ip_version,
                addresses,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
