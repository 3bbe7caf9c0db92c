//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags are applied on top in `main.rs`.
//!
//! | Variable               | Values        | Default |
//! |------------------------|---------------|---------|
//! | `SALESTAX_FORMAT`      | `text`/`json` | `text`  |
//! | `SALESTAX_LENIENT`     | `true`/`false`| `false` |
//! | `SALESTAX_ECHO_INPUT`  | `true`/`false`| `true`  |

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// How receipts are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Echoed input, receipt lines, dash separator.
    #[default]
    Text,
    /// A single JSON array of receipts.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format
    pub format: OutputFormat,

    /// Skip malformed lines instead of rejecting the whole cart
    pub lenient: bool,

    /// Print each cart's input lines before its receipt (text only)
    pub echo_input: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            format: OutputFormat::Text,
            lenient: false,
            echo_input: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key → value lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        Ok(CliConfig {
            format: parse_var(&lookup, "SALESTAX_FORMAT", defaults.format)?,
            lenient: parse_var(&lookup, "SALESTAX_LENIENT", defaults.lenient)?,
            echo_input: parse_var(&lookup, "SALESTAX_ECHO_INPUT", defaults.echo_input)?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
