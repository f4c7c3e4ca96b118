//! Configuration for the decoder driver.
//!
//! This module defines the configuration structures used by front ends. It provides:
//! 1. **Defaults:** Baseline output and logging settings.
//! 2. **Structures:** Output settings nested under the root [`Config`].
//! 3. **Loading:** JSON deserialisation from a string or file.
//!
//! Missing keys fall back to the defaults, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Do not prefix output lines with the raw word.
    pub const SHOW_WORD: bool = false;

    /// Do not print a summary after the listing.
    pub const STATS: bool = false;

    /// Invalid words are reported, not fatal.
    pub const STRICT: bool = false;

    /// Log filter used when `RUST_LOG` is not set.
    pub const LOG_LEVEL: &str = "warn";
}

/// Output encoding of the listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One rendered line per word.
    #[default]
    Text,
    /// One JSON object per word.
    Json,
}

/// Root configuration.
///
/// # Example
///
/// ```
/// use rv32dec_core::config::{Config, OutputFormat};
///
/// let json = r#"{
///     "output": { "format": "json", "show_word": true },
///     "strict": true
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.output.format, OutputFormat::Json);
/// assert!(config.output.show_word);
/// assert!(!config.output.stats);
/// assert!(config.strict);
/// assert_eq!(config.log_level, "warn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Listing output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Treat any invalid word as a failure of the whole run
    #[serde(default = "Config::default_strict")]
    pub strict: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Config {
    fn default_strict() -> bool {
        defaults::STRICT
    }

    fn default_log_level() -> String {
        defaults::LOG_LEVEL.to_owned()
    }

    /// Parses configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input or unknown enum values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Json`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_json_str(&text)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            strict: defaults::STRICT,
            log_level: defaults::LOG_LEVEL.to_owned(),
        }
    }
}

/// Listing output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Text or JSON lines
    #[serde(default)]
    pub format: OutputFormat,

    /// Prefix each text line with the raw word
    #[serde(default = "OutputConfig::default_show_word")]
    pub show_word: bool,

    /// Print a summary tally after the listing
    #[serde(default = "OutputConfig::default_stats")]
    pub stats: bool,
}

impl OutputConfig {
    fn default_show_word() -> bool {
        defaults::SHOW_WORD
    }

    fn default_stats() -> bool {
        defaults::STATS
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_word: defaults::SHOW_WORD,
            stats: defaults::STATS,
        }
    }
}
