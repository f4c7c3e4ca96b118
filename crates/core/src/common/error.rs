//! Error definitions.
//!
//! This module defines the error types surfaced by the decoder and its input
//! helpers:
//! 1. **Decode errors:** A word outside the supported subset.
//! 2. **Parse errors:** Malformed hexadecimal words or mnemonic names.
//! 3. **Configuration errors:** Unreadable or malformed configuration files.

use std::path::PathBuf;

use thiserror::Error;

/// Diagnostic rendered in place of an instruction for undecodable words.
pub const INVALID_INSTRUCTION_TEXT: &str = "Error - Invalid Instruction";

/// Outcome of a failed decode.
///
/// Failing to decode is an ordinary result: the caller reports it and moves on
/// to the next word.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// No mnemonic in the supported subset matches the word.
    ///
    /// The associated value is the instruction encoding.
    #[error("invalid instruction {word:#010x}")]
    InvalidInstruction {
        /// The word that failed to decode.
        word: u32,
    },
}

impl DecodeError {
    /// The word that failed to decode.
    pub const fn word(&self) -> u32 {
        match self {
            Self::InvalidInstruction { word } => *word,
        }
    }
}

/// Failure to read a hexadecimal instruction word from text.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseWordError {
    /// Nothing but whitespace (or a bare `0x` prefix) was supplied.
    #[error("empty instruction word")]
    Empty,

    /// A character that is not a hexadecimal digit or `_` separator.
    #[error("invalid hex digit in {text:?}")]
    InvalidDigit {
        /// The offending input, trimmed.
        text: String,
    },

    /// The value does not fit in 32 bits.
    #[error("{text:?} does not fit in a 32-bit word")]
    TooWide {
        /// The offending input, trimmed.
        text: String,
    },
}

/// Unknown mnemonic name.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown mnemonic {name:?}")]
pub struct ParseMnemonicError {
    /// The name that was looked up.
    pub name: String,
}

/// Failure to load a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
