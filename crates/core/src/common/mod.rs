//! Common types shared across the decoder.
//!
//! Currently this is limited to the error types; field extraction and
//! classification live under [`crate::isa`].

/// Error types for decoding, parsing and configuration.
pub mod error;

pub use error::{
    ConfigError, DecodeError, INVALID_INSTRUCTION_TEXT, ParseMnemonicError, ParseWordError,
};
