//! RISC-V RV32I subset instruction decoder.
//!
//! This crate turns 32-bit RISC-V machine-code words into structured
//! instructions and one-line text:
//! 1. **ISA:** Field extraction, classification and rendering for OP-IMM,
//!    OP (including MUL/MULH/MULHSU/MULHU), LW and SW with base `x0`, and the
//!    all-ones NOP sentinel.
//! 2. **Listing:** Ordered batch decoding with per-word outcomes.
//! 3. **Statistics:** Tallies of valid/invalid words by shape and mnemonic.
//! 4. **Configuration:** Driver settings loaded from JSON.
//!
//! Decoding is pure and total: every `u32` yields either one instruction or
//! [`DecodeError::InvalidInstruction`].

/// Common types (errors).
pub mod common;
/// Driver configuration (defaults, output format, JSON loading).
pub mod config;
/// Instruction set (fields, mnemonics, decode, rendering, word parsing).
pub mod isa;
/// Batch decoding into ordered listings.
pub mod listing;
/// Decode statistics collection and reporting.
pub mod stats;

/// Decode error type; the only failure mode of [`decode`].
pub use crate::common::error::DecodeError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Decode entry points.
pub use crate::isa::{DecodedInstruction, Mnemonic, Shape, decode, disassemble};
/// Batch decoding.
pub use crate::listing::Listing;
/// Decode tallies.
pub use crate::stats::DecodeStats;
