//! Decode statistics collection and reporting.
//!
//! Tallies the outcome of decoding a batch of words:
//! 1. **Totals:** Words seen, decoded and rejected.
//! 2. **Shape mix:** Counts by operand shape.
//! 3. **Mnemonic mix:** Counts by mnemonic, in classification priority order.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::common::error::DecodeError;
use crate::isa::instruction::DecodedInstruction;
use crate::isa::mnemonic::{Mnemonic, Shape};

/// Decode statistics for a batch of words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Number of words seen.
    pub total: u64,
    /// Number of words that decoded to an instruction.
    pub valid: u64,
    /// Number of words rejected as invalid.
    pub invalid: u64,
    /// Decoded words per operand shape.
    pub by_shape: BTreeMap<Shape, u64>,
    /// Decoded words per mnemonic.
    pub by_mnemonic: BTreeMap<Mnemonic, u64>,
}

impl DecodeStats {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one decode outcome.
    pub fn record(&mut self, result: &Result<DecodedInstruction, DecodeError>) {
        self.total += 1;
        match result {
            Ok(inst) => {
                self.valid += 1;
                *self.by_shape.entry(inst.shape()).or_default() += 1;
                *self.by_mnemonic.entry(inst.mnemonic()).or_default() += 1;
            }
            Err(_) => self.invalid += 1,
        }
    }

    /// Adds another tally into this one.
    pub fn merge(&mut self, other: &Self) {
        self.total += other.total;
        self.valid += other.valid;
        self.invalid += other.invalid;
        for (shape, n) in &other.by_shape {
            *self.by_shape.entry(*shape).or_default() += n;
        }
        for (mnemonic, n) in &other.by_mnemonic {
            *self.by_mnemonic.entry(*mnemonic).or_default() += n;
        }
    }

    /// Count for one mnemonic (zero when never seen).
    pub fn mnemonic_count(&self, mnemonic: Mnemonic) -> u64 {
        self.by_mnemonic.get(&mnemonic).copied().unwrap_or(0)
    }

    /// Count for one shape (zero when never seen).
    pub fn shape_count(&self, shape: Shape) -> u64 {
        self.by_shape.get(&shape).copied().unwrap_or(0)
    }

    /// Whether any word was rejected.
    pub const fn has_invalid(&self) -> bool {
        self.invalid > 0
    }
}

impl<'a> FromIterator<&'a Result<DecodedInstruction, DecodeError>> for DecodeStats {
    fn from_iter<I: IntoIterator<Item = &'a Result<DecodedInstruction, DecodeError>>>(
        iter: I,
    ) -> Self {
        let mut stats = Self::new();
        for result in iter {
            stats.record(result);
        }
        stats
    }
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "decoded {} words: {} valid, {} invalid",
            self.total, self.valid, self.invalid
        )?;
        for shape in Shape::ALL {
            let n = self.shape_count(shape);
            if n > 0 {
                writeln!(f, "  {:<12}{n}", shape.label())?;
            }
        }
        for (mnemonic, n) in &self.by_mnemonic {
            writeln!(f, "  {:<12}{n}", mnemonic.name())?;
        }
        Ok(())
    }
}
