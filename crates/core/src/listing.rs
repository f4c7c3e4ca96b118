//! Batch decoding into an ordered listing.
//!
//! A listing keeps one entry per input word, in input order, including the
//! words that failed to decode.

use serde::Serialize;

use crate::common::error::DecodeError;
use crate::isa::decode::decode;
use crate::isa::disasm::render;
use crate::isa::instruction::DecodedInstruction;
use crate::stats::DecodeStats;

/// One decoded word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Position of the word in the input.
    pub index: usize,
    /// The raw word.
    pub word: u32,
    /// Decode outcome.
    pub result: Result<DecodedInstruction, DecodeError>,
}

impl Entry {
    /// Decodes `word` at position `index`.
    pub fn new(index: usize, word: u32) -> Self {
        Self {
            index,
            word,
            result: decode(word),
        }
    }

    /// Rendered text of the outcome.
    pub fn text(&self) -> String {
        render(&self.result)
    }

    /// One output line, optionally prefixed with the raw word.
    pub fn line(&self, show_word: bool) -> String {
        if show_word {
            format!("{:#010x}  {}", self.word, self.text())
        } else {
            self.text()
        }
    }

    /// Serialisable view of this entry.
    pub fn record(&self) -> EntryRecord {
        let (instruction, error) = match self.result {
            Ok(inst) => (Some(inst), None),
            Err(e) => (None, Some(e.to_string())),
        };
        EntryRecord {
            index: self.index,
            word: format!("{:#010x}", self.word),
            text: self.text(),
            instruction,
            error,
        }
    }
}

/// JSON shape of a listing entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    /// Position of the word in the input.
    pub index: usize,
    /// The raw word as `0x%08x`.
    pub word: String,
    /// Rendered text.
    pub text: String,
    /// Decoded instruction, when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<DecodedInstruction>,
    /// Error message, when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Ordered decode results for a batch of words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<Entry>,
}

impl Listing {
    /// Decodes every word, preserving order.
    pub fn decode_all<I>(words: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let entries = words
            .into_iter()
            .enumerate()
            .map(|(index, word)| Entry::new(index, word))
            .collect();
        Self { entries }
    }

    /// Entries in input order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the listing holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that failed to decode.
    pub fn invalid(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.result.is_err())
    }

    /// Tally of the listing's outcomes.
    pub fn stats(&self) -> DecodeStats {
        self.entries.iter().map(|e| &e.result).collect()
    }

    /// One rendered line per entry.
    pub fn render_lines(&self, show_word: bool) -> Vec<String> {
        self.entries.iter().map(|e| e.line(show_word)).collect()
    }

    /// One rendered line per entry, newline-terminated.
    pub fn render_text(&self, show_word: bool) -> String {
        let mut out = String::new();
        for line in self.render_lines(show_word) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// One JSON object per entry.
    ///
    /// # Errors
    ///
    /// Propagates serialisation failures from `serde_json`.
    pub fn to_json_lines(&self) -> Result<Vec<String>, serde_json::Error> {
        self.entries
            .iter()
            .map(|e| serde_json::to_string(&e.record()))
            .collect()
    }
}

impl FromIterator<u32> for Listing {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::decode_all(iter)
    }
}
