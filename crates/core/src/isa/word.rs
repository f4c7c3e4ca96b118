//! Hexadecimal instruction word input.
//!
//! Words are written as hex digits with an optional `0x` prefix and optional
//! `_` separators. Short inputs are zero-extended to 32 bits, so `5413` is the
//! word `0x0000_5413`.

use crate::common::error::ParseWordError;

/// Maximum number of significant hex digits in a 32-bit word.
const MAX_HEX_DIGITS: usize = 8;

/// Character that starts a comment in word lists.
const COMMENT_CHAR: char = '#';

/// Sample words decoded by the driver's `--sample` mode.
///
/// Two loads, a store, and the SRAI/SLLI pair that differ only in funct7.
pub const SAMPLE_WORDS: [u32; 5] = [0x02802603, 0x06402423, 0x06802e03, 0x40005413, 0x00005413];

/// Parses one hexadecimal instruction word.
///
/// # Errors
///
/// * [`ParseWordError::Empty`] for blank input or a bare prefix.
/// * [`ParseWordError::InvalidDigit`] for any non-hex character.
/// * [`ParseWordError::TooWide`] when the value needs more than 32 bits.
pub fn parse_word(text: &str) -> Result<u32, ParseWordError> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: String = body.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(ParseWordError::Empty);
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ParseWordError::InvalidDigit {
            text: trimmed.to_owned(),
        });
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_HEX_DIGITS {
        return Err(ParseWordError::TooWide {
            text: trimmed.to_owned(),
        });
    }
    if significant.is_empty() {
        return Ok(0);
    }

    u32::from_str_radix(significant, 16).map_err(|_| ParseWordError::InvalidDigit {
        text: trimmed.to_owned(),
    })
}

/// Splits a word list into tokens.
///
/// Tokens are separated by whitespace or commas; everything after `#` on a
/// line is ignored.
pub fn tokens(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(|line| line.split(COMMENT_CHAR).next().unwrap_or(""))
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|tok| !tok.is_empty())
}

/// Parses every token of a word list, preserving order.
pub fn parse_words(source: &str) -> Vec<Result<u32, ParseWordError>> {
    tokens(source).map(parse_word).collect()
}
