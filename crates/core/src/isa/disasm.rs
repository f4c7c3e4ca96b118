//! Instruction renderer.
//!
//! Converts decoded instructions into the one-line textual form
//! `"<MNEMONIC> <role>: <value> ..."`. Register operands print as bare
//! indices and immediates as unsigned decimal.
//!
//! # Usage
//!
//! ```
//! use rv32dec_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x02802603), "LW dst: 12 base: 0 offset: 40");
//! assert_eq!(disassemble(0x00000033 | (2 << 25)), "Error - Invalid Instruction");
//! ```

use std::fmt;

use crate::common::error::{DecodeError, INVALID_INSTRUCTION_TEXT};
use crate::isa::decode::decode;
use crate::isa::instruction::DecodedInstruction;

impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ImmShift {
                mnemonic,
                dst,
                src,
                shamt,
            } => write!(f, "{mnemonic} dst: {dst} src: {src} shamt: {shamt}"),
            Self::ImmArith {
                mnemonic,
                dst,
                src,
                imm,
            } => write!(f, "{mnemonic} dst: {dst} src: {src} imm: {imm}"),
            Self::RegReg {
                mnemonic,
                dst,
                src1,
                src2,
            } => write!(f, "{mnemonic} dst: {dst} src1: {src1} src2: {src2}"),
            Self::Load {
                mnemonic,
                dst,
                base,
                offset,
            } => write!(f, "{mnemonic} dst: {dst} base: {base} offset: {offset}"),
            Self::Store {
                mnemonic,
                src,
                base,
                offset,
            } => write!(f, "{mnemonic} src: {src} base: {base} offset: {offset}"),
            Self::NoOperand { mnemonic } => write!(f, "{mnemonic}"),
        }
    }
}

/// Renders either outcome of a decode as a single line.
///
/// Invalid words render as [`INVALID_INSTRUCTION_TEXT`].
pub fn render(result: &Result<DecodedInstruction, DecodeError>) -> String {
    match result {
        Ok(inst) => inst.to_string(),
        Err(DecodeError::InvalidInstruction { .. }) => INVALID_INSTRUCTION_TEXT.to_owned(),
    }
}

/// Decodes and renders a 32-bit instruction word.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: u32) -> String {
    render(&decode(word))
}
