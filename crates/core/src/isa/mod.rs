//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code constants of the decoded subset,
//! field extraction, classification, and rendering.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (OP-IMM, OP, LW, SW and the NOP sentinel).
//! * `rv32m`: Multiply instructions (MUL, MULH, MULHSU, MULHU).

/// Instruction classification and decoding.
pub mod decode;

/// Rendering of decoded instructions as text.
pub mod disasm;

/// Field extraction utilities and the decoded instruction type.
pub mod instruction;

/// Mnemonic enumeration and classification table.
pub mod mnemonic;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

/// Integer multiply extension.
pub mod rv32m;

/// Hexadecimal word parsing.
pub mod word;

pub use decode::decode;
pub use disasm::disassemble;
pub use instruction::{DecodedInstruction, Fields, InstructionBits};
pub use mnemonic::{Mnemonic, Shape};
