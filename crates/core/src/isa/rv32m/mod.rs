//! RISC-V Multiply Extension (M), multiply subset.
//!
//! These instructions share the `OP_REG` opcode with base integer arithmetic
//! but are distinguished by the `funct7` field being set to 1 (`M_EXTENSION`).

/// Function code 3 definitions for multiply operations.
pub mod funct3;

/// Multiply extension opcodes.
pub mod opcodes;
