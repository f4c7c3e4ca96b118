//! RISC-V Base Integer (I) Opcodes.
//!
//! Major opcodes (bits 6-0) recognised by the decoder.

/// Load instructions (only LW with `rs1 == x0` is decoded).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Store instructions (only SW with `rs1 == x0` is decoded).
pub const OP_STORE: u32 = 0b0100011;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.), shared with the M extension.
pub const OP_REG: u32 = 0b0110011;

/// All-ones major opcode used as the NOP sentinel.
///
/// This is not the canonical `addi x0, x0, 0` encoding; any word whose low
/// seven bits are set decodes as NOP regardless of the remaining bits.
pub const OP_NOP: u32 = 0b1111111;
