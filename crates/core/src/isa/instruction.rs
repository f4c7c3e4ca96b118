//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction functions and a field snapshot structure for
//! pulling named RV32I fields out of 32-bit instruction encodings, and the
//! structured [`DecodedInstruction`] the decoder produces from them.

use serde::{Deserialize, Serialize};

use crate::isa::mnemonic::{Mnemonic, Shape};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the I-Type immediate field (bits 20-31).
pub const IMM_I_MASK: u32 = 0xFFF;
/// Bit mask for the S-Type immediate high field (7 bits: imm[11:5]).
pub const IMM_S_HI_MASK: u32 = 0x7F;
/// Bit mask for the S-Type immediate low field (5 bits: imm[4:0]).
pub const IMM_S_LO_MASK: u32 = 0x1F;
/// Bit mask for the top two bits of the word (bits 30-31).
pub const STORE_TOP_MASK: u32 = 0x3;

/// Bit shift placing the S-Type high field above the low field.
const IMM_S_COMBINED_SHIFT: u32 = 5;

/// Joins the S-Type immediate halves into the raw 12-bit offset.
#[inline(always)]
const fn join_store_offset(hi: u32, lo: u32) -> u32 {
    (hi << IMM_S_COMBINED_SHIFT) | lo
}

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every extractor is a single shift-and-mask; none of them can fail.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the shift amount (bits 20-24).
    ///
    /// Occupies the same bits as `rs2`; only meaningful for SLLI/SRLI/SRAI.
    fn shamt(&self) -> u32;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the raw 12-bit I-Type immediate (bits 20-31), zero-extended.
    fn imm_i(&self) -> u32;

    /// Extracts the S-Type immediate high part, imm[11:5] (bits 25-31).
    fn imm_s_hi(&self) -> u32;

    /// Extracts the S-Type immediate low part, imm[4:0] (bits 7-11).
    fn imm_s_lo(&self) -> u32;

    /// Concatenates `imm_s_hi || imm_s_lo` into the raw 12-bit store offset.
    fn store_offset(&self) -> u32;

    /// Extracts bits 30-31, which the SW guard requires to be zero.
    fn store_top(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 20) & RS2_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    /// Shifts the word logically (not arithmetically), so bit 31 is never
    /// propagated into the result.
    #[inline(always)]
    fn imm_i(&self) -> u32 {
        (self >> 20) & IMM_I_MASK
    }

    #[inline(always)]
    fn imm_s_hi(&self) -> u32 {
        (self >> 25) & IMM_S_HI_MASK
    }

    #[inline(always)]
    fn imm_s_lo(&self) -> u32 {
        (self >> 7) & IMM_S_LO_MASK
    }

    #[inline(always)]
    fn store_offset(&self) -> u32 {
        join_store_offset(self.imm_s_hi(), self.imm_s_lo())
    }

    #[inline(always)]
    fn store_top(&self) -> u32 {
        (self >> 30) & STORE_TOP_MASK
    }
}

/// Snapshot of every named field of one instruction word.
///
/// Built once per decode so classification and operand construction read
/// plain struct fields instead of re-extracting bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fields {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Shift amount (same bits as `rs2`).
    pub shamt: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Raw, zero-extended I-Type immediate.
    pub imm_i: u32,
    /// S-Type immediate high part.
    pub imm_s_hi: u32,
    /// S-Type immediate low part.
    pub imm_s_lo: u32,
    /// Bits 30-31.
    pub store_top: u32,
}

impl Fields {
    /// Extracts all fields from `word`.
    #[inline]
    pub fn extract(word: u32) -> Self {
        Self {
            raw: word,
            opcode: word.opcode(),
            rd: word.rd(),
            funct3: word.funct3(),
            rs1: word.rs1(),
            rs2: word.rs2(),
            shamt: word.shamt(),
            funct7: word.funct7(),
            imm_i: word.imm_i(),
            imm_s_hi: word.imm_s_hi(),
            imm_s_lo: word.imm_s_lo(),
            store_top: word.store_top(),
        }
    }

    /// Raw 12-bit store offset, `imm_s_hi || imm_s_lo`.
    #[inline]
    pub const fn store_offset(&self) -> u32 {
        join_store_offset(self.imm_s_hi, self.imm_s_lo)
    }

    /// Whether the base register is `x0`.
    #[inline]
    pub const fn rs1_is_zero(&self) -> bool {
        self.rs1 == 0
    }
}

impl From<u32> for Fields {
    fn from(word: u32) -> Self {
        Self::extract(word)
    }
}

/// Decoded instruction, one variant per operand shape.
///
/// Register operands are indices (0-31). Immediates are the raw unsigned
/// field values; nothing is sign-extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DecodedInstruction {
    /// SLLI, SRLI, SRAI.
    ImmShift {
        /// Instruction name.
        mnemonic: Mnemonic,
        /// Destination register (`rd`).
        dst: usize,
        /// Source register (`rs1`).
        src: usize,
        /// Shift amount (bits 20-24).
        shamt: u32,
    },
    /// ADDI, SLTI, SLTIU, XORI, ORI, ANDI.
    ImmArith {
        /// Instruction name.
        mnemonic: Mnemonic,
        /// Destination register (`rd`).
        dst: usize,
        /// Source register (`rs1`).
        src: usize,
        /// Raw 12-bit immediate, zero-extended.
        imm: u32,
    },
    /// Register-register arithmetic, logic and multiply.
    RegReg {
        /// Instruction name.
        mnemonic: Mnemonic,
        /// Destination register (`rd`).
        dst: usize,
        /// First source register (`rs1`).
        src1: usize,
        /// Second source register (`rs2`).
        src2: usize,
    },
    /// LW.
    Load {
        /// Instruction name.
        mnemonic: Mnemonic,
        /// Destination register (`rd`).
        dst: usize,
        /// Base register (`rs1`, always `x0`).
        base: usize,
        /// Raw 12-bit I-Type offset.
        offset: u32,
    },
    /// SW.
    Store {
        /// Instruction name.
        mnemonic: Mnemonic,
        /// Register being stored (`rs2`).
        src: usize,
        /// Base register (`rs1`, always `x0`).
        base: usize,
        /// Raw 12-bit S-Type offset.
        offset: u32,
    },
    /// NOP.
    NoOperand {
        /// Instruction name.
        mnemonic: Mnemonic,
    },
}

impl DecodedInstruction {
    /// Builds the variant for `mnemonic`'s shape from already extracted fields.
    pub const fn from_fields(mnemonic: Mnemonic, f: &Fields) -> Self {
        match mnemonic.shape() {
            Shape::ImmShift => Self::ImmShift {
                mnemonic,
                dst: f.rd,
                src: f.rs1,
                shamt: f.shamt,
            },
            Shape::ImmArith => Self::ImmArith {
                mnemonic,
                dst: f.rd,
                src: f.rs1,
                imm: f.imm_i,
            },
            Shape::RegReg => Self::RegReg {
                mnemonic,
                dst: f.rd,
                src1: f.rs1,
                src2: f.rs2,
            },
            Shape::Load => Self::Load {
                mnemonic,
                dst: f.rd,
                base: f.rs1,
                offset: f.imm_i,
            },
            Shape::Store => Self::Store {
                mnemonic,
                src: f.rs2,
                base: f.rs1,
                offset: f.store_offset(),
            },
            Shape::NoOperand => Self::NoOperand { mnemonic },
        }
    }

    /// Instruction name.
    pub const fn mnemonic(&self) -> Mnemonic {
        match *self {
            Self::ImmShift { mnemonic, .. }
            | Self::ImmArith { mnemonic, .. }
            | Self::RegReg { mnemonic, .. }
            | Self::Load { mnemonic, .. }
            | Self::Store { mnemonic, .. }
            | Self::NoOperand { mnemonic } => mnemonic,
        }
    }

    /// Operand shape of this variant.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::ImmShift { .. } => Shape::ImmShift,
            Self::ImmArith { .. } => Shape::ImmArith,
            Self::RegReg { .. } => Shape::RegReg,
            Self::Load { .. } => Shape::Load,
            Self::Store { .. } => Shape::Store,
            Self::NoOperand { .. } => Shape::NoOperand,
        }
    }
}
