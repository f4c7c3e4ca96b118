//! Mnemonics of the decoded instruction subset.
//!
//! Each mnemonic carries its row of the classification table as a closed-form
//! predicate over the extracted fields, and the operand shape it decodes into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::ParseMnemonicError;
use crate::isa::instruction::Fields;
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv32m::{funct3 as m_f3, opcodes as m_op};

/// Operand layout of a decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// `dst`, `src`, `shamt` (SLLI, SRLI, SRAI).
    ImmShift,
    /// `dst`, `src`, `imm` (the other OP-IMM instructions).
    ImmArith,
    /// `dst`, `src1`, `src2` (OP and the multiply extension).
    RegReg,
    /// `dst`, `base`, `offset` (LW).
    Load,
    /// `src`, `base`, `offset` (SW).
    Store,
    /// No operands (NOP).
    NoOperand,
}

impl Shape {
    /// Every shape, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::ImmShift,
        Self::ImmArith,
        Self::RegReg,
        Self::Load,
        Self::Store,
        Self::NoOperand,
    ];

    /// Short lower-case label used in summaries.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ImmShift => "imm-shift",
            Self::ImmArith => "imm-arith",
            Self::RegReg => "reg-reg",
            Self::Load => "load",
            Self::Store => "store",
            Self::NoOperand => "no-operand",
        }
    }
}

/// Symbolic name of a decodable instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum Mnemonic {
    Andi,
    Sltiu,
    Srli,
    Slti,
    Srai,
    Slli,
    Ori,
    Xori,
    Addi,
    Lw,
    And,
    Sltu,
    Mulh,
    Sra,
    Xor,
    Sub,
    Slt,
    Mulhsu,
    Mulhu,
    Srl,
    Sll,
    Add,
    Mul,
    Or,
    Sw,
    Nop,
}

impl Mnemonic {
    /// Every mnemonic in classification priority order.
    ///
    /// When more than one predicate holds for a word, the earliest entry wins.
    /// The table rows are disjoint, so the order never changes a result for
    /// the supported subset.
    pub const ALL: [Self; 26] = [
        Self::Andi,
        Self::Sltiu,
        Self::Srli,
        Self::Slti,
        Self::Srai,
        Self::Slli,
        Self::Ori,
        Self::Xori,
        Self::Addi,
        Self::Lw,
        Self::And,
        Self::Sltu,
        Self::Mulh,
        Self::Sra,
        Self::Xor,
        Self::Sub,
        Self::Slt,
        Self::Mulhsu,
        Self::Mulhu,
        Self::Srl,
        Self::Sll,
        Self::Add,
        Self::Mul,
        Self::Or,
        Self::Sw,
        Self::Nop,
    ];

    /// Upper-case assembly name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Andi => "ANDI",
            Self::Sltiu => "SLTIU",
            Self::Srli => "SRLI",
            Self::Slti => "SLTI",
            Self::Srai => "SRAI",
            Self::Slli => "SLLI",
            Self::Ori => "ORI",
            Self::Xori => "XORI",
            Self::Addi => "ADDI",
            Self::Lw => "LW",
            Self::And => "AND",
            Self::Sltu => "SLTU",
            Self::Mulh => "MULH",
            Self::Sra => "SRA",
            Self::Xor => "XOR",
            Self::Sub => "SUB",
            Self::Slt => "SLT",
            Self::Mulhsu => "MULHSU",
            Self::Mulhu => "MULHU",
            Self::Srl => "SRL",
            Self::Sll => "SLL",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Or => "OR",
            Self::Sw => "SW",
            Self::Nop => "NOP",
        }
    }

    /// Operand shape this mnemonic decodes into.
    pub const fn shape(self) -> Shape {
        match self {
            Self::Slli | Self::Srli | Self::Srai => Shape::ImmShift,
            Self::Addi
            | Self::Slti
            | Self::Sltiu
            | Self::Xori
            | Self::Ori
            | Self::Andi => Shape::ImmArith,
            Self::Lw => Shape::Load,
            Self::Sw => Shape::Store,
            Self::Nop => Shape::NoOperand,
            Self::And
            | Self::Sltu
            | Self::Mulh
            | Self::Sra
            | Self::Xor
            | Self::Sub
            | Self::Slt
            | Self::Mulhsu
            | Self::Mulhu
            | Self::Srl
            | Self::Sll
            | Self::Add
            | Self::Mul
            | Self::Or => Shape::RegReg,
        }
    }

    /// Evaluates this mnemonic's row of the classification table.
    ///
    /// A dash in the table (field not constrained) is simply not tested here.
    pub const fn matches(self, f: &Fields) -> bool {
        let (op, f3, f7) = (f.opcode, f.funct3, f.funct7);
        match self {
            Self::Addi => op == i_op::OP_IMM && f3 == i_f3::ADD_SUB,
            Self::Slli => op == i_op::OP_IMM && f3 == i_f3::SLL && f7 == i_f7::DEFAULT,
            Self::Slti => op == i_op::OP_IMM && f3 == i_f3::SLT,
            Self::Sltiu => op == i_op::OP_IMM && f3 == i_f3::SLTU,
            Self::Xori => op == i_op::OP_IMM && f3 == i_f3::XOR,
            Self::Srli => op == i_op::OP_IMM && f3 == i_f3::SRL_SRA && f7 == i_f7::DEFAULT,
            Self::Srai => op == i_op::OP_IMM && f3 == i_f3::SRL_SRA && f7 == i_f7::SRA,
            Self::Ori => op == i_op::OP_IMM && f3 == i_f3::OR,
            Self::Andi => op == i_op::OP_IMM && f3 == i_f3::AND,

            Self::Lw => op == i_op::OP_LOAD && f3 == i_f3::LW && f.rs1_is_zero(),
            Self::Sw => {
                op == i_op::OP_STORE && f3 == i_f3::SW && f.rs1_is_zero() && f.store_top == 0
            }

            Self::Add => op == i_op::OP_REG && f3 == i_f3::ADD_SUB && f7 == i_f7::DEFAULT,
            Self::Sub => op == i_op::OP_REG && f3 == i_f3::ADD_SUB && f7 == i_f7::SUB,
            Self::Mul => op == i_op::OP_REG && f3 == m_f3::MUL && f7 == m_op::M_EXTENSION,
            Self::Sll => op == i_op::OP_REG && f3 == i_f3::SLL && f7 == i_f7::DEFAULT,
            Self::Mulh => op == i_op::OP_REG && f3 == m_f3::MULH && f7 == m_op::M_EXTENSION,
            Self::Slt => op == i_op::OP_REG && f3 == i_f3::SLT && f7 == i_f7::DEFAULT,
            Self::Mulhsu => op == i_op::OP_REG && f3 == m_f3::MULHSU && f7 == m_op::M_EXTENSION,
            Self::Sltu => op == i_op::OP_REG && f3 == i_f3::SLTU && f7 == i_f7::DEFAULT,
            Self::Mulhu => op == i_op::OP_REG && f3 == m_f3::MULHU && f7 == m_op::M_EXTENSION,
            Self::Xor => op == i_op::OP_REG && f3 == i_f3::XOR && f7 == i_f7::DEFAULT,
            Self::Srl => op == i_op::OP_REG && f3 == i_f3::SRL_SRA && f7 == i_f7::DEFAULT,
            Self::Sra => op == i_op::OP_REG && f3 == i_f3::SRL_SRA && f7 == i_f7::SRA,
            Self::Or => op == i_op::OP_REG && f3 == i_f3::OR && f7 == i_f7::DEFAULT,
            Self::And => op == i_op::OP_REG && f3 == i_f3::AND && f7 == i_f7::DEFAULT,

            Self::Nop => op == i_op::OP_NOP,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mnemonic {
    type Err = ParseMnemonicError;

    /// Parses a mnemonic name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseMnemonicError {
                name: trimmed.to_owned(),
            })
    }
}
