//! RV32I subset instruction decoder.
//!
//! This module classifies a 32-bit encoding into one of the supported
//! mnemonics and builds the matching [`DecodedInstruction`]. Classification
//! looks only at `opcode`, `funct3`, `funct7`, whether `rs1` is `x0`, and (for
//! SW) bits 31-30. Immediates are taken as raw unsigned fields and are never
//! sign-extended.

use crate::common::error::DecodeError;
use crate::isa::instruction::{DecodedInstruction, Fields};
use crate::isa::mnemonic::Mnemonic;
use crate::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv32m::{funct3 as m_f3, opcodes as m_op};

/// Decodes a 32-bit instruction word.
///
/// Total over all inputs: every word yields either exactly one decoded
/// instruction or [`DecodeError::InvalidInstruction`] carrying the word.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode
///
/// # Errors
///
/// Returns [`DecodeError::InvalidInstruction`] when no mnemonic matches.
pub fn decode(word: u32) -> Result<DecodedInstruction, DecodeError> {
    let fields = Fields::extract(word);

    let Some(mnemonic) = classify(&fields) else {
        tracing::debug!(word = %format!("{word:#010x}"), "no mnemonic matches");
        return Err(DecodeError::InvalidInstruction { word });
    };

    let inst = DecodedInstruction::from_fields(mnemonic, &fields);
    tracing::trace!(word = %format!("{word:#010x}"), %mnemonic, "decoded");
    Ok(inst)
}

/// Classifies extracted fields into a mnemonic.
///
/// Arms are listed in [`Mnemonic::ALL`] order, so the first matching arm is
/// also the first matching row of the classification table.
pub fn classify(f: &Fields) -> Option<Mnemonic> {
    let rs1_zero = f.rs1_is_zero();

    let mnemonic = match (f.opcode, f.funct3, f.funct7) {
        // ── I-type immediate arithmetic ───────────────────
        (i_op::OP_IMM, i_f3::AND, _) => Mnemonic::Andi,
        (i_op::OP_IMM, i_f3::SLTU, _) => Mnemonic::Sltiu,
        (i_op::OP_IMM, i_f3::SRL_SRA, i_f7::DEFAULT) => Mnemonic::Srli,
        (i_op::OP_IMM, i_f3::SLT, _) => Mnemonic::Slti,
        (i_op::OP_IMM, i_f3::SRL_SRA, i_f7::SRA) => Mnemonic::Srai,
        (i_op::OP_IMM, i_f3::SLL, i_f7::DEFAULT) => Mnemonic::Slli,
        (i_op::OP_IMM, i_f3::OR, _) => Mnemonic::Ori,
        (i_op::OP_IMM, i_f3::XOR, _) => Mnemonic::Xori,
        (i_op::OP_IMM, i_f3::ADD_SUB, _) => Mnemonic::Addi,

        // ── Load (base x0 only) ───────────────────────────
        (i_op::OP_LOAD, i_f3::LW, _) if rs1_zero => Mnemonic::Lw,

        // ── R-type register-register ──────────────────────
        (i_op::OP_REG, i_f3::AND, i_f7::DEFAULT) => Mnemonic::And,
        (i_op::OP_REG, i_f3::SLTU, i_f7::DEFAULT) => Mnemonic::Sltu,
        (i_op::OP_REG, m_f3::MULH, m_op::M_EXTENSION) => Mnemonic::Mulh,
        (i_op::OP_REG, i_f3::SRL_SRA, i_f7::SRA) => Mnemonic::Sra,
        (i_op::OP_REG, i_f3::XOR, i_f7::DEFAULT) => Mnemonic::Xor,
        (i_op::OP_REG, i_f3::ADD_SUB, i_f7::SUB) => Mnemonic::Sub,
        (i_op::OP_REG, i_f3::SLT, i_f7::DEFAULT) => Mnemonic::Slt,
        (i_op::OP_REG, m_f3::MULHSU, m_op::M_EXTENSION) => Mnemonic::Mulhsu,
        (i_op::OP_REG, m_f3::MULHU, m_op::M_EXTENSION) => Mnemonic::Mulhu,
        (i_op::OP_REG, i_f3::SRL_SRA, i_f7::DEFAULT) => Mnemonic::Srl,
        (i_op::OP_REG, i_f3::SLL, i_f7::DEFAULT) => Mnemonic::Sll,
        (i_op::OP_REG, i_f3::ADD_SUB, i_f7::DEFAULT) => Mnemonic::Add,
        (i_op::OP_REG, m_f3::MUL, m_op::M_EXTENSION) => Mnemonic::Mul,
        (i_op::OP_REG, i_f3::OR, i_f7::DEFAULT) => Mnemonic::Or,

        // ── Store (base x0, bits 31-30 clear) ─────────────
        (i_op::OP_STORE, i_f3::SW, _) if rs1_zero && f.store_top == 0 => Mnemonic::Sw,

        // ── Sentinel ──────────────────────────────────────
        (i_op::OP_NOP, _, _) => Mnemonic::Nop,

        _ => return None,
    };

    Some(mnemonic)
}

/// Reference classifier: scans [`Mnemonic::ALL`] and returns the first
/// mnemonic whose table predicate holds.
///
/// Produces the same answer as [`classify`] for every input; kept as the
/// executable form of the classification table.
pub fn classify_first_match(f: &Fields) -> Option<Mnemonic> {
    Mnemonic::ALL.into_iter().find(|m| m.matches(f))
}
