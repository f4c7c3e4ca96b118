//! Instruction Decode Properties.
//!
//! Verifies that `decode()` is total and deterministic, that the shift
//! amount aliases `rs2`, that store offsets are the `hi || lo` concatenation,
//! and that the classification table is mutually exclusive.
//!
//! # Coverage Matrix
//!
//! - OP_IMM:   ADDI, SLTI, SLTIU, XORI, ORI, ANDI, SLLI, SRLI, SRAI
//! - OP_REG:   ADD, SUB, SLL, SLT, SLTU, XOR, SRL, SRA, OR, AND, MUL, MULH, MULHSU, MULHU
//! - OP_LOAD:  LW (base x0)
//! - OP_STORE: SW (base x0, bits 31-30 clear)
//! - OP_NOP:   NOP sentinel

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use rv32dec_core::common::error::DecodeError;
use rv32dec_core::isa::decode::{classify, classify_first_match, decode};
use rv32dec_core::isa::instruction::{DecodedInstruction, Fields, InstructionBits};
use rv32dec_core::isa::mnemonic::{Mnemonic, Shape};
use rv32dec_core::isa::rv32i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use rv32dec_core::isa::rv32m::{funct3 as m_f3, opcodes as m_op};

// ──────────────────────────────────────────────────────────
// Encoding helpers (construct raw 32-bit instructions)
// ──────────────────────────────────────────────────────────

/// Encode an R-type instruction.
fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction from a raw 12-bit immediate.
fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: u32) -> u32 {
    (imm & 0xFFF) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an S-type instruction from a raw 12-bit offset.
fn s_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: u32) -> u32 {
    let hi = (imm >> 5) & 0x7F;
    let lo = imm & 0x1F;
    hi << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | lo << 7
        | (opcode & 0x7F)
}

// ══════════════════════════════════════════════════════════
// 1. Field extraction
// ══════════════════════════════════════════════════════════

#[test]
fn field_extraction_all_fields() {
    let inst = r_type(i_op::OP_REG, 15, 0b101, 23, 31, 0b0100000);
    let f = Fields::extract(inst);
    assert_eq!(f.opcode, i_op::OP_REG);
    assert_eq!(f.rd, 15);
    assert_eq!(f.funct3, 0b101);
    assert_eq!(f.rs1, 23);
    assert_eq!(f.rs2, 31);
    assert_eq!(f.shamt, 31);
    assert_eq!(f.funct7, 0b0100000);
    assert_eq!(f.store_top, 0b01);
}

#[test]
fn imm_i_keeps_bit_31_unsigned() {
    let inst = i_type(i_op::OP_IMM, 1, i_f3::ADD_SUB, 0, 0x800);
    assert_eq!(inst.imm_i(), 0x800);
    assert_eq!(
        decode(inst),
        Ok(DecodedInstruction::ImmArith {
            mnemonic: Mnemonic::Addi,
            dst: 1,
            src: 0,
            imm: 2048,
        })
    );
}

// ══════════════════════════════════════════════════════════
// 2. Classification per mnemonic
// ══════════════════════════════════════════════════════════

#[rstest]
#[case(i_f3::ADD_SUB, 0, Mnemonic::Addi)]
#[case(i_f3::SLT, 0x7F, Mnemonic::Slti)]
#[case(i_f3::SLTU, 0x13, Mnemonic::Sltiu)]
#[case(i_f3::XOR, 0x40, Mnemonic::Xori)]
#[case(i_f3::OR, 0x01, Mnemonic::Ori)]
#[case(i_f3::AND, 0x20, Mnemonic::Andi)]
#[case(i_f3::SLL, i_f7::DEFAULT, Mnemonic::Slli)]
#[case(i_f3::SRL_SRA, i_f7::DEFAULT, Mnemonic::Srli)]
#[case(i_f3::SRL_SRA, i_f7::SRA, Mnemonic::Srai)]
fn op_imm_classification(#[case] funct3: u32, #[case] funct7: u32, #[case] expected: Mnemonic) {
    let inst = r_type(i_op::OP_IMM, 3, funct3, 4, 5, funct7);
    let decoded = decode(inst).unwrap();
    assert_eq!(decoded.mnemonic(), expected);
}

#[rstest]
#[case(i_f3::SLL, 0b0000001)]
#[case(i_f3::SRL_SRA, 0b0000001)]
#[case(i_f3::SRL_SRA, 0b1000000)]
fn shift_immediates_require_known_funct7(#[case] funct3: u32, #[case] funct7: u32) {
    let inst = r_type(i_op::OP_IMM, 3, funct3, 4, 5, funct7);
    assert_eq!(decode(inst), Err(DecodeError::InvalidInstruction { word: inst }));
}

#[rstest]
#[case(i_f3::ADD_SUB, i_f7::DEFAULT, Mnemonic::Add)]
#[case(i_f3::ADD_SUB, i_f7::SUB, Mnemonic::Sub)]
#[case(i_f3::SLL, i_f7::DEFAULT, Mnemonic::Sll)]
#[case(i_f3::SLT, i_f7::DEFAULT, Mnemonic::Slt)]
#[case(i_f3::SLTU, i_f7::DEFAULT, Mnemonic::Sltu)]
#[case(i_f3::XOR, i_f7::DEFAULT, Mnemonic::Xor)]
#[case(i_f3::SRL_SRA, i_f7::DEFAULT, Mnemonic::Srl)]
#[case(i_f3::SRL_SRA, i_f7::SRA, Mnemonic::Sra)]
#[case(i_f3::OR, i_f7::DEFAULT, Mnemonic::Or)]
#[case(i_f3::AND, i_f7::DEFAULT, Mnemonic::And)]
#[case(m_f3::MUL, m_op::M_EXTENSION, Mnemonic::Mul)]
#[case(m_f3::MULH, m_op::M_EXTENSION, Mnemonic::Mulh)]
#[case(m_f3::MULHSU, m_op::M_EXTENSION, Mnemonic::Mulhsu)]
#[case(m_f3::MULHU, m_op::M_EXTENSION, Mnemonic::Mulhu)]
fn op_reg_classification(#[case] funct3: u32, #[case] funct7: u32, #[case] expected: Mnemonic) {
    let inst = r_type(i_op::OP_REG, 10, funct3, 11, 12, funct7);
    assert_eq!(
        decode(inst),
        Ok(DecodedInstruction::RegReg {
            mnemonic: expected,
            dst: 10,
            src1: 11,
            src2: 12,
        })
    );
}

#[rstest]
#[case(0b100, m_op::M_EXTENSION)] // DIV
#[case(0b101, m_op::M_EXTENSION)] // DIVU
#[case(0b110, m_op::M_EXTENSION)] // REM
#[case(0b111, m_op::M_EXTENSION)] // REMU
#[case(i_f3::ADD_SUB, 0b0000010)]
#[case(i_f3::SLL, i_f7::SUB)]
#[case(i_f3::OR, i_f7::SUB)]
fn op_reg_outside_subset_is_invalid(#[case] funct3: u32, #[case] funct7: u32) {
    let inst = r_type(i_op::OP_REG, 10, funct3, 11, 12, funct7);
    assert_eq!(decode(inst), Err(DecodeError::InvalidInstruction { word: inst }));
}

#[test]
fn lw_requires_base_x0() {
    let ok = i_type(i_op::OP_LOAD, 7, i_f3::LW, 0, 0xABC);
    assert_eq!(
        decode(ok),
        Ok(DecodedInstruction::Load {
            mnemonic: Mnemonic::Lw,
            dst: 7,
            base: 0,
            offset: 0xABC,
        })
    );

    let bad = i_type(i_op::OP_LOAD, 7, i_f3::LW, 2, 0xABC);
    assert!(decode(bad).is_err());

    // LB / LH are outside the subset.
    assert!(decode(i_type(i_op::OP_LOAD, 7, 0b000, 0, 4)).is_err());
    assert!(decode(i_type(i_op::OP_LOAD, 7, 0b001, 0, 4)).is_err());
}

#[test]
fn sw_requires_base_x0_and_clear_top_bits() {
    let ok = s_type(i_op::OP_STORE, i_f3::SW, 0, 9, 0x3FF);
    assert_eq!(
        decode(ok),
        Ok(DecodedInstruction::Store {
            mnemonic: Mnemonic::Sw,
            src: 9,
            base: 0,
            offset: 0x3FF,
        })
    );

    assert!(decode(s_type(i_op::OP_STORE, i_f3::SW, 1, 9, 0x3FF)).is_err());
    // Offsets at or above 0x400 set bit 30 or 31.
    assert!(decode(s_type(i_op::OP_STORE, i_f3::SW, 0, 9, 0x400)).is_err());
    assert!(decode(s_type(i_op::OP_STORE, i_f3::SW, 0, 9, 0x800)).is_err());
}

#[rstest]
#[case(0x0000_007F)]
#[case(0xFFFF_FFFF)]
#[case(0x1234_567F)]
fn all_ones_opcode_is_nop(#[case] word: u32) {
    assert_eq!(
        decode(word),
        Ok(DecodedInstruction::NoOperand {
            mnemonic: Mnemonic::Nop,
        })
    );
}

#[rstest]
#[case(0x0000_0000)]
#[case(0x0000_006F)] // JAL
#[case(0x0000_0037)] // LUI
#[case(0x0000_0063)] // BEQ
#[case(0x0000_0073)] // ECALL
fn unsupported_opcodes_are_invalid(#[case] word: u32) {
    assert_eq!(decode(word), Err(DecodeError::InvalidInstruction { word }));
}

// ══════════════════════════════════════════════════════════
// 3. Exhaustive table exclusivity
// ══════════════════════════════════════════════════════════

/// Walks opcode × funct3 × funct7 × rs1-zero. funct7 covers bits 31-25, so
/// the SW top-bit guard is enumerated as well.
fn field_space() -> impl Iterator<Item = u32> {
    (0..0x80u32).flat_map(|opcode| {
        (0..8u32).flat_map(move |funct3| {
            (0..0x80u32).flat_map(move |funct7| {
                [0u32, 1].into_iter().map(move |rs1| r_type(opcode, 0, funct3, rs1, 0, funct7))
            })
        })
    })
}

#[test]
fn table_predicates_are_mutually_exclusive() {
    for word in field_space() {
        let f = Fields::extract(word);
        let matching: Vec<Mnemonic> = Mnemonic::ALL.into_iter().filter(|m| m.matches(&f)).collect();
        assert!(matching.len() <= 1, "word {word:#010x} matches {matching:?}");
    }
}

#[test]
fn classify_agrees_with_first_match_scan() {
    for word in field_space() {
        let f = Fields::extract(word);
        assert_eq!(classify(&f), classify_first_match(&f), "word {word:#010x}");
    }
}

#[test]
fn every_mnemonic_is_reachable() {
    let mut seen = std::collections::BTreeSet::new();
    for word in field_space() {
        if let Some(m) = classify(&Fields::extract(word)) {
            let _ = seen.insert(m);
        }
    }
    assert_eq!(seen.len(), Mnemonic::ALL.len());
}

// ══════════════════════════════════════════════════════════
// 4. Properties over arbitrary words
// ══════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding is deterministic and yields exactly one outcome.
    #[test]
    fn decode_is_total_and_deterministic(word in any::<u32>()) {
        let first = decode(word);
        let second = decode(word);
        prop_assert_eq!(first, second);
        if let Err(e) = first {
            prop_assert_eq!(e.word(), word);
        }
    }

    /// The dispatching classifier and the table scan never disagree.
    #[test]
    fn classifiers_agree(word in any::<u32>()) {
        let f = Fields::extract(word);
        prop_assert_eq!(classify(&f), classify_first_match(&f));
    }

    /// Shift amounts come from the `rs2` bit range.
    #[test]
    fn shamt_equals_rs2_for_shift_immediates(word in any::<u32>()) {
        prop_assert_eq!(word.shamt() as usize, word.rs2());
        if let Ok(DecodedInstruction::ImmShift { shamt, .. }) = decode(word) {
            prop_assert_eq!(shamt as usize, word.rs2());
        }
    }

    /// Store offsets are `imm_s_hi || imm_s_lo`.
    #[test]
    fn store_offset_is_concatenation(word in any::<u32>()) {
        prop_assert_eq!(word.store_offset(), (word.imm_s_hi() << 5) | word.imm_s_lo());
        prop_assert!(word.store_offset() < 0x1000);
    }

    /// The decoded variant always matches the mnemonic's declared shape.
    #[test]
    fn variant_matches_mnemonic_shape(word in any::<u32>()) {
        if let Ok(inst) = decode(word) {
            prop_assert_eq!(inst.shape(), inst.mnemonic().shape());
            if inst.shape() == Shape::Store {
                prop_assert_eq!(word.store_top(), 0);
            }
        }
    }
}
