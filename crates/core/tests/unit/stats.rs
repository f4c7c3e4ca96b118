//! Decode Statistics Tests.

use pretty_assertions::assert_eq;

use rv32dec_core::isa::word::SAMPLE_WORDS;
use rv32dec_core::listing::Listing;
use rv32dec_core::stats::DecodeStats;
use rv32dec_core::{Mnemonic, Shape, decode};

#[test]
fn sample_listing_tally() {
    let stats = Listing::decode_all(SAMPLE_WORDS).stats();
    assert_eq!(stats.total, 5);
    assert_eq!(stats.valid, 5);
    assert_eq!(stats.invalid, 0);
    assert!(!stats.has_invalid());
    assert_eq!(stats.mnemonic_count(Mnemonic::Lw), 2);
    assert_eq!(stats.mnemonic_count(Mnemonic::Sw), 1);
    assert_eq!(stats.mnemonic_count(Mnemonic::Srai), 1);
    assert_eq!(stats.mnemonic_count(Mnemonic::Slli), 1);
    assert_eq!(stats.shape_count(Shape::Load), 2);
    assert_eq!(stats.shape_count(Shape::ImmShift), 2);
    assert_eq!(stats.shape_count(Shape::RegReg), 0);
}

#[test]
fn invalid_words_are_counted() {
    let mut stats = DecodeStats::new();
    stats.record(&decode(0x0400_0033));
    stats.record(&decode(0x0000_007F));
    assert_eq!(stats.total, 2);
    assert_eq!(stats.invalid, 1);
    assert!(stats.has_invalid());
    assert_eq!(stats.mnemonic_count(Mnemonic::Nop), 1);
}

#[test]
fn summary_lists_shapes_then_mnemonics() {
    let stats = Listing::decode_all([0x0280_2603, 0x0000_5413, 0x0000_0000]).stats();
    assert_eq!(
        stats.to_string(),
        "decoded 3 words: 2 valid, 1 invalid\n\
         \x20 imm-shift   1\n\
         \x20 load        1\n\
         \x20 SLLI        1\n\
         \x20 LW          1\n"
    );
}

#[test]
fn stats_serialize_with_mnemonic_keys() {
    let stats = Listing::decode_all([0x0280_2603]).stats();
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["by_mnemonic"]["LW"], 1);
    assert_eq!(json["by_shape"]["load"], 1);
}
