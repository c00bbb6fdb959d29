// Built-in Singlish romanization table.
//
// Upper-case patterns are the retroflex and cerebral series; every other
// pattern is lower-case and also matches upper-case input through the
// mapper's lower-case fallback.

use crate::rule::{ContextConstraint, RomanizationRule, RuleKind};

/// Sinhala anusvara (ං).
pub const ANUSVARA: &str = "\u{0D82}";

pub static MAPPINGS: &[RomanizationRule] = &[
    // -- Independent vowels ------------------------------------------------
    RomanizationRule::vowel("a", "\u{0D85}"),    // අ
    RomanizationRule::vowel("aa", "\u{0D86}"),   // ආ
    RomanizationRule::vowel("ae", "\u{0D87}"),   // ඇ
    RomanizationRule::vowel("aae", "\u{0D88}"),  // ඈ
    RomanizationRule::vowel("i", "\u{0D89}"),    // ඉ
    RomanizationRule::vowel("ii", "\u{0D8A}"),   // ඊ
    RomanizationRule::vowel("ee", "\u{0D8A}"),   // ඊ
    RomanizationRule::vowel("u", "\u{0D8B}"),    // උ
    RomanizationRule::vowel("uu", "\u{0D8C}"),   // ඌ
    RomanizationRule::vowel("e", "\u{0D91}"),    // එ
    RomanizationRule::vowel("ei", "\u{0D92}"),   // ඒ
    RomanizationRule::vowel("ai", "\u{0D93}"),   // ඓ
    RomanizationRule::vowel("o", "\u{0D94}"),    // ඔ
    RomanizationRule::vowel("oo", "\u{0D95}"),   // ඕ
    RomanizationRule::vowel("au", "\u{0D96}"),   // ඖ
    // -- Dependent vowel signs ---------------------------------------------
    RomanizationRule::vowel_sign("a", ""), // inherent vowel
    RomanizationRule::vowel_sign("aa", "\u{0DCF}"),
    RomanizationRule::vowel_sign("ae", "\u{0DD0}"),
    RomanizationRule::vowel_sign("aae", "\u{0DD1}"),
    RomanizationRule::vowel_sign("i", "\u{0DD2}"),
    RomanizationRule::vowel_sign("ii", "\u{0DD3}"),
    RomanizationRule::vowel_sign("ee", "\u{0DD3}"),
    RomanizationRule::vowel_sign("u", "\u{0DD4}"),
    RomanizationRule::vowel_sign("uu", "\u{0DD6}"),
    RomanizationRule::vowel_sign("e", "\u{0DD9}"),
    RomanizationRule::vowel_sign("ei", "\u{0DDA}"),
    RomanizationRule::vowel_sign("ai", "\u{0DDB}"),
    RomanizationRule::vowel_sign("o", "\u{0DDC}"),
    RomanizationRule::vowel_sign("oo", "\u{0DDD}"),
    RomanizationRule::vowel_sign("au", "\u{0DDE}"),
    // -- Velars ------------------------------------------------------------
    RomanizationRule::consonant("k", "\u{0D9A}"),  // ක
    RomanizationRule::consonant("kh", "\u{0D9B}"), // ඛ
    RomanizationRule::consonant("g", "\u{0D9C}"),  // ග
    RomanizationRule::consonant("gh", "\u{0D9D}"), // ඝ
    RomanizationRule::new(
        "ng",
        "\u{0D9F}", // ඟ
        RuleKind::Consonant,
        ContextConstraint::BeforeVowel,
    ),
    RomanizationRule::new(
        "ng",
        ANUSVARA,
        RuleKind::Modifier,
        ContextConstraint::NotBeforeVowel,
    ),
    // -- Palatals ----------------------------------------------------------
    RomanizationRule::consonant("ch", "\u{0DA0}"),  // ච
    RomanizationRule::consonant("chh", "\u{0DA1}"), // ඡ
    RomanizationRule::consonant("j", "\u{0DA2}"),   // ජ
    RomanizationRule::consonant("jh", "\u{0DA3}"),  // ඣ
    RomanizationRule::consonant("ny", "\u{0DA4}"),  // ඤ
    // -- Retroflexes -------------------------------------------------------
    RomanizationRule::consonant("T", "\u{0DA7}"),  // ට
    RomanizationRule::consonant("Th", "\u{0DA8}"), // ඨ
    RomanizationRule::consonant("D", "\u{0DA9}"),  // ඩ
    RomanizationRule::consonant("Dh", "\u{0DAA}"), // ඪ
    RomanizationRule::consonant("N", "\u{0DAB}"),  // ණ
    // -- Dentals -----------------------------------------------------------
    RomanizationRule::consonant("t", "\u{0DAD}"),  // ත
    RomanizationRule::consonant("th", "\u{0DAE}"), // ථ
    RomanizationRule::consonant("d", "\u{0DAF}"),  // ද
    RomanizationRule::consonant("dh", "\u{0DB0}"), // ධ
    RomanizationRule::consonant("n", "\u{0DB1}"),  // න
    // -- Labials -----------------------------------------------------------
    RomanizationRule::consonant("p", "\u{0DB4}"),  // ප
    RomanizationRule::consonant("ph", "\u{0DB5}"), // ඵ
    RomanizationRule::consonant("b", "\u{0DB6}"),  // බ
    RomanizationRule::consonant("bh", "\u{0DB7}"), // භ
    RomanizationRule::consonant("m", "\u{0DB8}"),  // ම
    // -- Sonorants and sibilants -------------------------------------------
    RomanizationRule::consonant("y", "\u{0DBA}"),  // ය
    RomanizationRule::consonant("r", "\u{0DBB}"),  // ර
    RomanizationRule::consonant("l", "\u{0DBD}"),  // ල
    RomanizationRule::consonant("L", "\u{0DC5}"),  // ළ
    RomanizationRule::consonant("v", "\u{0DC0}"),  // ව
    RomanizationRule::consonant("w", "\u{0DC0}"),  // ව
    RomanizationRule::consonant("sh", "\u{0DC1}"), // ශ
    RomanizationRule::consonant("Sh", "\u{0DC2}"), // ෂ
    RomanizationRule::consonant("s", "\u{0DC3}"),  // ස
    RomanizationRule::consonant("h", "\u{0DC4}"),  // හ
    RomanizationRule::consonant("f", "\u{0DC6}"),  // ෆ
];

/// Romanized vowel groups known to the table (`a`, `aa`, `ae`, ...).
///
/// Any maximal run of vowel letters outside this set is foreign to the
/// romanization scheme.
pub fn vowel_patterns() -> impl Iterator<Item = &'static str> {
    MAPPINGS
        .iter()
        .filter(|r| r.kind == RuleKind::Vowel && r.context == ContextConstraint::NotAfterConsonant)
        .map(|r| r.pattern)
}

/// Upper-case letters that start a case-sensitive pattern (`T`, `D`, `Sh`).
///
/// On these letters a capital selects a different consonant, so a
/// capitalised first letter is not just sentence case.
pub fn case_marked_initials() -> impl Iterator<Item = char> {
    MAPPINGS
        .iter()
        .filter_map(|r| r.pattern.chars().next())
        .filter(|c| c.is_uppercase())
}
