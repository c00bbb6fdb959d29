//! Property-based tests for the conversion laws.
//!
//! Generates random code-mixed text and checks that tokenization is
//! lossless, non-word structure survives conversion, the output stays
//! within the expansion bound, and conversion is deterministic.

use proptest::prelude::*;

use singlish_core::character::{is_sinhala, longest_sinhala_run};
use singlish_core::enums::TokenKind;
use singlish_si::tokenizer::tokenize;
use singlish_si::{Disposition, EngineConfig, TransliteratorHandle};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_singlish_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "eka", "karala", "kiyanna", "oya", "kohomada", "mama", "gedara", "hari", "inn",
        "ekakin", "ganga", "Tika", "dharma", "aadaraya", "yanawa", "hodin",
    ])
    .prop_map(str::to_string)
}

fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => arb_singlish_word(),
        2 => "[a-zA-Z]{1,20}",
        1 => "[0-9]{1,4}([.,][0-9]{1,3})?",
        1 => "[!?.,:;()#@*-]{1,3}",
        1 => "[ \t]{1,3}",
        1 => prop::sample::select(vec!["\n", "\r\n", "\n\n"]).prop_map(str::to_string),
        1 => "\\PC{1,6}",
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_fragment(), 0..24).prop_map(|parts| parts.join(" "))
}

fn arb_factor() -> impl Strategy<Value = f32> {
    prop::sample::select(vec![1.0f32, 1.2, 1.5, 2.0, 3.0])
}

fn sinhala_count(text: &str) -> usize {
    text.chars().filter(|&c| is_sinhala(c)).count()
}

fn handle_with_factor(factor: f32) -> TransliteratorHandle {
    let config = EngineConfig {
        max_output_expansion_factor: factor,
        ..EngineConfig::default()
    };
    TransliteratorHandle::new(config, "si").unwrap()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn tokens_reconstruct_input(text in "\\PC{0,80}") {
        let tokens = tokenize(&text);
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(joined, text.clone());

        let mut pos = 0;
        for token in &tokens {
            prop_assert_eq!(token.pos, pos);
            prop_assert!(token.token_len > 0);
            pos = token.end();
        }
        prop_assert_eq!(pos, text.chars().count());
    }

    #[test]
    fn output_within_expansion_bound(text in arb_text(), factor in arb_factor()) {
        let handle = handle_with_factor(factor);
        let output = handle.convert(&text).output_text;
        let limit = handle.config().output_limit(text.chars().count());
        prop_assert!(output.chars().count() <= limit);
    }

    #[test]
    fn non_word_tokens_are_unchanged(text in arb_text()) {
        let report = TransliteratorHandle::with_defaults().convert_detailed(&text);
        for outcome in &report.outcomes {
            if outcome.token.kind != TokenKind::Word {
                prop_assert_eq!(outcome.disposition, Disposition::Verbatim);
                prop_assert_eq!(&outcome.output, &outcome.token.text);
            } else if outcome.is_pass_through() {
                prop_assert_eq!(&outcome.output, &outcome.token.text);
            }
        }
    }

    #[test]
    fn conversion_is_deterministic(text in arb_text()) {
        let handle = TransliteratorHandle::with_defaults();
        prop_assert_eq!(handle.convert(&text), handle.convert(&text));
    }

    #[test]
    fn foreign_only_text_is_identity(text in "[0-9 !?.,\n]{0,40}") {
        let result = TransliteratorHandle::with_defaults().convert(&text);
        prop_assert_eq!(result.output_text, text);
        prop_assert_eq!(result.passthrough_count, 0);
    }

    #[test]
    fn sinhala_comes_only_from_transliterated_words(text in arb_text()) {
        let report = TransliteratorHandle::with_defaults().convert_detailed(&text);
        let mut added = 0;
        for outcome in &report.outcomes {
            if outcome.disposition == Disposition::Transliterated {
                prop_assert_eq!(sinhala_count(&outcome.token.text), 0);
                added += sinhala_count(&outcome.output);
            } else {
                prop_assert_eq!(&outcome.output, &outcome.token.text);
            }
        }
        prop_assert_eq!(
            sinhala_count(&report.result.output_text),
            sinhala_count(&text) + added
        );
    }

    #[test]
    fn pass_through_words_add_no_sinhala(word in "[a-z]{15,30}") {
        // Longer than any candidate
        let output = TransliteratorHandle::with_defaults().convert(&word).output_text;
        prop_assert_eq!(longest_sinhala_run(&output), 0);
        prop_assert_eq!(output, word);
    }

    #[test]
    fn passthrough_count_matches_outcomes(text in arb_text()) {
        let report = TransliteratorHandle::with_defaults().convert_detailed(&text);
        let counted = report.outcomes.iter().filter(|o| o.is_pass_through()).count();
        prop_assert_eq!(report.result.passthrough_count, counted);
    }
}
