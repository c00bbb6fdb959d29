// Reassembler: joins token outputs in input order.

use singlish_core::token::ConversionResult;

use crate::policy::TokenOutcome;

/// Concatenate the outputs of `outcomes` and count pass-through words.
///
/// The outcomes must be in input order and cover the input without gaps,
/// as produced by the tokenizer, so spacing and line breaks come out
/// exactly as they went in.
pub fn reassemble(outcomes: &[TokenOutcome]) -> ConversionResult {
    let capacity = outcomes.iter().map(|o| o.output.len()).sum();
    let mut output_text = String::with_capacity(capacity);
    let mut passthrough_count = 0;
    let mut expected_pos = 0;

    for outcome in outcomes {
        debug_assert_eq!(outcome.token.pos, expected_pos, "token sequence has a gap");
        expected_pos = outcome.token.end();

        output_text.push_str(&outcome.output);
        if outcome.is_pass_through() {
            passthrough_count += 1;
        }
    }

    ConversionResult::new(output_text, passthrough_count)
}
