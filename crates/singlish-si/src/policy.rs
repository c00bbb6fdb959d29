// Fail-safe policy: gates classification and mapping for every token.
//
// A word is replaced only when it was classified as a Singlish candidate,
// mapped without error, and the replacement keeps the projected output
// within the expansion bound. Every other token is emitted as written.

use singlish_core::enums::{ClassLabel, PassThroughReason, TokenKind};
use singlish_core::token::{Classification, ConversionResult, Token};
use singlish_rules::MapError;
use tracing::{debug, trace};

use crate::classifier::ScriptClassifier;
use crate::mapper::PhonemeMapper;

/// What the policy did with one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Not a word; emitted as written without classification.
    Verbatim,
    /// Replaced by its Sinhala-script mapping.
    Transliterated,
    /// A word emitted as written.
    PassThrough(PassThroughReason),
}

/// One token together with its decision and emitted text.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenOutcome {
    pub token: Token,
    /// Present for `Word` tokens only.
    pub classification: Option<Classification>,
    pub disposition: Disposition,
    pub output: String,
}

impl TokenOutcome {
    fn verbatim(token: Token) -> Self {
        let output = token.text.clone();
        Self {
            token,
            classification: None,
            disposition: Disposition::Verbatim,
            output,
        }
    }

    fn pass_through(
        token: Token,
        classification: Classification,
        reason: PassThroughReason,
    ) -> Self {
        let output = token.text.clone();
        Self {
            token,
            classification: Some(classification),
            disposition: Disposition::PassThrough(reason),
            output,
        }
    }

    /// Whether this is a word emitted unchanged.
    pub fn is_pass_through(&self) -> bool {
        matches!(self.disposition, Disposition::PassThrough(_))
    }

    /// Emitted length in characters.
    pub fn output_len(&self) -> usize {
        match self.disposition {
            Disposition::Transliterated => self.output.chars().count(),
            _ => self.token.token_len,
        }
    }
}

/// Ordered outcomes of one conversion plus the reassembled result.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub outcomes: Vec<TokenOutcome>,
    pub result: ConversionResult,
}

/// Output length guard and per-token gating.
#[derive(Debug, Clone)]
pub struct FailSafePolicy {
    classifier: ScriptClassifier,
    mapper: PhonemeMapper,
}

impl FailSafePolicy {
    pub fn new(classifier: ScriptClassifier, mapper: PhonemeMapper) -> Self {
        Self { classifier, mapper }
    }

    pub fn classifier(&self) -> &ScriptClassifier {
        &self.classifier
    }

    /// Decide every token of one input.
    ///
    /// `input_len` is the input length in characters and `limit` the largest
    /// output length allowed. A replacement is accepted only while
    /// `emitted + replacement + rest of input <= limit`; the first rejection
    /// stops transliteration for the rest of the input. Since `limit` is at
    /// least `input_len`, the output never exceeds it.
    pub fn apply(&self, tokens: Vec<Token>, input_len: usize, limit: usize) -> Vec<TokenOutcome> {
        let mut outcomes = Vec::with_capacity(tokens.len());
        let mut emitted = 0usize;
        let mut exhausted = false;

        for token in tokens {
            let outcome = if token.kind == TokenKind::Word {
                let remaining = input_len.saturating_sub(token.end());
                self.decide_word(token, exhausted, |mapped_len| {
                    emitted + mapped_len + remaining <= limit
                })
            } else {
                TokenOutcome::verbatim(token)
            };

            if outcome.disposition == Disposition::PassThrough(PassThroughReason::ExpansionLimit)
                && !exhausted
            {
                debug!(
                    pos = outcome.token.pos,
                    emitted, limit, "expansion limit reached, passing through the rest"
                );
                exhausted = true;
            }
            emitted += outcome.output_len();
            outcomes.push(outcome);
        }
        outcomes
    }

    fn decide_word(
        &self,
        token: Token,
        exhausted: bool,
        fits: impl FnOnce(usize) -> bool,
    ) -> TokenOutcome {
        let classification = self.classifier.classify(&token.text);
        trace!(
            word = %token.text,
            label = ?classification.label,
            confidence = classification.confidence,
            "classified"
        );

        match classification.label {
            ClassLabel::ForeignWord => {
                debug!(word = %token.text, "foreign word passed through");
                TokenOutcome::pass_through(token, classification, PassThroughReason::ForeignWord)
            }
            ClassLabel::Ambiguous => {
                debug!(
                    word = %token.text,
                    confidence = classification.confidence,
                    "ambiguous word passed through"
                );
                TokenOutcome::pass_through(token, classification, PassThroughReason::Ambiguous)
            }
            ClassLabel::SinglishCandidate if exhausted => {
                TokenOutcome::pass_through(token, classification, PassThroughReason::ExpansionLimit)
            }
            ClassLabel::SinglishCandidate => match self.mapper.map(&token.text) {
                Ok(mapped) => {
                    if !fits(mapped.chars().count()) {
                        return TokenOutcome::pass_through(
                            token,
                            classification,
                            PassThroughReason::ExpansionLimit,
                        );
                    }
                    TokenOutcome {
                        token,
                        classification: Some(classification),
                        disposition: Disposition::Transliterated,
                        output: mapped,
                    }
                }
                Err(MapError::UnmappableToken { position, .. }) => {
                    debug!(word = %token.text, position, "unmappable word passed through");
                    TokenOutcome::pass_through(token, classification, PassThroughReason::Unmappable)
                }
            },
        }
    }
}
