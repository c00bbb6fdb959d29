//! Romanization rule engine for Singlish-to-Sinhala transliteration.
//!
//! Maps one romanized token to Sinhala script with a fixed rule table,
//! greedily taking the longest applicable pattern at each position.
//!
//! # Architecture
//!
//! - [`rule`] -- Rule model: pattern, glyphs, kind and context constraint
//! - [`table`] -- The built-in Sinhala romanization table
//! - [`trie`] -- Immutable character trie over rule patterns
//! - [`transliterate`] -- Greedy longest-match mapping of one token

pub mod rule;
pub mod table;
pub mod transliterate;
pub mod trie;

pub use rule::{ContextConstraint, RomanizationRule, RuleKind};
pub use transliterate::transliterate;
pub use trie::RuleIndex;

/// Error type for mapping a single token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// Some position of the token matched no rule in any valid context.
    #[error("no romanization rule matches {token:?} at character {position}")]
    UnmappableToken { token: String, position: usize },
}

/// Error type for building a rule index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule {index} has an empty pattern")]
    EmptyPattern { index: usize },
    #[error("pattern {pattern:?} contains {ch:?}, which is outside the romanization alphabet")]
    InvalidPatternChar { pattern: String, ch: char },
}
