// Token, Classification and ConversionResult public API types

use crate::enums::{ClassLabel, TokenKind};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A span of the input produced by the tokenizer.
///
/// Positions are character offsets (Unicode scalar values), not byte
/// offsets. Concatenating the `text` of every token in order reproduces the
/// input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Character offset of the first character of this token.
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            kind,
            text,
            token_len,
            pos,
        }
    }

    /// Character offset one past the last character of this token.
    pub fn end(&self) -> usize {
        self.pos + self.token_len
    }

    /// Whether this token is a candidate for classification.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Result of classifying a `Word` token.
///
/// Lives only for the duration of one conversion call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: ClassLabel,

    /// Confidence in `[0, 1]`. For `ForeignWord` this is the confidence that
    /// the token is foreign; otherwise the Singlish plausibility score.
    pub confidence: f32,
}

impl Classification {
    /// Create a classification, clamping `confidence` into `[0, 1]`.
    pub fn new(label: ClassLabel, confidence: f32) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self { label, confidence }
    }

    /// A certain foreign-word classification.
    pub fn foreign() -> Self {
        Self::new(ClassLabel::ForeignWord, 1.0)
    }

    /// Whether the mapper may be attempted on the token.
    pub fn is_candidate(&self) -> bool {
        self.label == ClassLabel::SinglishCandidate
    }
}

// ---------------------------------------------------------------------------
// ConversionResult
// ---------------------------------------------------------------------------

/// Final artifact of one conversion call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConversionResult {
    /// The reassembled output text.
    pub output_text: String,

    /// Number of `Word` tokens emitted unchanged. Tokens are never dropped,
    /// so this counts pass-through only.
    pub passthrough_count: usize,
}

impl ConversionResult {
    pub fn new(output_text: String, passthrough_count: usize) -> Self {
        Self {
            output_text,
            passthrough_count,
        }
    }
}
