// Shared enums: TokenKind, ClassLabel, PassThroughReason

/// Kinds of spans produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Word-like token (letters, possibly mixed with digits).
    Word,
    /// Digit-only token, possibly with inner `.` or `,` separators.
    Numeral,
    /// Contiguous run of symbols and punctuation.
    Symbol,
    /// Run of non-newline whitespace.
    Whitespace,
    /// Run of line-break characters.
    Newline,
}

impl TokenKind {
    /// Upper-case label used by the command-line tools.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Numeral => "NUMERAL",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Newline => "NEWLINE",
        }
    }
}

/// Script classification label attached to a `Word` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLabel {
    /// Plausible romanized Sinhala; the mapper may convert it.
    SinglishCandidate,
    /// English, a brand name, another language, or another script.
    ForeignWord,
    /// Not confidently either. Treated like a foreign word.
    Ambiguous,
}

impl ClassLabel {
    pub fn label(self) -> &'static str {
        match self {
            ClassLabel::SinglishCandidate => "SINGLISH",
            ClassLabel::ForeignWord => "FOREIGN",
            ClassLabel::Ambiguous => "AMBIGUOUS",
        }
    }
}

/// Why a `Word` token was emitted unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassThroughReason {
    /// Classified as a foreign word.
    ForeignWord,
    /// Classification confidence did not clear the threshold.
    Ambiguous,
    /// Some position of the token matched no romanization rule.
    Unmappable,
    /// Transliterating would have exceeded the output length bound.
    ExpansionLimit,
}

impl PassThroughReason {
    pub fn label(self) -> &'static str {
        match self {
            PassThroughReason::ForeignWord => "foreign-word",
            PassThroughReason::Ambiguous => "ambiguous",
            PassThroughReason::Unmappable => "unmappable",
            PassThroughReason::ExpansionLimit => "expansion-limit",
        }
    }
}
