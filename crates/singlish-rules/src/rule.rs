// Romanization rule model: pattern, glyph sequence, context constraint.

/// What a rule contributes to a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// A consonant letter. Carries the inherent vowel until a vowel sign or
    /// the virama follows it.
    Consonant,
    /// An independent vowel letter or a dependent vowel sign, depending on
    /// the rule's context.
    Vowel,
    /// A syllable modifier such as the anusvara.
    Modifier,
}

/// Condition that must hold for a rule to match at a position.
///
/// "After consonant" means the previous unit emitted in the same token was a
/// consonant that has not yet received a vowel. "Before vowel" looks at the
/// input character right after the matched pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextConstraint {
    Any,
    AfterConsonant,
    NotAfterConsonant,
    BeforeVowel,
    NotBeforeVowel,
}

/// The surroundings of a candidate match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext {
    pub after_consonant: bool,
    pub before_vowel: bool,
}

impl ContextConstraint {
    /// Check whether the constraint holds in `ctx`.
    pub fn holds(self, ctx: MatchContext) -> bool {
        match self {
            ContextConstraint::Any => true,
            ContextConstraint::AfterConsonant => ctx.after_consonant,
            ContextConstraint::NotAfterConsonant => !ctx.after_consonant,
            ContextConstraint::BeforeVowel => ctx.before_vowel,
            ContextConstraint::NotBeforeVowel => !ctx.before_vowel,
        }
    }
}

/// One phoneme-to-glyph mapping.
///
/// Rules are static data: the built-in table is compiled into the binary and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RomanizationRule {
    /// Romanized phoneme, e.g. `"kh"` or `"aa"`.
    pub pattern: &'static str,
    /// Sinhala output. Empty for the inherent vowel.
    pub glyphs: &'static str,
    pub kind: RuleKind,
    pub context: ContextConstraint,
}

impl RomanizationRule {
    pub const fn new(
        pattern: &'static str,
        glyphs: &'static str,
        kind: RuleKind,
        context: ContextConstraint,
    ) -> Self {
        Self {
            pattern,
            glyphs,
            kind,
            context,
        }
    }

    /// A consonant valid in any context.
    pub const fn consonant(pattern: &'static str, glyphs: &'static str) -> Self {
        Self::new(pattern, glyphs, RuleKind::Consonant, ContextConstraint::Any)
    }

    /// An independent vowel letter (word-initial or after another vowel).
    pub const fn vowel(pattern: &'static str, glyphs: &'static str) -> Self {
        Self::new(
            pattern,
            glyphs,
            RuleKind::Vowel,
            ContextConstraint::NotAfterConsonant,
        )
    }

    /// A dependent vowel sign attached to the preceding consonant.
    pub const fn vowel_sign(pattern: &'static str, glyphs: &'static str) -> Self {
        Self::new(
            pattern,
            glyphs,
            RuleKind::Vowel,
            ContextConstraint::AfterConsonant,
        )
    }

    /// Pattern length in characters.
    pub fn pattern_len(&self) -> usize {
        self.pattern.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(after_consonant: bool, before_vowel: bool) -> MatchContext {
        MatchContext {
            after_consonant,
            before_vowel,
        }
    }

    #[test]
    fn any_always_holds() {
        for &(a, b) in &[(false, false), (false, true), (true, false), (true, true)] {
            assert!(ContextConstraint::Any.holds(ctx(a, b)));
        }
    }

    #[test]
    fn consonant_side_constraints() {
        assert!(ContextConstraint::AfterConsonant.holds(ctx(true, false)));
        assert!(!ContextConstraint::AfterConsonant.holds(ctx(false, false)));
        assert!(ContextConstraint::NotAfterConsonant.holds(ctx(false, true)));
        assert!(!ContextConstraint::NotAfterConsonant.holds(ctx(true, true)));
    }

    #[test]
    fn vowel_side_constraints() {
        assert!(ContextConstraint::BeforeVowel.holds(ctx(false, true)));
        assert!(!ContextConstraint::BeforeVowel.holds(ctx(true, false)));
        assert!(ContextConstraint::NotBeforeVowel.holds(ctx(true, false)));
        assert!(!ContextConstraint::NotBeforeVowel.holds(ctx(false, true)));
    }

    #[test]
    fn constructors_set_kind_and_context() {
        let r = RomanizationRule::vowel_sign("aa", "\u{0DCF}");
        assert_eq!(r.kind, RuleKind::Vowel);
        assert_eq!(r.context, ContextConstraint::AfterConsonant);
        assert_eq!(r.pattern_len(), 2);

        let r = RomanizationRule::consonant("k", "\u{0D9A}");
        assert_eq!(r.kind, RuleKind::Consonant);
        assert_eq!(r.context, ContextConstraint::Any);
    }
}
