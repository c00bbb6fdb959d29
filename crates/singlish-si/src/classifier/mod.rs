// Script classifier: decides whether a word is romanized Sinhala.

pub mod allow_list;
pub mod plausibility;

use hashbrown::HashSet;
use singlish_core::character::{is_lower, is_romanization_letter, is_upper, simple_lower};
use singlish_core::enums::ClassLabel;
use singlish_core::token::Classification;
use singlish_rules::table::{case_marked_initials, vowel_patterns};

use crate::config::EngineConfig;
use plausibility::LengthBounds;

/// Confidence given to capitalisation-shape decisions.
const SHAPE_CONFIDENCE: f32 = 0.9;

/// Classifies `Word` tokens.
///
/// Holds only immutable state derived from the configuration, so one
/// classifier can be shared across threads.
#[derive(Debug, Clone)]
pub struct ScriptClassifier {
    allow_list: HashSet<String>,
    vowel_groups: HashSet<&'static str>,
    case_marked: HashSet<char>,
    threshold: f32,
    bounds: LengthBounds,
}

impl ScriptClassifier {
    /// Build a classifier from a validated configuration. The configured
    /// allow-list extends the built-in one.
    pub fn new(config: &EngineConfig) -> Self {
        let mut allow_list = allow_list::builtin();
        allow_list.extend(
            config
                .foreign_word_allow_list
                .iter()
                .map(|w| w.chars().map(simple_lower).collect::<String>()),
        );
        Self {
            allow_list,
            vowel_groups: vowel_patterns().collect(),
            case_marked: case_marked_initials().collect(),
            threshold: config.confidence_threshold,
            bounds: LengthBounds {
                min: config.min_candidate_length,
                max: config.max_candidate_length,
            },
        }
    }

    /// Classify one word.
    ///
    /// Checks run from most to least certain: alphabet, allow-list,
    /// capitalisation shape, then the plausibility score. A score equal to
    /// the threshold is `Ambiguous`, and so is a plausible word whose only
    /// capital is a case-marked first letter (`Dan` may be sentence case
    /// for `dan` or retroflex `D`).
    pub fn classify(&self, word: &str) -> Classification {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() || !chars.iter().all(|&c| is_romanization_letter(c)) {
            return Classification::foreign();
        }

        let lower: Vec<char> = chars.iter().map(|&c| simple_lower(c)).collect();
        let lower_word: String = lower.iter().collect();
        if self.allow_list.contains(lower_word.as_str()) {
            return Classification::foreign();
        }

        if is_acronym(&chars) || is_camel_case(&chars) {
            return Classification::new(ClassLabel::ForeignWord, SHAPE_CONFIDENCE);
        }

        let score = plausibility::score(&lower, &self.vowel_groups, self.bounds);
        if score > self.threshold && !self.is_case_marked_initial(&chars) {
            Classification::new(ClassLabel::SinglishCandidate, score)
        } else {
            Classification::new(ClassLabel::Ambiguous, score)
        }
    }

    fn is_case_marked_initial(&self, chars: &[char]) -> bool {
        chars.first().is_some_and(|c| self.case_marked.contains(c))
            && !chars[1..].iter().any(|&c| is_upper(c))
    }

    /// Whether `word` is on the allow-list (case-insensitive).
    pub fn is_allow_listed(&self, word: &str) -> bool {
        let lower: String = word.chars().map(simple_lower).collect();
        self.allow_list.contains(lower.as_str())
    }
}

/// All upper-case, two letters or more: `OK`, `ATM`.
fn is_acronym(chars: &[char]) -> bool {
    chars.len() >= 2 && chars.iter().all(|&c| is_upper(c))
}

/// An upper-case letter right after a lower-case one: `WhatsApp`, `iPhone`.
fn is_camel_case(chars: &[char]) -> bool {
    chars.windows(2).any(|w| is_lower(w[0]) && is_upper(w[1]))
}
