// Phoneme mapper over the built-in romanization rule index.

use singlish_rules::{MapError, RuleIndex, transliterate};

/// Maps Singlish words to Sinhala script.
///
/// Borrows the process-wide rule index; copying a mapper is free.
#[derive(Clone, Copy)]
pub struct PhonemeMapper {
    index: &'static RuleIndex,
}

impl PhonemeMapper {
    /// A mapper over the built-in table.
    pub fn new() -> Self {
        Self {
            index: RuleIndex::global(),
        }
    }

    /// Map one word. Fails without partial output if any position matches
    /// no rule.
    pub fn map(&self, word: &str) -> Result<String, MapError> {
        transliterate(self.index, word)
    }
}

impl Default for PhonemeMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PhonemeMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhonemeMapper")
            .field("rules", &self.index.rules().len())
            .finish()
    }
}
