// Phonetic plausibility of a lower-case romanized word.
//
// The score is a product of factors in [0, 1]. Romanized Sinhala is built
// from open syllables: vowel groups from the rule table, short consonant
// clusters, mostly vowel or nasal endings.

use hashbrown::HashSet;
use singlish_core::character::{is_consonant, is_vowel};

/// Penalty for each vowel group missing from the rule table.
const UNKNOWN_VOWEL_GROUP: f32 = 0.2;

/// Penalty for a cluster of three counted consonants.
const LONG_CLUSTER: f32 = 0.5;

/// Penalty for a `c` outside the digraph `ch`.
const BARE_C: f32 = 0.3;

/// Letters repeated this many times in a row are slang elongation.
const ELONGATION_RUN: usize = 3;

/// Length limits for scoring, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

/// Score how plausible `word` is as romanized Sinhala.
///
/// `word` must be lower-case and consist of romanization letters only;
/// `vowel_groups` is the vowel inventory of the rule table.
pub fn score(word: &[char], vowel_groups: &HashSet<&'static str>, bounds: LengthBounds) -> f32 {
    let len = word.len();
    if len < bounds.min || len > bounds.max {
        return 0.0;
    }
    if has_elongation(word) {
        return 0.0;
    }

    let mut score = 1.0;
    let mut seen_vowel = false;
    let mut i = 0;
    while i < len {
        let start = i;
        if is_vowel(word[i]) {
            while i < len && is_vowel(word[i]) {
                i += 1;
            }
            seen_vowel = true;
            let group: String = word[start..i].iter().collect();
            if !vowel_groups.contains(group.as_str()) {
                score *= UNKNOWN_VOWEL_GROUP;
            }
        } else {
            while i < len && is_consonant(word[i]) {
                i += 1;
            }
            score *= cluster_factor(&word[start..i]);
        }
    }
    if !seen_vowel {
        return 0.0;
    }

    let bare_c = word
        .iter()
        .enumerate()
        .any(|(i, &c)| c == 'c' && word.get(i + 1) != Some(&'h'));
    if bare_c {
        score *= BARE_C;
    }

    score * ending_factor(word[len - 1])
}

/// Factor for one consonant cluster. An `h` after another consonant is an
/// aspiration mark and does not count.
fn cluster_factor(cluster: &[char]) -> f32 {
    let counted = cluster
        .iter()
        .enumerate()
        .filter(|&(i, &c)| !(c == 'h' && i > 0))
        .count();
    match counted {
        0..=2 => 1.0,
        3 => LONG_CLUSTER,
        _ => 0.0,
    }
}

fn ending_factor(last: char) -> f32 {
    match last {
        'a' | 'e' | 'i' | 'o' | 'u' => 1.0,
        'n' | 'm' => 0.85,
        'y' | 'l' | 'r' => 0.5,
        _ => 0.3,
    }
}

fn has_elongation(word: &[char]) -> bool {
    word.chunk_by(|a, b| a == b)
        .any(|run| run.len() >= ELONGATION_RUN)
}
