// Greedy longest-match transliteration of a single token.

use singlish_core::character::{SINHALA_VIRAMA, is_vowel, simple_lower};

use crate::MapError;
use crate::rule::{MatchContext, RuleKind};
use crate::trie::{PatternMatch, RuleIndex};

/// Pick the longest match at `pos` whose context constraint holds.
///
/// Exact-case matches are collected first, then matches against the
/// lower-cased input. On equal length the exact-case match wins, so
/// retroflex capitals (`T`, `D`, `N`, `L`, `Sh`) keep their meaning while a
/// sentence-initial capital still maps like its lower-case letter.
fn longest_match<'a>(
    index: &'a RuleIndex,
    exact: &[char],
    lower: &[char],
    pos: usize,
    after_consonant: bool,
    scratch: &mut Vec<PatternMatch<'a>>,
) -> Option<PatternMatch<'a>> {
    scratch.clear();
    index.matches_at(exact, pos, scratch);
    if exact[pos..] != lower[pos..] {
        index.matches_at(lower, pos, scratch);
    }

    let mut best: Option<PatternMatch<'a>> = None;
    for &candidate in scratch.iter() {
        let ctx = MatchContext {
            after_consonant,
            before_vowel: lower.get(pos + candidate.len).is_some_and(|&c| is_vowel(c)),
        };
        if !candidate.rule.context.holds(ctx) {
            continue;
        }
        // Strictly longer only: earlier (exact-case) matches win ties.
        if best.is_none_or(|b| candidate.len > b.len) {
            best = Some(candidate);
        }
    }
    best
}

/// Transliterate one romanized token into Sinhala script.
///
/// Scans left to right; at each position the longest applicable pattern
/// wins. A consonant not followed by a vowel receives the virama. If any
/// position matches no rule the whole token fails with
/// [`MapError::UnmappableToken`]; partial output is never returned.
pub fn transliterate(index: &RuleIndex, token: &str) -> Result<String, MapError> {
    let exact: Vec<char> = token.chars().collect();
    let lower: Vec<char> = exact.iter().map(|&c| simple_lower(c)).collect();
    let len = exact.len();

    let mut output = String::with_capacity(token.len() * 3);
    let mut scratch = Vec::with_capacity(index.max_pattern_len() * 4);
    let mut pending_consonant = false;
    let mut pos = 0;

    while pos < len {
        let Some(m) = longest_match(index, &exact, &lower, pos, pending_consonant, &mut scratch)
        else {
            return Err(MapError::UnmappableToken {
                token: token.to_string(),
                position: pos,
            });
        };

        match m.rule.kind {
            RuleKind::Consonant => {
                if pending_consonant {
                    output.push(SINHALA_VIRAMA);
                }
                output.push_str(m.rule.glyphs);
                pending_consonant = true;
            }
            RuleKind::Vowel => {
                output.push_str(m.rule.glyphs);
                pending_consonant = false;
            }
            RuleKind::Modifier => {
                if pending_consonant {
                    output.push(SINHALA_VIRAMA);
                }
                output.push_str(m.rule.glyphs);
                pending_consonant = false;
            }
        }
        pos += m.len;
    }

    if pending_consonant {
        output.push(SINHALA_VIRAMA);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tr(s: &str) -> Result<String, MapError> {
        transliterate(RuleIndex::global(), s)
    }

    #[test]
    fn simple_cv_syllables() {
        assert_eq!(tr("mama").unwrap(), "\u{0DB8}\u{0DB8}"); // මම
        assert_eq!(tr("karala").unwrap(), "\u{0D9A}\u{0DBB}\u{0DBD}"); // කරල
    }

    #[test]
    fn vowel_signs() {
        // ගෙදර
        assert_eq!(tr("gedara").unwrap(), "\u{0D9C}\u{0DD9}\u{0DAF}\u{0DBB}");
        // කොහොමද
        assert_eq!(
            tr("kohomada").unwrap(),
            "\u{0D9A}\u{0DDC}\u{0DC4}\u{0DDC}\u{0DB8}\u{0DAF}"
        );
    }

    #[test]
    fn word_initial_independent_vowel() {
        // එක
        assert_eq!(tr("eka").unwrap(), "\u{0D91}\u{0D9A}");
        // ඔය
        assert_eq!(tr("oya").unwrap(), "\u{0D94}\u{0DBA}");
        // ආදරය
        assert_eq!(tr("aadaraya").unwrap(), "\u{0D86}\u{0DAF}\u{0DBB}\u{0DBA}");
    }

    #[test]
    fn consonant_cluster_gets_virama() {
        // කියන්න
        assert_eq!(
            tr("kiyanna").unwrap(),
            "\u{0D9A}\u{0DD2}\u{0DBA}\u{0DB1}\u{0DCA}\u{0DB1}"
        );
    }

    #[test]
    fn final_consonant_gets_virama() {
        // එකකින්
        assert_eq!(
            tr("ekakin").unwrap(),
            "\u{0D91}\u{0D9A}\u{0D9A}\u{0DD2}\u{0DB1}\u{0DCA}"
        );
    }

    #[test]
    fn long_vowels_prefer_longest_pattern() {
        // බල්ලා: "aa" sign, not two inherent vowels
        assert_eq!(
            tr("ballaa").unwrap(),
            "\u{0DB6}\u{0DBD}\u{0DCA}\u{0DBD}\u{0DCF}"
        );
        // ඊයේ: "ee" as a letter, "ei" as a sign
        assert_eq!(tr("eeyei").unwrap(), "\u{0D8A}\u{0DBA}\u{0DDA}");
    }

    #[test]
    fn aspirates_are_single_units() {
        // ධර්ම
        assert_eq!(tr("dharma").unwrap(), "\u{0DB0}\u{0DBB}\u{0DCA}\u{0DB8}");
    }

    #[test]
    fn ng_depends_on_following_vowel() {
        // ගඟ: "ng" before a vowel is the prenasalised consonant
        assert_eq!(tr("ganga").unwrap(), "\u{0D9C}\u{0D9F}");
        // ලං: "ng" at the end is the anusvara
        assert_eq!(tr("lang").unwrap(), "\u{0DBD}\u{0D82}");
    }

    #[test]
    fn capitals_prefer_retroflex_rules() {
        // ටික: exact-case "T"
        assert_eq!(tr("Tika").unwrap(), "\u{0DA7}\u{0DD2}\u{0D9A}");
        // තික: lower-case "t"
        assert_eq!(tr("tika").unwrap(), "\u{0DAD}\u{0DD2}\u{0D9A}");
    }

    #[test]
    fn capital_without_rule_falls_back_to_lower_case() {
        assert_eq!(tr("Mama").unwrap(), tr("mama").unwrap());
        assert_eq!(tr("Eka").unwrap(), tr("eka").unwrap());
    }

    #[test]
    fn unmappable_position_fails_whole_token() {
        match tr("cancel") {
            Err(MapError::UnmappableToken { token, position }) => {
                assert_eq!(token, "cancel");
                assert_eq!(position, 0);
            }
            other => panic!("expected UnmappableToken, got {other:?}"),
        }
        assert!(matches!(
            tr("dance"),
            Err(MapError::UnmappableToken { position: 3, .. })
        ));
    }

    #[test]
    fn non_roman_characters_are_unmappable() {
        assert!(tr("ça").is_err());
        assert!(tr("\u{0DB8}").is_err());
        assert!(tr("it's").is_err());
    }

    #[test]
    fn empty_token_maps_to_empty() {
        assert_eq!(tr("").unwrap(), "");
    }

    #[test]
    fn deterministic() {
        for word in ["kiyanna", "ganga", "Tika", "mamagedharayanavaa"] {
            assert_eq!(tr(word), tr(word));
        }
    }
}
