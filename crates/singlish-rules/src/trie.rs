// Rule index: an immutable character trie over rule patterns.

use std::sync::OnceLock;

use hashbrown::HashMap;
use singlish_core::character::is_romanization_letter;

use crate::RuleError;
use crate::rule::RomanizationRule;
use crate::table::MAPPINGS;

struct Node {
    children: HashMap<char, Node>,
    /// Indices into `RuleIndex::rules` of every rule whose pattern ends here.
    rules: Vec<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            rules: Vec::new(),
        }
    }
}

/// One pattern that matches the input at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    /// Matched length in characters.
    pub len: usize,
    pub rule: &'a RomanizationRule,
}

/// Immutable lookup structure for a rule table.
///
/// Built once and then shared read-only, so any number of threads may query
/// it concurrently.
pub struct RuleIndex {
    rules: Vec<RomanizationRule>,
    root: Node,
    max_pattern_len: usize,
}

impl RuleIndex {
    /// Get or initialize the index over the built-in table.
    pub fn global() -> &'static RuleIndex {
        static INSTANCE: OnceLock<RuleIndex> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            RuleIndex::new(MAPPINGS).expect("built-in romanization table is valid")
        })
    }

    /// Build an index over `rules`.
    ///
    /// Fails if a pattern is empty or uses characters outside the
    /// romanization alphabet.
    pub fn new(rules: &[RomanizationRule]) -> Result<Self, RuleError> {
        let mut index = RuleIndex {
            rules: Vec::with_capacity(rules.len()),
            root: Node::new(),
            max_pattern_len: 0,
        };
        for (i, rule) in rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(RuleError::EmptyPattern { index: i });
            }
            if let Some(ch) = rule.pattern.chars().find(|&c| !is_romanization_letter(c)) {
                return Err(RuleError::InvalidPatternChar {
                    pattern: rule.pattern.to_string(),
                    ch,
                });
            }
            index.insert(rule.pattern, i);
            index.rules.push(*rule);
            index.max_pattern_len = index.max_pattern_len.max(rule.pattern_len());
        }
        Ok(index)
    }

    fn insert(&mut self, pattern: &str, rule_id: usize) {
        let mut node = &mut self.root;
        for c in pattern.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        node.rules.push(rule_id);
    }

    /// Collect every rule whose pattern is a prefix of `input[pos..]`,
    /// shortest first.
    pub fn matches_at<'a>(&'a self, input: &[char], pos: usize, out: &mut Vec<PatternMatch<'a>>) {
        let mut node = &self.root;
        for (depth, c) in input.iter().skip(pos).enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => return,
            }
            for &id in &node.rules {
                out.push(PatternMatch {
                    len: depth + 1,
                    rule: &self.rules[id],
                });
            }
        }
    }

    /// All rules in insertion order.
    pub fn rules(&self) -> &[RomanizationRule] {
        &self.rules
    }

    /// Longest pattern length in characters.
    pub fn max_pattern_len(&self) -> usize {
        self.max_pattern_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleKind;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn global_index_holds_whole_table() {
        let index = RuleIndex::global();
        assert_eq!(index.rules().len(), MAPPINGS.len());
        assert_eq!(index.max_pattern_len(), 3);
    }

    #[test]
    fn matches_are_shortest_first() {
        let index = RuleIndex::global();
        let input = chars("khaa");
        let mut out = Vec::new();
        index.matches_at(&input, 0, &mut out);
        let lens: Vec<usize> = out.iter().map(|m| m.len).collect();
        assert_eq!(lens, vec![1, 2]);
        assert_eq!(out[0].rule.pattern, "k");
        assert_eq!(out[1].rule.pattern, "kh");
    }

    #[test]
    fn shared_pattern_yields_every_rule() {
        let index = RuleIndex::global();
        let input = chars("aa");
        let mut out = Vec::new();
        index.matches_at(&input, 0, &mut out);
        // "a" letter + sign, "aa" letter + sign
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|m| m.rule.kind == RuleKind::Vowel));
    }

    #[test]
    fn match_from_middle_position() {
        let index = RuleIndex::global();
        let input = chars("xng");
        let mut out = Vec::new();
        index.matches_at(&input, 1, &mut out);
        assert!(out.iter().any(|m| m.rule.pattern == "ng"));
    }

    #[test]
    fn no_match_for_unknown_char() {
        let index = RuleIndex::global();
        let mut out = Vec::new();
        index.matches_at(&chars("c"), 0, &mut out);
        assert!(out.is_empty());
        index.matches_at(&chars(""), 0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn rejects_empty_pattern() {
        let rules = [RomanizationRule::consonant("", "\u{0D9A}")];
        assert!(matches!(
            RuleIndex::new(&rules),
            Err(RuleError::EmptyPattern { index: 0 })
        ));
    }

    #[test]
    fn rejects_pattern_outside_alphabet() {
        let rules = [
            RomanizationRule::consonant("k", "\u{0D9A}"),
            RomanizationRule::consonant("q", "\u{0D9A}"),
        ];
        match RuleIndex::new(&rules) {
            Err(RuleError::InvalidPatternChar { pattern, ch }) => {
                assert_eq!(pattern, "q");
                assert_eq!(ch, 'q');
            }
            other => panic!("expected InvalidPatternChar, got {:?}", other.err()),
        }
    }
}
