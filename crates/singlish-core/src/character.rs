// Character classification and Unicode utilities

// ---------------------------------------------------------------------------
// Romanization alphabet
// ---------------------------------------------------------------------------

/// Latin vowels used by romanized Sinhala (lowercase).
const ROMAN_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Latin letters never used by romanized Sinhala (lowercase).
const NON_ROMANIZATION_LETTERS: &[char] = &['q', 'x', 'z'];

/// Sinhala Unicode block.
const SINHALA_BLOCK: std::ops::RangeInclusive<u32> = 0x0D80..=0x0DFF;

/// Sinhala al-lakuna (virama).
pub const SINHALA_VIRAMA: char = '\u{0DCA}';

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification used by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Letter,
    Digit,
    Whitespace,
    Newline,
    Symbol,
}

/// Returns the character type for a given character.
///
/// Letters include everything Unicode considers alphabetic plus Sinhala
/// signs, combining diacritics and the zero-width joiners, so that text
/// already written in Sinhala forms whole words.
pub fn get_char_type(c: char) -> CharType {
    if is_newline(c) {
        return CharType::Newline;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if is_letter(c) {
        return CharType::Letter;
    }
    CharType::Symbol
}

/// Check whether a character belongs to a word.
pub fn is_letter(c: char) -> bool {
    let cp = c as u32;
    c.is_alphabetic()
        || SINHALA_BLOCK.contains(&cp)
        || (0x0300..=0x036F).contains(&cp) // combining diacritical marks
        || cp == 0x200C // ZERO WIDTH NON-JOINER
        || cp == 0x200D // ZERO WIDTH JOINER
}

/// Check whether a character is a line break.
pub fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0085}' // NEXT LINE
            | '\u{2028}' // LINE SEPARATOR
            | '\u{2029}' // PARAGRAPH SEPARATOR
    )
}

/// Check whether a character is an apostrophe that may join two letters.
pub fn is_word_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// Check whether a character is in the Sinhala Unicode block.
pub fn is_sinhala(c: char) -> bool {
    SINHALA_BLOCK.contains(&(c as u32))
}

// ---------------------------------------------------------------------------
// Romanized Sinhala phonology
// ---------------------------------------------------------------------------

/// Check whether a character may appear in a romanized Sinhala word.
///
/// This is the ASCII Latin alphabet minus letters that Singlish never uses.
pub fn is_romanization_letter(c: char) -> bool {
    c.is_ascii_alphabetic() && !NON_ROMANIZATION_LETTERS.contains(&simple_lower(c))
}

/// Check whether a character is a romanization vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    ROMAN_VOWELS.contains(&simple_lower(c))
}

/// Check whether a character is a romanization consonant (case-insensitive).
pub fn is_consonant(c: char) -> bool {
    is_romanization_letter(c) && !is_vowel(c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

// ---------------------------------------------------------------------------
// Script measurement
// ---------------------------------------------------------------------------

/// Length of the longest run of consecutive Sinhala code points in `text`.
pub fn longest_sinhala_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if is_sinhala(c) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Whether `text` contains any Sinhala code point.
pub fn contains_sinhala(text: &str) -> bool {
    text.chars().any(is_sinhala)
}
