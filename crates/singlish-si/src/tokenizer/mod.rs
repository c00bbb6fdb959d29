// Tokenizer: splits input into words, numerals, symbols, whitespace and
// newlines. Positions are character offsets into a `&[char]` buffer.

use singlish_core::character::{CharType, get_char_type, is_word_apostrophe};
use singlish_core::enums::TokenKind;
use singlish_core::token::Token;

/// Longest e-mail address worth scanning for.
const MAX_EMAIL_LEN: usize = 254;

// ============================================================================
// URL / e-mail detection
// ============================================================================

/// Symbols allowed in the local part and domain of an e-mail address.
fn is_email_symbol(c: char) -> bool {
    matches!(
        c,
        '!' | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '*'
            | '+'
            | '-'
            | '/'
            | '='
            | '?'
            | '^'
            | '_'
            | '`'
            | '{'
            | '|'
            | '}'
            | '~'
            | '.'
    )
}

/// Punctuation that ends a URL when it is the last character before
/// whitespace or end of text.
fn is_url_trailing_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ')' | '!' | '?' | ';' | ':')
}

fn is_break(c: char) -> bool {
    matches!(get_char_type(c), CharType::Whitespace | CharType::Newline)
}

/// Try to find an HTTP(S) URL or an e-mail address at the start of `text`.
/// Returns the length of the token, or 0 if none was found.
fn find_url_or_email(text: &[char]) -> usize {
    let textlen = text.len();

    let start = if starts_with_chars(text, &['h', 't', 't', 'p', 's', ':', '/', '/']) {
        8
    } else if starts_with_chars(text, &['h', 't', 't', 'p', ':', '/', '/']) {
        7
    } else {
        return find_email(text);
    };

    // A bare scheme is not a URL.
    if textlen == start || is_break(text[start]) {
        return 0;
    }

    for i in start..textlen {
        let c = text[i];
        if is_break(c) {
            return i;
        }
        if is_url_trailing_punctuation(c) && (i + 1 == textlen || is_break(text[i + 1])) {
            return i;
        }
    }
    textlen
}

/// Try to find an e-mail address at the start of `text`.
/// Returns the length of the token, or 0 if none was found.
fn find_email(text: &[char]) -> usize {
    let textlen = text.len();
    if textlen < 6 {
        return 0;
    }

    let mut found_at = false;

    for (i, &c) in text.iter().enumerate() {
        if i > MAX_EMAIL_LEN {
            return 0;
        }
        match get_char_type(c) {
            CharType::Whitespace | CharType::Newline => return trim_email(text, i),
            CharType::Letter | CharType::Digit => {}
            CharType::Symbol => {
                if c == '@' {
                    if found_at || i == 0 {
                        return 0;
                    }
                    found_at = true;
                } else if !is_email_symbol(c) {
                    return if found_at { trim_email(text, i) } else { 0 };
                }
            }
        }
    }

    trim_email(text, textlen)
}

/// Drop trailing symbols from a candidate address `text[..end]`, then
/// require an `@` followed by a dotted domain. Returns the trimmed length,
/// or 0.
fn trim_email(text: &[char], end: usize) -> usize {
    let mut end = end;
    while end > 0 && !matches!(get_char_type(text[end - 1]), CharType::Letter | CharType::Digit) {
        end -= 1;
    }
    let Some(at) = text[..end].iter().position(|&c| c == '@') else {
        return 0;
    };
    if text[at + 1..end].contains(&'.') { end } else { 0 }
}

/// Check whether `text` starts with exactly the characters in `prefix`.
fn starts_with_chars(text: &[char], prefix: &[char]) -> bool {
    text.len() >= prefix.len() && text[..prefix.len()] == *prefix
}

// ============================================================================
// Word length detection
// ============================================================================

/// Compute the length of a word or numeral starting at the beginning of
/// `text`, and whether it contains any letter.
fn word_length(text: &[char]) -> (usize, bool) {
    let url_length = find_url_or_email(text);
    if url_length != 0 {
        return (url_length, true);
    }

    let textlen = text.len();
    let mut wlen = 0;
    let mut seen_letters = false;

    while wlen < textlen {
        let c = text[wlen];
        match get_char_type(c) {
            CharType::Letter => {
                seen_letters = true;
                wlen += 1;
            }
            CharType::Digit => {
                wlen += 1;
            }
            CharType::Whitespace | CharType::Newline => return (wlen, seen_letters),
            CharType::Symbol => {
                let next = text.get(wlen + 1).map(|&n| get_char_type(n));
                let prev = get_char_type(text[wlen - 1]);
                if is_word_apostrophe(c) {
                    // Between two letters: "don't".
                    if prev == CharType::Letter && next == Some(CharType::Letter) {
                        wlen += 1;
                        continue;
                    }
                } else if matches!(c, '.' | ',') {
                    // Numeric separator: "1,234.50".
                    if !seen_letters && prev == CharType::Digit && next == Some(CharType::Digit)
                    {
                        wlen += 1;
                        continue;
                    }
                }
                return (wlen, seen_letters);
            }
        }
    }
    (textlen, seen_letters)
}

// ============================================================================
// Public tokenizer API
// ============================================================================

/// Find the token starting at position `pos` in the text.
///
/// Returns `Some((kind, token_length))`, or `None` at the end of the text.
/// The caller advances `pos` by `token_length` to continue; any position on
/// a token boundary is a valid restart point.
pub fn next_token(text: &[char], pos: usize) -> Option<(TokenKind, usize)> {
    let slice = text.get(pos..).filter(|s| !s.is_empty())?;

    let run = |ty: CharType| slice.iter().take_while(|&&c| get_char_type(c) == ty).count();

    let token = match get_char_type(slice[0]) {
        CharType::Letter | CharType::Digit => {
            let (wlen, seen_letters) = word_length(slice);
            let kind = if seen_letters {
                TokenKind::Word
            } else {
                TokenKind::Numeral
            };
            (kind, wlen)
        }
        CharType::Whitespace => (TokenKind::Whitespace, run(CharType::Whitespace)),
        CharType::Newline => (TokenKind::Newline, run(CharType::Newline)),
        CharType::Symbol => (TokenKind::Symbol, run(CharType::Symbol)),
    };
    Some(token)
}

/// Iterator over the tokens of a text.
///
/// Tokens cover the input with no gaps or overlaps, so concatenating their
/// texts reproduces the input exactly.
pub struct Tokens {
    chars: Vec<char>,
    pos: usize,
}

impl Tokens {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Total length of the text in characters.
    pub fn text_len(&self) -> usize {
        self.chars.len()
    }
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (kind, len) = next_token(&self.chars, self.pos)?;
        let text: String = self.chars[self.pos..self.pos + len].iter().collect();
        let token = Token::new(kind, text, self.pos);
        self.pos += len;
        Some(token)
    }
}

/// Tokenize a whole text.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokens::new(text).collect()
}
