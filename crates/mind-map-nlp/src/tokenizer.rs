//! Word and sentence segmentation.
//!
//! Words are maximal runs of alphanumerics, optionally joined by an inner
//! apostrophe or hyphen (`don't`, `state-of-the-art`) or, between digits, by
//! `.` or `,` (`3.5`, `1,000`). Every other non-whitespace character becomes
//! its own punctuation token. A sentence ends after `.`, `!` or `?`.

use crate::types::{PosTag, Token};

/// Split `text` into tokens with byte offsets and sentence indices.
///
/// Tokens are returned untagged ([`PosTag::Other`]) except punctuation.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut sentence_idx = 0;
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_alphanumeric() {
            let mut j = i + 1;
            while j < chars.len() {
                let (_, cj) = chars[j];
                if cj.is_alphanumeric() {
                    j += 1;
                    continue;
                }
                let next_alnum = chars.get(j + 1).is_some_and(|&(_, n)| n.is_alphanumeric());
                let joins_word = matches!(cj, '\'' | '\u{2019}' | '-') && next_alnum;
                let joins_number = matches!(cj, '.' | ',')
                    && chars[j - 1].1.is_ascii_digit()
                    && chars.get(j + 1).is_some_and(|&(_, n)| n.is_ascii_digit());
                if joins_word || joins_number {
                    j += 2;
                } else {
                    break;
                }
            }
            let end = chars.get(j).map(|&(b, _)| b).unwrap_or(text.len());
            tokens.push(Token::new(
                &text[start..end],
                PosTag::Other,
                start,
                end,
                sentence_idx,
                tokens.len(),
            ));
            i = j;
            continue;
        }

        let end = start + c.len_utf8();
        tokens.push(Token::new(
            &text[start..end],
            PosTag::Punctuation,
            start,
            end,
            sentence_idx,
            tokens.len(),
        ));
        if matches!(c, '.' | '!' | '?') {
            sentence_idx += 1;
        }
        i += 1;
    }

    tokens
}
