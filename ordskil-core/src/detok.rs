//! Reassembling text from tokens: detokenization, space correction and
//! paragraph marking.

use crate::error::Result;
use crate::lang::punct;
use crate::options::TokenizerOptions;
use crate::token::{normalized_text, Token, TokenKind};

/// Spacing discipline index for the [`punct::TP_SPACE`] matrix.
fn discipline(token: &Token, text: &str, double_quotes_seen: &mut usize) -> usize {
    if token.kind != TokenKind::Punctuation {
        return punct::TP_WORD;
    }
    let mut chars = text.chars();
    let (first, second) = (chars.next(), chars.next());
    match (first, second) {
        (Some(c), None) => {
            if c == '"' {
                // Straight double quotes glue alternately to the right and
                // to the left
                let ix = *double_quotes_seen % 2;
                *double_quotes_seen += 1;
                ix * 2 // Left = 0, Right = 2
            } else if punct::LEFT_PUNCTUATION.contains(c) {
                0
            } else if punct::RIGHT_PUNCTUATION.contains(c) {
                2
            } else if punct::NONE_PUNCTUATION.contains(c) {
                3
            } else if punct::CENTER_PUNCTUATION.contains(c) {
                1
            } else {
                punct::TP_WORD
            }
        }
        _ => punct::TP_WORD,
    }
}

/// Join a token sequence back into correctly spaced text. With `normalize`
/// the normalized punctuation forms are used instead of the raw surfaces.
pub fn detokenize<'a, I>(tokens: I, normalize: bool) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut result = String::new();
    let mut last = 3; // None: no space before the first token
    let mut double_quotes_seen = 0;
    for token in tokens {
        let text = if normalize {
            normalized_text(token)
        } else {
            &token.txt
        };
        if text.is_empty() {
            continue;
        }
        let this = discipline(token, text, &mut double_quotes_seen);
        if punct::TP_SPACE[last][this] && !result.is_empty() {
            result.push(' ');
        }
        result.push_str(text);
        last = this;
    }
    result
}

/// Normalize the spacing of a degraded string: tokenize it shallowly and
/// join the results back together. Idempotent by construction.
pub fn correct_spaces(text: &str) -> Result<String> {
    let tokens: Vec<Token> =
        crate::tokenize_without_annotation(text, &TokenizerOptions::default())?.collect();
    Ok(detokenize(tokens.iter(), false))
}

/// Convert blank-line paragraph separators into `[[` ... `]]` markers.
pub fn mark_paragraphs(text: &str) -> String {
    if text.is_empty() {
        return "[[]]".to_string();
    }
    let paragraphs: Vec<&str> = text.split('\n').filter(|p| !p.is_empty()).collect();
    let mut result = String::with_capacity(text.len() + 4 * paragraphs.len());
    result.push_str("[[");
    result.push_str(&paragraphs.join("]][["));
    result.push_str("]]");
    result
}

/// Character and byte start indexes of each token's original slice within
/// the source text. With `last_is_end`, a final past-the-end entry is
/// included (equal to the total source length).
pub fn calculate_indexes<'a, I>(tokens: I, last_is_end: bool) -> (Vec<usize>, Vec<usize>)
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut char_indexes = vec![0];
    let mut byte_indexes = vec![0];
    for t in tokens {
        let last_char = *char_indexes.last().unwrap_or(&0);
        let last_byte = *byte_indexes.last().unwrap_or(&0);
        char_indexes.push(last_char + t.original.chars().count());
        byte_indexes.push(last_byte + t.original.len());
    }
    if !last_is_end {
        char_indexes.pop();
        byte_indexes.pop();
    }
    (char_indexes, byte_indexes)
}

/// Group a token stream into paragraphs. Each paragraph is a list of
/// `(start index, sentence tokens)` pairs; begin/end markers are dropped
/// and sentences containing only punctuation are skipped.
pub fn paragraphs<I>(tokens: I) -> Vec<Vec<(usize, Vec<Token>)>>
where
    I: IntoIterator<Item = Token>,
{
    fn valid(sent: &[Token]) -> bool {
        sent.iter().any(|t| t.kind != TokenKind::Punctuation)
    }

    let mut result = Vec::new();
    let mut current: Vec<(usize, Vec<Token>)> = Vec::new();
    let mut sent: Vec<Token> = Vec::new();
    let mut sent_begin = 0;

    for (ix, t) in tokens.into_iter().enumerate() {
        match t.kind {
            TokenKind::SentBegin => {
                sent = Vec::new();
                sent_begin = ix;
            }
            TokenKind::SentEnd => {
                if valid(&sent) {
                    current.push((sent_begin, std::mem::take(&mut sent)));
                } else {
                    sent.clear();
                }
            }
            TokenKind::ParaBegin | TokenKind::ParaEnd => {
                if valid(&sent) {
                    current.push((sent_begin, std::mem::take(&mut sent)));
                } else {
                    sent.clear();
                }
                if !current.is_empty() {
                    result.push(std::mem::take(&mut current));
                }
            }
            TokenKind::EndSentinel | TokenKind::SentSplit => {}
            _ => sent.push(t),
        }
    }
    if valid(&sent) {
        current.push((sent_begin, sent));
    }
    if !current.is_empty() {
        result.push(current);
    }
    result
}
