//! Tokenizer and sentence segmenter for Icelandic text.
//!
//! The entry point is [`tokenize`], which turns text into a lazy stream of
//! typed [`Token`]s framed by sentence markers. Each token keeps both its
//! normalized surface and the exact original slice it came from, together
//! with a character-offset map between the two, so that spans into the
//! source text can be reconstructed from any output token.
//!
//! ```
//! use ordskil_core::{tokenize, TokenizerOptions, TokenKind};
//!
//! let tokens: Vec<_> = tokenize("Hann kom kl. 15:30.", &TokenizerOptions::default())
//!     .unwrap()
//!     .collect();
//! assert_eq!(tokens[0].kind, TokenKind::SentBegin);
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::Time));
//! ```

pub mod abbrev;
mod detok;
mod error;
mod lang;
mod options;
mod pipeline;
mod token;

pub use detok::{calculate_indexes, correct_spaces, detokenize, mark_paragraphs, paragraphs};
pub use error::{Error, Result};
pub use options::{KludgyOrdinals, OptionsBuilder, TokenizerOptions};
pub use pipeline::Tokens;
pub use token::{
    normalized_text, OffsetVec, Spacing, Token, TokenKind, TokenStream, TokenValue, WordMeaning,
};

/// Tokenize a text into a lazy stream of tokens, including sentence
/// markers and the terminal X_END sentinel.
///
/// Fails only if the abbreviation configuration cannot be loaded; the
/// tokenization itself is total.
pub fn tokenize(text: &str, options: &TokenizerOptions) -> Result<Tokens> {
    let chunks: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
    pipeline::build(chunks.into_iter(), options, true)
}

/// Tokenize text arriving as an iterator of chunks (typically lines).
/// Chunk boundaries must fall on whitespace; an empty chunk forces a
/// sentence split.
pub fn tokenize_lines<I>(lines: I, options: &TokenizerOptions) -> Result<Tokens>
where
    I: IntoIterator<Item = String>,
    I::IntoIter: 'static,
{
    pipeline::build(lines.into_iter(), options, true)
}

/// Tokenize without the final phrase coalescer. Currency words and
/// magnitude abbreviations stay separate; downstream annotators with a
/// morphological lexicon do that pass more thoroughly themselves.
pub fn tokenize_without_annotation(text: &str, options: &TokenizerOptions) -> Result<Tokens> {
    let chunks: Vec<String> = text.split_inclusive('\n').map(str::to_string).collect();
    pipeline::build(chunks.into_iter(), options, false)
}

/// Split text into sentences, one string per sentence, with tokens joined
/// by single spaces (or by their original surfaces with the `original`
/// option, or normalized forms with `normalize`).
pub fn split_into_sentences(text: &str, options: &TokenizerOptions) -> Result<Sentences> {
    let tokens = tokenize_without_annotation(text, options)?;
    Ok(Sentences {
        tokens,
        original: options.original,
        normalize: options.normalize,
        current: Vec::new(),
        done: false,
    })
}

/// Iterator of sentence strings returned by [`split_into_sentences`].
pub struct Sentences {
    tokens: Tokens,
    original: bool,
    normalize: bool,
    current: Vec<String>,
    done: bool,
}

impl Iterator for Sentences {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        loop {
            let Some(t) = self.tokens.next() else {
                self.done = true;
                if self.current.is_empty() {
                    return None;
                }
                return Some(self.join());
            };
            if t.kind.is_end() {
                let flush = matches!(t.kind, TokenKind::SentEnd | TokenKind::SentSplit);
                let sentence = if flush { Some(self.join()) } else { None };
                self.current.clear();
                if let Some(s) = sentence {
                    return Some(s);
                }
            } else if !t.kind.is_begin() {
                let text = if self.original {
                    t.original.clone()
                } else if self.normalize {
                    normalized_text(&t).to_string()
                } else {
                    t.txt.clone()
                };
                if !text.is_empty() {
                    self.current.push(text);
                }
            }
        }
    }
}

impl Sentences {
    fn join(&self) -> String {
        if self.original {
            self.current.concat()
        } else {
            self.current.join(" ")
        }
    }
}

/// Plain text of a token sequence, tokens joined by single spaces.
pub fn text_from_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .map(|t| t.txt.as_str())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`text_from_tokens`], with punctuation normalization applied.
pub fn normalized_text_from_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens
        .into_iter()
        .map(normalized_text)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
