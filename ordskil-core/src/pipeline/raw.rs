//! Stage 1: the rough tokenizer.
//!
//! Splits the incoming text chunks on whitespace, attaching each run of
//! whitespace to the token that follows it, and applies the optional
//! preprocessing passes (invisible-character removal, composite-glyph
//! folding, HTML-escape expansion). Blank lines become hard sentence
//! splits; `[[`/`]]` markers become paragraph tokens. Tokens whose surface
//! ends up empty (trailing whitespace, removed characters) are carried
//! forward and attached to the front of the next token, so that the
//! original text survives byte for byte.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;

use crate::lang::{escapes, unicode};
use crate::options::TokenizerOptions;
use crate::token::{Token, TokenKind};

/// Blank line (possibly containing whitespace) or a paragraph splice.
static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n|\]\]\[\[").expect("split pattern is valid"));

pub struct RawTokens<I: Iterator<Item = String>> {
    chunks: I,
    pending: VecDeque<Token>,
    /// Empty-surface token whose original is waiting for a home
    saved: Option<Token>,
    replace_composite_glyphs: bool,
    replace_html_escapes: bool,
    one_sent_per_line: bool,
    done: bool,
}

impl<I: Iterator<Item = String>> RawTokens<I> {
    pub fn new(chunks: I, options: &TokenizerOptions) -> Self {
        RawTokens {
            chunks,
            pending: VecDeque::new(),
            saved: None,
            replace_composite_glyphs: options.replace_composite_glyphs,
            replace_html_escapes: options.replace_html_escapes,
            one_sent_per_line: options.one_sent_per_line,
            done: false,
        }
    }

    fn push_split(&mut self, original: String) {
        self.pending
            .push_back(Token::marker_with_original(TokenKind::SentSplit, original));
    }

    fn process_chunk(&mut self, chunk: String) {
        if !self.one_sent_per_line && chunk.is_empty() {
            // An explicit empty string always causes a sentence split
            let original = self.saved.take().map(|t| t.original).unwrap_or_default();
            self.push_split(original);
            return;
        }

        // Prepend whitespace carried over from the previous chunk
        let text = match self.saved.take() {
            Some(saved) => {
                let mut s = saved.original;
                s.push_str(&chunk);
                s
            }
            None => chunk,
        };

        if self.one_sent_per_line {
            // Every newline is a hard sentence boundary
            let mut rest = text.as_str();
            while let Some(ix) = rest.find('\n') {
                self.process_text_segment(&rest[..ix]);
                self.flush_saved_into_split("\n".to_string());
                rest = &rest[ix + 1..];
            }
            self.process_text_segment(rest);
            return;
        }

        if !text.is_empty() && text.chars().all(char::is_whitespace) {
            // A whitespace-only chunk is an empty line
            self.push_split(text);
            return;
        }

        let mut pos = 0;
        for m in SENTENCE_SPLIT.find_iter(&text) {
            self.process_text_segment(&text[pos..m.start()]);
            if m.as_str() == "]][[" {
                self.pending
                    .push_back(Token::marker_with_original(TokenKind::ParaEnd, "]]".into()));
                self.pending
                    .push_back(Token::marker_with_original(TokenKind::ParaBegin, "[[".into()));
            } else {
                self.flush_saved_into_split(m.as_str().to_string());
            }
            pos = m.end();
        }
        self.process_text_segment(&text[pos..]);
    }

    /// A sentence split absorbs any pending empty-surface token.
    fn flush_saved_into_split(&mut self, separator: String) {
        let mut original = self.saved.take().map(|t| t.original).unwrap_or_default();
        original.push_str(&separator);
        self.push_split(original);
    }

    fn process_text_segment(&mut self, segment: &str) {
        let mut text = segment;
        let mut paragraph_end = 0;
        if !self.one_sent_per_line {
            while let Some(rest) = text.strip_prefix("[[") {
                text = rest;
                self.pending
                    .push_back(Token::marker_with_original(TokenKind::ParaBegin, "[[".into()));
            }
            while let Some(rest) = text.strip_suffix("]]") {
                text = rest;
                paragraph_end += 1;
            }
        }

        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];
            let ws_bytes = rest
                .char_indices()
                .find(|&(_, c)| !c.is_whitespace())
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let word_bytes = rest[ws_bytes..]
                .char_indices()
                .find(|&(_, c)| c.is_whitespace())
                .map(|(i, _)| i)
                .unwrap_or(rest.len() - ws_bytes);
            let slice = &rest[..ws_bytes + word_bytes];
            pos += slice.len();

            let mut tok = rough_token(slice, ws_bytes);
            remove_invisible(&mut tok);
            if self.replace_composite_glyphs {
                fold_composites(&mut tok);
            }
            if self.replace_html_escapes {
                replace_html_escapes(&mut tok);
            }
            // Replacements may have introduced whitespace (e.g. &nbsp;), so
            // the token may need to be split again
            for small in resplit(tok) {
                if small.txt.is_empty() {
                    self.saved = Some(match self.saved.take() {
                        Some(prev) => prev.concatenate(small, "", false),
                        None => small,
                    });
                } else {
                    let tok = match self.saved.take() {
                        Some(prev) => prev.concatenate(small, "", true),
                        None => small,
                    };
                    self.pending.push_back(tok);
                }
            }
        }

        for _ in 0..paragraph_end {
            self.pending
                .push_back(Token::marker_with_original(TokenKind::ParaEnd, "]]".into()));
        }
    }
}

impl<I: Iterator<Item = String>> Iterator for RawTokens<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Some(t);
            }
            if self.done {
                return None;
            }
            match self.chunks.next() {
                Some(chunk) => self.process_chunk(chunk),
                None => {
                    // Trailing whitespace at the very end can only survive
                    // on a split marker
                    if let Some(saved) = self.saved.take() {
                        self.push_split(saved.original);
                    }
                    self.done = true;
                }
            }
        }
    }
}

/// Build a raw token from a whitespace-prefixed slice.
fn rough_token(slice: &str, ws_bytes: usize) -> Token {
    let ws_chars = slice[..ws_bytes].chars().count() as u32;
    let word_chars = slice[ws_bytes..].chars().count() as u32;
    Token {
        kind: TokenKind::Unknown,
        txt: slice[ws_bytes..].to_string(),
        val: None,
        original: slice.to_string(),
        offsets: (ws_chars..ws_chars + word_chars).collect(),
    }
}

fn remove_invisible(tok: &mut Token) {
    if tok.txt.chars().any(unicode::is_invisible) {
        for c in [
            unicode::SOFT_HYPHEN,
            unicode::ZEROWIDTH_SPACE,
            unicode::ZEROWIDTH_NBSP,
        ] {
            tok.substitute_all(&c.to_string(), "");
        }
    }
}

/// Fold base letter + combining acute/diaeresis pairs into precomposed
/// code points. Other combining marks pass through.
fn fold_composites(tok: &mut Token) {
    loop {
        let found = {
            let chars: Vec<char> = tok.txt.chars().collect();
            (0..chars.len().saturating_sub(1))
                .find_map(|i| unicode::precomposed(chars[i], chars[i + 1]).map(|c| (i, c)))
        };
        match found {
            Some((i, c)) => tok.substitute(i, i + 2, &c.to_string()),
            None => break,
        }
    }
}

fn replace_html_escapes(tok: &mut Token) {
    loop {
        let found = escapes::HTML_ESCAPE.find(&tok.txt).map(|m| {
            let start = tok.txt[..m.start()].chars().count();
            let len = m.as_str().chars().count();
            let body = &m.as_str()[1..m.as_str().len() - 1];
            let replacement = escapes::expansion(body).unwrap_or_else(|| "\u{FFFD}".to_string());
            (start, len, replacement)
        });
        match found {
            Some((start, len, replacement)) => tok.substitute(start, start + len, &replacement),
            None => break,
        }
    }
}

/// Split a token whose surface may contain whitespace after replacements.
/// A trailing whitespace run yields a final token with an empty surface.
fn resplit(tok: Token) -> Vec<Token> {
    if !tok.txt.chars().any(char::is_whitespace) {
        return vec![tok];
    }
    let mut out = Vec::new();
    let mut rest = tok;
    while !rest.txt.is_empty() {
        let chars: Vec<char> = rest.txt.chars().collect();
        let ws = chars.iter().take_while(|c| c.is_whitespace()).count();
        let word = chars[ws..].iter().take_while(|c| !c.is_whitespace()).count();
        let (mut small, r) = rest.split(ws + word);
        small.substitute(0, ws, "");
        out.push(small);
        rest = r;
    }
    out
}
