//! The token type flowing through the pipeline.
//!
//! A token couples a normalized surface (`txt`) with the exact source slice
//! it came from (`original`, including any leading whitespace) and a
//! character-level offset map between the two. Every split, substitution and
//! merge maintains the map, so spans into the source text can be
//! reconstructed from any stage's output.

mod kind;
mod stream;
mod value;

pub use kind::{TokenKind, META_BEGIN};
pub use stream::TokenStream;
pub use value::{Spacing, TokenValue, WordMeaning};

use crate::lang::punct;
use smallvec::SmallVec;

/// Offset map storage; tokens are short, so spill rarely.
pub type OffsetVec = SmallVec<[u32; 8]>;

/// A classified slice of input text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Discriminant from the closed taxonomy
    pub kind: TokenKind,
    /// Normalized text, whitespace coalesced
    pub txt: String,
    /// Kind-specific payload
    pub val: Option<TokenValue>,
    /// Original source slice, with leading whitespace attached
    pub original: String,
    /// For each char of `txt`, its char index within `original`
    pub offsets: OffsetVec,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn byte_at(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

impl Token {
    /// Create a raw token whose surface and original are the same text.
    pub fn raw(txt: &str) -> Token {
        Token {
            kind: TokenKind::Unknown,
            txt: txt.to_string(),
            val: None,
            original: txt.to_string(),
            offsets: (0..char_len(txt) as u32).collect(),
        }
    }

    /// Create an empty metatoken of the given kind.
    pub fn marker(kind: TokenKind) -> Token {
        Token {
            kind,
            txt: String::new(),
            val: None,
            original: String::new(),
            offsets: OffsetVec::new(),
        }
    }

    /// Create a metatoken that still owns a slice of the original text
    /// (e.g. a sentence split carrying the blank line that caused it).
    pub fn marker_with_original(kind: TokenKind, original: String) -> Token {
        Token {
            kind,
            txt: String::new(),
            val: None,
            original,
            offsets: OffsetVec::new(),
        }
    }

    /// The end-of-stream sentinel.
    pub fn end_sentinel() -> Token {
        Token::marker(TokenKind::EndSentinel)
    }

    /// Number of chars in `txt`. Equal to `offsets.len()` by invariant.
    pub fn len_chars(&self) -> usize {
        self.offsets.len()
    }

    /// The normalized punctuation symbol, if this is a punctuation token.
    pub fn punctuation(&self) -> Option<&str> {
        if self.kind != TokenKind::Punctuation {
            return None;
        }
        self.val.as_ref().and_then(|v| v.punct_symbol())
    }

    /// True if the normalized punctuation symbol equals `sym`.
    pub fn is_punct(&self, sym: &str) -> bool {
        self.punctuation() == Some(sym)
    }

    /// Numeric value of a NUMBER or YEAR token.
    pub fn number(&self) -> Option<f64> {
        match &self.val {
            Some(TokenValue::Number(n)) => Some(*n),
            Some(TokenValue::Year(y)) => Some(*y as f64),
            _ => None,
        }
    }

    /// Integer value of a NUMBER or YEAR token.
    pub fn integer(&self) -> Option<i64> {
        self.number().map(|n| n as i64)
    }

    /// Integer value of an ORDINAL or NUMBER token.
    pub fn ordinal_value(&self) -> Option<i64> {
        match &self.val {
            Some(TokenValue::Ordinal(n)) => Some(*n),
            Some(TokenValue::Number(n)) => Some(*n as i64),
            _ => None,
        }
    }

    /// Abbreviation expansions of a WORD token; empty if none.
    pub fn meanings(&self) -> &[WordMeaning] {
        match &self.val {
            Some(TokenValue::Meanings(m)) if self.kind == TokenKind::Word => m,
            _ => &[],
        }
    }

    /// Split this token into two at `pos` (a char position in `txt`).
    ///
    /// The left part keeps the kind and value; the right part becomes a
    /// value-less token of the same kind. `original` and `offsets` are
    /// partitioned so that both halves uphold the token invariants.
    pub fn split(self, pos: usize) -> (Token, Token) {
        if pos >= self.offsets.len() {
            let empty = Token {
                kind: self.kind,
                txt: String::new(),
                val: None,
                original: String::new(),
                offsets: OffsetVec::new(),
            };
            return (self, empty);
        }
        let cut = self.offsets[pos] as usize;
        let txt_byte = byte_at(&self.txt, pos);
        let orig_byte = byte_at(&self.original, cut);

        let left = Token {
            kind: self.kind,
            txt: self.txt[..txt_byte].to_string(),
            val: self.val,
            original: self.original[..orig_byte].to_string(),
            offsets: self.offsets[..pos].iter().copied().collect(),
        };
        let right = Token {
            kind: self.kind,
            txt: self.txt[txt_byte..].to_string(),
            val: None,
            original: self.original[orig_byte..].to_string(),
            offsets: self.offsets[pos..].iter().map(|&o| o - cut as u32).collect(),
        };
        (left, right)
    }

    /// Replace the char span `[start, end)` of `txt` with `new`, which must
    /// not be longer than the span. Origin entries of removed chars are
    /// dropped; `original` is untouched.
    pub fn substitute(&mut self, start: usize, end: usize, new: &str) {
        let new_len = char_len(new);
        debug_assert!(new_len <= end - start);
        let sb = byte_at(&self.txt, start);
        let eb = byte_at(&self.txt, end);
        let mut txt = String::with_capacity(self.txt.len());
        txt.push_str(&self.txt[..sb]);
        txt.push_str(new);
        txt.push_str(&self.txt[eb..]);
        self.txt = txt;

        let mut offsets = OffsetVec::with_capacity(self.offsets.len());
        offsets.extend(self.offsets[..start + new_len].iter().copied());
        offsets.extend(self.offsets[end..].iter().copied());
        self.offsets = offsets;
    }

    /// Replace the char span `[start, end)` of `txt` with a possibly longer
    /// string. The inserted chars cannot be attributed to individual source
    /// chars, so they all map to the origin of the char following the span.
    pub fn substitute_longer(&mut self, start: usize, end: usize, new: &str) {
        let new_origin = if end < self.offsets.len() {
            self.offsets[end]
        } else {
            char_len(&self.original).saturating_sub(1) as u32
        };
        let sb = byte_at(&self.txt, start);
        let eb = byte_at(&self.txt, end);
        let mut txt = String::with_capacity(self.txt.len() + new.len());
        txt.push_str(&self.txt[..sb]);
        txt.push_str(new);
        txt.push_str(&self.txt[eb..]);
        self.txt = txt;

        let mut offsets = OffsetVec::with_capacity(self.offsets.len());
        offsets.extend(self.offsets[..start].iter().copied());
        offsets.extend(std::iter::repeat(new_origin).take(char_len(new)));
        offsets.extend(self.offsets[end..].iter().copied());
        self.offsets = offsets;
    }

    /// Replace every occurrence of `old` in `txt` with `new` (at most one
    /// char). Quadratic in the worst case, but tokens are short.
    pub fn substitute_all(&mut self, old: &str, new: &str) {
        debug_assert!(char_len(new) <= 1);
        let old_chars = char_len(old);
        loop {
            let found = {
                let chars: Vec<char> = self.txt.chars().collect();
                let olds: Vec<char> = old.chars().collect();
                (0..chars.len().saturating_sub(old_chars - 1))
                    .find(|&i| chars[i..i + old_chars] == olds[..])
            };
            match found {
                Some(i) => self.substitute(i, i + old_chars, new),
                None => break,
            }
        }
    }

    /// Append a marker char to `txt` that has no corresponding source char
    /// (e.g. the period appended when "5 mars" is read as "5. mars").
    pub fn push_marker_char(&mut self, c: char) {
        self.txt.push(c);
        self.offsets
            .push(char_len(&self.original).saturating_sub(1) as u32);
    }

    /// Concatenate `other` onto this token, producing a new token.
    ///
    /// `separator` is inserted between the surfaces (with an empty origin);
    /// the originals are joined directly. Kind and value come from `self`
    /// unless `metadata_from_other` is set.
    pub fn concatenate(self, other: Token, separator: &str, metadata_from_other: bool) -> Token {
        let (kind, val) = if metadata_from_other {
            (other.kind, other.val)
        } else {
            (self.kind, self.val)
        };
        let self_orig_chars = char_len(&self.original) as u32;

        let mut txt = String::with_capacity(self.txt.len() + separator.len() + other.txt.len());
        txt.push_str(&self.txt);
        txt.push_str(separator);
        txt.push_str(&other.txt);

        let mut original = self.original;
        original.push_str(&other.original);

        let mut offsets = self.offsets;
        if !other.offsets.is_empty() {
            offsets.extend(std::iter::repeat(self_orig_chars).take(char_len(separator)));
        }
        offsets.extend(other.offsets.iter().map(|&o| o + self_orig_chars));

        Token {
            kind,
            txt,
            val,
            original,
            offsets,
        }
    }

    // Converters used by the pipeline stages. Each takes the token by value,
    // reassigns kind and value and hands it back, preserving origin tracking.

    pub fn into_word(mut self, meanings: Option<Vec<WordMeaning>>) -> Token {
        self.kind = TokenKind::Word;
        self.val = meanings.map(TokenValue::Meanings);
        self
    }

    /// Convert to a punctuation token. The normalized symbol defaults to the
    /// surface text; the spacing class is derived from the normalized form.
    pub fn into_punct(mut self, normalized: Option<&str>) -> Token {
        let symbol = normalized.unwrap_or(&self.txt).to_string();
        let spacing = punct::spacing_of(&symbol);
        self.kind = TokenKind::Punctuation;
        self.val = Some(TokenValue::Punct { spacing, symbol });
        self
    }

    pub fn into_number(mut self, n: f64) -> Token {
        self.kind = TokenKind::Number;
        self.val = Some(TokenValue::Number(n));
        self
    }

    pub fn into_year(mut self, y: i32) -> Token {
        self.kind = TokenKind::Year;
        self.val = Some(TokenValue::Year(y));
        self
    }

    pub fn into_time(mut self, hour: u32, minute: u32, second: u32) -> Token {
        self.kind = TokenKind::Time;
        self.val = Some(TokenValue::Time {
            hour,
            minute,
            second,
        });
        self
    }

    pub fn into_date(mut self, kind: TokenKind, year: i32, month: u32, day: u32) -> Token {
        debug_assert!(matches!(
            kind,
            TokenKind::Date | TokenKind::DateAbs | TokenKind::DateRel
        ));
        self.kind = kind;
        self.val = Some(TokenValue::Date { year, month, day });
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn into_timestamp(
        mut self,
        kind: TokenKind,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Token {
        debug_assert!(matches!(
            kind,
            TokenKind::Timestamp | TokenKind::TimestampAbs | TokenKind::TimestampRel
        ));
        self.kind = kind;
        self.val = Some(TokenValue::Timestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
        });
        self
    }

    pub fn into_ordinal(mut self, n: i64) -> Token {
        self.kind = TokenKind::Ordinal;
        self.val = Some(TokenValue::Ordinal(n));
        self
    }

    pub fn into_percent(mut self, n: f64) -> Token {
        self.kind = TokenKind::Percent;
        self.val = Some(TokenValue::Percent(n));
        self
    }

    pub fn into_amount(mut self, value: f64, currency: &str) -> Token {
        self.kind = TokenKind::Amount;
        self.val = Some(TokenValue::Amount {
            value,
            currency: currency.to_string(),
        });
        self
    }

    pub fn into_currency(mut self, iso: &str) -> Token {
        self.kind = TokenKind::Currency;
        self.val = Some(TokenValue::Currency(iso.to_string()));
        self
    }

    pub fn into_measurement(mut self, unit: &str, value: f64) -> Token {
        self.kind = TokenKind::Measurement;
        self.val = Some(TokenValue::Measurement {
            unit: unit.to_string(),
            value,
        });
        self
    }

    pub fn into_telno(mut self, number: String, country_code: &str) -> Token {
        self.kind = TokenKind::Telno;
        self.val = Some(TokenValue::Telno {
            number,
            country_code: country_code.to_string(),
        });
        self
    }

    pub fn into_numletter(mut self, number: i64, letter: char) -> Token {
        self.kind = TokenKind::NumWithLetter;
        self.val = Some(TokenValue::NumberWithLetter { number, letter });
        self
    }

    pub fn into_username(mut self, handle: String) -> Token {
        self.kind = TokenKind::Username;
        self.val = Some(TokenValue::Username(handle));
        self
    }

    pub fn into_ssn(mut self) -> Token {
        self.kind = TokenKind::Ssn;
        self.val = Some(TokenValue::Ssn(self.txt.clone()));
        self
    }

    pub fn into_kind(mut self, kind: TokenKind) -> Token {
        self.kind = kind;
        self.val = None;
        self
    }
}

/// The text of a token after punctuation normalization.
pub fn normalized_text(token: &Token) -> &str {
    match token.punctuation() {
        Some(symbol) => symbol,
        None => &token.txt,
    }
}
