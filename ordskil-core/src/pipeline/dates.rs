//! Stage 5: date and time recognition.
//!
//! Two passes. The first builds DATE tokens from ordinals and month names,
//! attaches years, year words and era markers, merges country codes onto
//! telephone numbers, and folds tight year ranges ("1914-1918") into a
//! single YEAR token. The second resolves DATE/TIMESTAMP into their
//! absolute or relative forms, reads bare month names as relative dates,
//! and combines dates with times into timestamps.

use std::collections::VecDeque;

use crate::lang::{clock, months, numbers};
use crate::options::TokenizerOptions;
use crate::token::{Token, TokenKind, TokenStream, TokenValue, WordMeaning};

fn date_parts(token: &Token) -> Option<(i32, u32, u32)> {
    match &token.val {
        Some(TokenValue::Date { year, month, day }) => Some((*year, *month, *day)),
        _ => None,
    }
}

fn time_parts(token: &Token) -> Option<(u32, u32, u32)> {
    match &token.val {
        Some(TokenValue::Time {
            hour,
            minute,
            second,
        }) => Some((*hour, *minute, *second)),
        _ => None,
    }
}

pub struct DatePhrases<I: Iterator<Item = Token>> {
    stream: TokenStream<I>,
    cur: Option<Token>,
    out: VecDeque<Token>,
    normalize: bool,
    started: bool,
    done: bool,
}

impl<I: Iterator<Item = Token>> DatePhrases<I> {
    pub fn new(input: I, options: &TokenizerOptions) -> Self {
        DatePhrases {
            stream: TokenStream::new(input),
            cur: None,
            out: VecDeque::new(),
            normalize: options.normalize,
            started: false,
            done: false,
        }
    }

    fn pull(&mut self) -> Token {
        self.stream.next().unwrap_or_else(Token::end_sentinel)
    }

    fn advance(&mut self) {
        if !self.started {
            self.started = true;
            self.cur = self.stream.next();
        }
        let Some(mut token) = self.cur.take() else {
            self.done = true;
            return;
        };
        let Some(mut next_token) = self.stream.next() else {
            self.out.push_back(token);
            self.done = true;
            return;
        };

        // A minus-signed number after a year is really a year range with a
        // missing space: "1914 -1918"
        if token.kind == TokenKind::Year
            && next_token.kind == TokenKind::Number
            && next_token.txt.starts_with('-')
            && next_token.txt[1..].chars().all(|c| c.is_ascii_digit())
        {
            let y = -next_token.number().unwrap_or(0.0);
            if (1776.0..=2100.0).contains(&y) {
                self.out.push_back(token);
                let (dash, year2) = next_token.split(1);
                token = dash.into_punct(Some("-"));
                next_token = year2.into_year(y as i32);
            }
        }

        // Tight year range "1914-1918" collapses into one YEAR token; the
        // hyphen is rewritten to an en dash when normalizing
        if token.kind == TokenKind::Year
            && matches!(next_token.punctuation(), Some("-") | Some("\u{2013}"))
            && !next_token.original.starts_with(char::is_whitespace)
        {
            let peeked_year = self.stream.peek(0).is_some_and(|t| {
                t.kind == TokenKind::Year && !t.original.starts_with(char::is_whitespace)
            });
            if peeked_year {
                let year = match &token.val {
                    Some(TokenValue::Year(y)) => *y,
                    _ => 0,
                };
                let second = self.pull();
                let mut merged = token
                    .concatenate(next_token, "", false)
                    .concatenate(second, "", false);
                if self.normalize {
                    let chars: Vec<char> = merged.txt.chars().collect();
                    if let Some(i) = chars.iter().position(|&c| c == '-') {
                        merged.substitute(i, i + 1, "\u{2013}");
                    }
                }
                token = merged.into_year(year);
                next_token = self.pull();
            }
        }

        // "árið" and its inflections assimilate into a following year
        if token.kind == TokenKind::Word
            && clock::is_year_word(&token.txt.to_lowercase())
            && matches!(next_token.kind, TokenKind::Year | TokenKind::Number)
        {
            let y = next_token.integer().unwrap_or(0) as i32;
            token = token.concatenate(next_token, " ", false).into_year(y);
            next_token = self.pull();
        }

        // Year or number followed by an era marker
        if matches!(token.kind, TokenKind::Year | TokenKind::Number) {
            let signed = if clock::is_bce(&next_token.txt) {
                Some(-(token.integer().unwrap_or(0) as i32))
            } else if clock::is_ce(&next_token.txt) {
                Some(token.integer().unwrap_or(0) as i32)
            } else {
                None
            };
            if let Some(y) = signed {
                token = token.concatenate(next_token, " ", false).into_year(y);
                next_token = self.pull();
            }
        }

        // Ordinal or number followed by a month name
        if matches!(token.kind, TokenKind::Ordinal | TokenKind::Number)
            && next_token.kind == TokenKind::Word
        {
            if next_token.txt == "gr." {
                // "4. gr." is always "grein"; pin the expansion down
                let meanings = vec![WordMeaning::abbreviation("grein", "kvk", "skst", "gr.")];
                next_token = next_token.into_word(Some(meanings));
            }
            if let Some(month) = months::month_for(&next_token.txt, true) {
                let day = token.ordinal_value().unwrap_or(0);
                if token.kind == TokenKind::Number && !token.txt.contains('.') {
                    // "5 mars" reads as "5. mars"
                    token.push_marker_char('.');
                }
                token = token
                    .concatenate(next_token, " ", false)
                    .into_date(TokenKind::Date, 0, month, day as u32);
                next_token = self.pull();
            }
        }

        // Date without a year followed by one
        if token.kind == TokenKind::Date && next_token.kind == TokenKind::Year {
            if let Some((0, m, d)) = date_parts(&token) {
                let y = next_token.integer().unwrap_or(0) as i32;
                token = token
                    .concatenate(next_token, " ", false)
                    .into_date(TokenKind::Date, y, m, d);
                next_token = self.pull();
            }
        }

        // Date followed by a time
        if token.kind == TokenKind::Date && next_token.kind == TokenKind::Time {
            if let (Some((y, mo, d)), Some((h, m, s))) =
                (date_parts(&token), time_parts(&next_token))
            {
                token = token
                    .concatenate(next_token, " ", false)
                    .into_timestamp(TokenKind::Timestamp, y, mo, d, h, m, s);
                next_token = self.pull();
            }
        }

        // Country code preceding a telephone number
        if token.kind == TokenKind::Number
            && next_token.kind == TokenKind::Telno
            && numbers::is_country_code(&token.txt)
        {
            if let Some(TokenValue::Telno { number, .. }) = next_token.val.clone() {
                let cc = token.txt.clone();
                token = token
                    .concatenate(next_token, " ", false)
                    .into_telno(number, &cc);
                next_token = self.pull();
            }
        }

        self.out.push_back(token);
        self.cur = Some(next_token);
    }
}

impl<I: Iterator<Item = Token>> Iterator for DatePhrases<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(t) = self.out.pop_front() {
                return Some(t);
            }
            if self.done {
                return None;
            }
            self.advance();
        }
    }
}

pub struct DateResolver<I: Iterator<Item = Token>> {
    stream: TokenStream<I>,
    cur: Option<Token>,
    out: VecDeque<Token>,
    started: bool,
    done: bool,
}

impl<I: Iterator<Item = Token>> DateResolver<I> {
    pub fn new(input: I) -> Self {
        DateResolver {
            stream: TokenStream::new(input),
            cur: None,
            out: VecDeque::new(),
            started: false,
            done: false,
        }
    }

    fn pull(&mut self) -> Token {
        self.stream.next().unwrap_or_else(Token::end_sentinel)
    }

    fn advance(&mut self) {
        if !self.started {
            self.started = true;
            self.cur = self.stream.next();
        }
        let Some(mut token) = self.cur.take() else {
            self.done = true;
            return;
        };
        let Some(mut next_token) = self.stream.next() else {
            self.out.push_back(resolve(token));
            self.done = true;
            return;
        };

        // Ordinal or number followed by a month name (late arrivals)
        if matches!(token.kind, TokenKind::Ordinal | TokenKind::Number)
            && next_token.kind == TokenKind::Word
        {
            if let Some(month) = months::month_for(&next_token.txt, true) {
                let day = token.ordinal_value().unwrap_or(0);
                token = token
                    .concatenate(next_token, " ", false)
                    .into_date(TokenKind::Date, 0, month, day as u32);
                next_token = self.pull();
            }
        }

        // Date without a year followed by a plausible year number
        if token.kind == TokenKind::Date
            && matches!(next_token.kind, TokenKind::Number | TokenKind::Year)
        {
            if let Some((0, m, d)) = date_parts(&token) {
                let year = next_token.integer().unwrap_or(0) as i32;
                let year = if next_token.kind == TokenKind::Number && !(1776..=2100).contains(&year)
                {
                    0
                } else {
                    year
                };
                if year != 0 {
                    token = token
                        .concatenate(next_token, " ", false)
                        .into_date(TokenKind::Date, year, m, d);
                    next_token = self.pull();
                }
            }
        }

        // Month name followed by a year: "nóvember 1918"
        if token.kind == TokenKind::Word
            && matches!(next_token.kind, TokenKind::Number | TokenKind::Year)
        {
            if let Some(month) = months::month_for(&token.txt, false) {
                let year = next_token.integer().unwrap_or(0) as i32;
                let year = if next_token.kind == TokenKind::Number && !(1776..=2100).contains(&year)
                {
                    0
                } else {
                    year
                };
                if year != 0 {
                    token = token
                        .concatenate(next_token, " ", false)
                        .into_date(TokenKind::Date, year, month, 0);
                    next_token = self.pull();
                }
            }
        }

        // A bare, unambiguous month name is a relative date
        if token.kind == TokenKind::Word && !months::is_ambiguous_month(&token.txt) {
            if let Some(month) = months::month_for(&token.txt, false) {
                token = token.into_date(TokenKind::DateRel, 0, month, 0);
            }
        }

        token = resolve(token);

        // Era markers swallowed after a fully resolved date
        if token.kind == TokenKind::DateAbs && clock::is_ce_bce(&next_token.txt) {
            if let Some((y, m, d)) = date_parts(&token) {
                let y = if clock::is_bce(&next_token.txt) { -y } else { y };
                token = token
                    .concatenate(next_token, " ", false)
                    .into_date(TokenKind::DateAbs, y, m, d);
                next_token = self.pull();
            }
        }

        // Date plus time forms a timestamp, absolute or relative
        if matches!(token.kind, TokenKind::DateAbs | TokenKind::DateRel)
            && next_token.kind == TokenKind::Time
        {
            if let (Some((y, mo, d)), Some((h, m, s))) =
                (date_parts(&token), time_parts(&next_token))
            {
                let kind = if token.kind == TokenKind::DateAbs {
                    TokenKind::TimestampAbs
                } else {
                    TokenKind::TimestampRel
                };
                token = token
                    .concatenate(next_token, " ", false)
                    .into_timestamp(kind, y, mo, d, h, m, s);
                next_token = self.pull();
            }
        }

        self.out.push_back(token);
        self.cur = Some(next_token);
    }
}

/// Resolve generic DATE and TIMESTAMP kinds into absolute or relative ones.
fn resolve(token: Token) -> Token {
    match token.kind {
        TokenKind::Date => {
            if let Some((y, m, d)) = date_parts(&token) {
                let kind = if y != 0 && m != 0 && d != 0 {
                    TokenKind::DateAbs
                } else {
                    TokenKind::DateRel
                };
                token.into_date(kind, y, m, d)
            } else {
                token
            }
        }
        TokenKind::Timestamp => {
            if let Some(TokenValue::Timestamp {
                year,
                month,
                day,
                hour,
                minute,
                second,
            }) = token.val.clone()
            {
                let kind = if year != 0 && month != 0 && day != 0 {
                    TokenKind::TimestampAbs
                } else {
                    TokenKind::TimestampRel
                };
                token.into_timestamp(kind, year, month, day, hour, minute, second)
            } else {
                token
            }
        }
        _ => token,
    }
}

impl<I: Iterator<Item = Token>> Iterator for DateResolver<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(t) = self.out.pop_front() {
                return Some(t);
            }
            if self.done {
                return None;
            }
            self.advance();
        }
    }
}
