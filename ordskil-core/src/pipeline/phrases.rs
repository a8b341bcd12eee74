//! Stages 4 and 6: the phrase coalescers.
//!
//! The first coalescer merges adjacencies whose parts were classified in
//! isolation: currency symbols with numbers, clock words with times,
//! telephone-number pairs, numbers with measurement units. The second
//! runs after date recognition and handles amounts written with currency
//! words and magnitude abbreviations, plus optional percent-word merges.

use std::collections::VecDeque;

use crate::lang::{clock, currency, numbers, units};
use crate::options::TokenizerOptions;
use crate::pipeline::could_be_end_of_sentence;
use crate::token::{Token, TokenKind, TokenStream, TokenValue};

pub struct FirstPhrases<I: Iterator<Item = Token>> {
    stream: TokenStream<I>,
    cur: Option<Token>,
    out: VecDeque<Token>,
    convert_measurements: bool,
    started: bool,
    done: bool,
}

impl<I: Iterator<Item = Token>> FirstPhrases<I> {
    pub fn new(input: I, options: &TokenizerOptions) -> Self {
        FirstPhrases {
            stream: TokenStream::new(input),
            cur: None,
            out: VecDeque::new(),
            convert_measurements: options.convert_measurements,
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

        // Currency symbol followed by a number: "€ 100"
        if token.kind == TokenKind::Punctuation
            && matches!(next_token.kind, TokenKind::Number | TokenKind::Year)
        {
            if let Some(iso) = currency::symbol_iso(&token.txt) {
                let value = next_token.number().unwrap_or(0.0);
                token = token.concatenate(next_token, "", false).into_amount(value, iso);
                next_token = self.pull();
            }
        }

        // Clock words followed by a time, a number or a spelled-out hour
        if token.kind == TokenKind::Word && clock::is_clock_word(&token.txt.to_lowercase()) {
            match next_token.kind {
                TokenKind::Time => {
                    if let Some(TokenValue::Time {
                        hour,
                        minute,
                        second,
                    }) = next_token.val.clone()
                    {
                        token = token
                            .concatenate(next_token, " ", false)
                            .into_time(hour, minute, second);
                        next_token = self.pull();
                    }
                }
                TokenKind::Number => {
                    // "kl. 13,40" came through the number locale; read the
                    // integer part as hours and the decimals as minutes
                    let n = next_token.number().unwrap_or(0.0);
                    let h = n.trunc() as u32;
                    let m = ((n - n.trunc()) * 100.0).round() as u32;
                    token = token.concatenate(next_token, " ", false).into_time(h, m, 0);
                    next_token = self.pull();
                }
                TokenKind::Word => {
                    let lower = next_token.txt.to_lowercase();
                    if let Some((h, m, s)) = clock::clock_number(&lower) {
                        token = token.concatenate(next_token, " ", false).into_time(h, m, s);
                        next_token = self.pull();
                    } else if lower == "hálf" {
                        // "klukkan hálf átta"
                        let time_token = self.pull();
                        let time_txt = time_token.txt.to_lowercase();
                        let merged = if !time_txt.starts_with("hálf") {
                            clock::clock_number(&format!("hálf{time_txt}"))
                        } else {
                            None
                        };
                        match merged {
                            Some((h, m, s)) => {
                                token = token
                                    .concatenate(next_token, " ", false)
                                    .concatenate(time_token, " ", false)
                                    .into_time(h, m, s);
                                next_token = self.pull();
                            }
                            None => {
                                // Not a time after all; retreat
                                self.out.push_back(token);
                                token = next_token;
                                next_token = time_token;
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        // "hálftólf" is only ever a time
        if clock::is_clock_half(&token.txt) {
            if let Some((h, m, s)) = clock::clock_number(&token.txt) {
                token = token.into_time(h, m, s);
            }
        }

        // Two numbers forming a telephone number: "699 2422"
        if token.kind == TokenKind::Number
            && matches!(next_token.kind, TokenKind::Number | TokenKind::Year)
            && token.txt.len() == 3
            && token.txt.chars().all(|c| c.is_ascii_digit())
            && token.txt.chars().next().is_some_and(numbers::is_telno_prefix)
            && next_token.txt.len() == 4
            && next_token.txt.chars().all(|c| c.is_ascii_digit())
        {
            let telno = format!("{}-{}", token.txt, next_token.txt);
            token = token
                .concatenate(next_token, " ", false)
                .into_telno(telno, "354");
            next_token = self.pull();
        }

        // Number followed by a percent or promille sign token
        if let Some(sign) = next_token.punctuation() {
            if (sign == "%" || sign == "‰") && token.kind == TokenKind::Number {
                let factor = if sign == "%" { 1.0 } else { 0.1 };
                let value = token.number().unwrap_or(0.0) * factor;
                token = token.concatenate(next_token, "", false).into_percent(value);
                next_token = self.pull();
            }
        }

        // Number or year followed by a measurement unit word
        if matches!(token.kind, TokenKind::Number | TokenKind::Year)
            && units::is_unit(&next_token.txt)
        {
            let raw_value = token.number().unwrap_or(0.0);
            let orig_unit = next_token.txt.clone();
            if let Some((base, converted)) = units::convert(&orig_unit, raw_value) {
                if base == "%" || base == "‰" {
                    token = token
                        .concatenate(next_token, " ", false)
                        .into_percent(converted);
                } else {
                    token = token
                        .concatenate(next_token, " ", false)
                        .into_measurement(base, converted);
                }
                next_token = self.pull();

                // "km" may continue into "km/klst"
                if orig_unit == "km"
                    && next_token.txt == "/"
                    && self.stream.peek_txt(0) == Some("klst")
                {
                    let slash = next_token;
                    let klst = self.pull();
                    if let Some((base, converted)) = units::convert("km/klst", raw_value) {
                        token = token
                            .concatenate(slash, "", false)
                            .concatenate(klst, "", false)
                            .into_measurement(base, converted);
                        next_token = self.pull();
                    } else {
                        next_token = klst;
                    }
                }
            }
        }

        // Degree measurement followed by a temperature-scale letter:
        // "200° C"
        if token.kind == TokenKind::Measurement
            && next_token.kind == TokenKind::Word
            && matches!(next_token.txt.as_str(), "C" | "F" | "K")
        {
            let raw = match &token.val {
                Some(TokenValue::Measurement { unit, value }) if unit == "°" => Some(*value),
                _ => None,
            };
            if let Some(degrees) = raw {
                let scale = format!("°{}", next_token.txt);
                if let Some((base, converted)) = units::convert(&scale, degrees) {
                    if self.convert_measurements {
                        // Move the degree sign over to the unit: "200 °C"
                        let len = token.len_chars();
                        token.substitute(len - 1, len, "");
                        if token.txt.ends_with(' ') {
                            let len = token.len_chars();
                            token.substitute(len - 1, len, "");
                        }
                        token = token
                            .concatenate(next_token, " °", false)
                            .into_measurement(base, converted);
                    } else {
                        token = token
                            .concatenate(next_token, " ", false)
                            .into_measurement(base, converted);
                    }
                    next_token = self.pull();
                }
            }
        }

        // A measurement ending in a letter may absorb an erroneous trailing
        // period when the sentence goes on: "74 cm. lax"
        if token.kind == TokenKind::Measurement
            && next_token.is_punct(".")
            && token.txt.chars().last().is_some_and(char::is_alphabetic)
        {
            let ends = match self.stream.peek(0) {
                Some(t) => could_be_end_of_sentence(t, false, false),
                None => false,
            };
            if !ends {
                // Kind and value carry over from the measurement
                token = token.concatenate(next_token, "", false);
                next_token = self.pull();
            }
        }

        // Currency code with a period: "USD. 44"
        if currency::is_currency_abbrev(&token.txt) && next_token.is_punct(".") {
            let ends = match self.stream.peek(0) {
                Some(t) => could_be_end_of_sentence(t, false, false),
                None => false,
            };
            if !ends {
                let iso = token.txt.clone();
                token = token.concatenate(next_token, "", false).into_currency(&iso);
                next_token = self.pull();
            }
        }

        // Number followed by a currency symbol: "19 $"
        if token.kind == TokenKind::Number && next_token.kind == TokenKind::Punctuation {
            if let Some(iso) = currency::symbol_iso(&next_token.txt) {
                let value = token.number().unwrap_or(0.0);
                token = token
                    .concatenate(next_token, " ", false)
                    .into_amount(value, iso);
                next_token = self.pull();
            }
        }

        self.out.push_back(token);
        self.cur = Some(next_token);
    }
}

impl<I: Iterator<Item = Token>> Iterator for FirstPhrases<I> {
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

pub struct SecondPhrases<I: Iterator<Item = Token>> {
    stream: TokenStream<I>,
    cur: Option<Token>,
    out: VecDeque<Token>,
    coalesce_percent: bool,
    started: bool,
    done: bool,
}

impl<I: Iterator<Item = Token>> SecondPhrases<I> {
    pub fn new(input: I, options: &TokenizerOptions) -> Self {
        SecondPhrases {
            stream: TokenStream::new(input),
            cur: None,
            out: VecDeque::new(),
            coalesce_percent: options.coalesce_percent,
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

        // Currency word or code preceding the number: "kr. 9.900", "USD 50"
        if next_token.kind == TokenKind::Number
            && (currency::is_isk_preceding(&token.txt)
                || currency::is_currency_abbrev(&token.txt))
        {
            let iso = if currency::is_isk_preceding(&token.txt) {
                "ISK".to_string()
            } else {
                token.txt.clone()
            };
            let value = next_token.number().unwrap_or(0.0);
            token = token
                .concatenate(next_token, " ", false)
                .into_amount(value, &iso);
            next_token = self.pull();
        } else if token.kind == TokenKind::Number && next_token.kind == TokenKind::Word {
            // Magnitude abbreviation scales the number: "750 þús."
            if let Some(mult) = currency::number_multiplier(&next_token.txt) {
                let value = token.number().unwrap_or(0.0) * mult;
                token = token.concatenate(next_token, " ", false).into_number(value);
                next_token = self.pull();
            }
        }

        // Number followed by an ISK amount abbreviation, a currency code,
        // or (optionally) a percentage word
        if token.kind == TokenKind::Number && next_token.kind == TokenKind::Word {
            if let Some(mult) = currency::amount_multiplier(&next_token.txt) {
                let value = token.number().unwrap_or(0.0) * mult;
                token = token
                    .concatenate(next_token, " ", false)
                    .into_amount(value, "ISK");
                next_token = self.pull();
            } else if currency::is_currency_abbrev(&next_token.txt) {
                let iso = next_token.txt.clone();
                let value = token.number().unwrap_or(0.0);
                token = token
                    .concatenate(next_token, " ", false)
                    .into_amount(value, &iso);
                next_token = self.pull();
            } else if self.coalesce_percent
                && currency::is_percentage_word(&next_token.txt.to_lowercase())
            {
                let value = token.number().unwrap_or(0.0);
                token = token
                    .concatenate(next_token, " ", false)
                    .into_percent(value);
                next_token = self.pull();
            }
        }

        self.out.push_back(token);
        self.cur = Some(next_token);
    }
}

impl<I: Iterator<Item = Token>> Iterator for SecondPhrases<I> {
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
