//! Stage 3: the abbreviation and punctuation refiner.
//!
//! Works on a one-token lookahead (with a bounded peek beyond it) and
//! rewrites local patterns: known abbreviations swallow their trailing
//! period, numbers and Roman numerals become ordinals when a period
//! follows in an ordinal-admissible context, dot-dropped misspellings are
//! corrected, and composite-word continuations ("fjölskyldu- og
//! húsdýragarðurinn") collapse into a single word.

use std::collections::VecDeque;

use crate::abbrev::Abbreviations;
use crate::lang::{months, numbers, punct};
use crate::pipeline::could_be_end_of_sentence;
use crate::token::{Token, TokenKind, TokenStream, TokenValue};

pub struct Particles<I: Iterator<Item = Token>> {
    stream: TokenStream<I>,
    cur: Option<Token>,
    out: VecDeque<Token>,
    abbr: &'static Abbreviations,
    started: bool,
    done: bool,
}

impl<I: Iterator<Item = Token>> Particles<I> {
    pub fn new(input: I, abbr: &'static Abbreviations) -> Self {
        Particles {
            stream: TokenStream::new(input),
            cur: None,
            out: VecDeque::new(),
            abbr,
            started: false,
            done: false,
        }
    }

    fn pull(&mut self) -> Token {
        self.stream.next().unwrap_or_else(Token::end_sentinel)
    }

    /// True if the token surface is an abbreviation once a period is
    /// appended to it.
    fn is_abbrev_with_period(&self, txt: &str) -> bool {
        if txt.contains('.') {
            // An interior period means this must be an abbreviation
            // ("t.d" but not "mbl.is", which never reaches this point)
            return true;
        }
        if self.abbr.is_single(txt) {
            return true;
        }
        if self.abbr.is_single(&txt.to_lowercase()) {
            // Upper or mixed case is accepted unless the exact form is a
            // different abbreviation without a period ("DR" vs "dr.")
            return !self.abbr.contains(txt);
        }
        false
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

        // A DATEREL of the form "25.9." may absorb a following period when
        // the sentence clearly goes on ("Ég fæddist 25.9. í Svarfaðardal")
        if token.kind == TokenKind::DateRel && token.txt.contains('.') && next_token.is_punct(".")
        {
            let ends = match self.stream.peek(0) {
                Some(t) => could_be_end_of_sentence(t, false, false),
                None => false,
            };
            if !ends {
                if let Some(TokenValue::Date { year, month, day }) = token.val.clone() {
                    token = token
                        .concatenate(next_token, "", false)
                        .into_date(TokenKind::DateRel, year, month, day);
                    next_token = self.pull();
                }
            }
        }

        // Abbreviation followed by its period
        if next_token.is_punct(".")
            && token.kind == TokenKind::Word
            && !token.txt.ends_with('.')
            && self.is_abbrev_with_period(&token.txt)
        {
            let follow = self.pull();
            let abbrev = format!("{}.", token.txt);
            let excl_person = self.abbr.is_name_finisher(&abbrev);
            let multiplier = crate::lang::currency::number_multiplier(&abbrev).is_some();
            let finish = could_be_end_of_sentence(&follow, excl_person, multiplier);
            if finish && self.abbr.is_not_finisher(&abbrev) {
                // A form that is also an ordinary word keeps its period
                // separate at the end of a sentence ("dags.", "mín.")
                if let Some(meanings) = self.abbr.meaning(&token.txt) {
                    token = token.into_word(Some(meanings));
                }
                self.out.push_back(token);
                token = next_token;
            } else {
                // The period stays attached; whether the sentence ends
                // here is decided by the segmenter from the lookahead
                let meanings = self.abbr.lookup(&abbrev);
                token = token.concatenate(next_token, "", false).into_word(meanings);
            }
            next_token = follow;
        }

        // Ordinals: a whole number or Roman numeral followed by a period,
        // unless the next token clearly starts a new sentence
        if next_token.is_punct(".") {
            let is_number_ordinal =
                token.kind == TokenKind::Number && !token.txt.contains(',');
            let is_roman_ordinal = token.kind == TokenKind::Word
                && numbers::is_roman_numeral(&token.txt)
                && !self.abbr.contains(&token.txt);
            if is_number_ordinal || is_roman_ordinal {
                let promote = match self.stream.peek(0) {
                    Some(t) => {
                        !(t.kind.is_end()
                            || matches!(t.punctuation(), Some("„") | Some("\""))
                            || (t.kind == TokenKind::Word
                                && t.txt.chars().next().is_some_and(char::is_uppercase)
                                && months::month_for(&t.txt, true).is_none()))
                    }
                    None => false,
                };
                if promote {
                    let num = if token.kind == TokenKind::Number {
                        token.integer().unwrap_or(0)
                    } else {
                        numbers::roman_to_int(&token.txt)
                    };
                    token = token.concatenate(next_token, "", false).into_ordinal(num);
                    next_token = self.pull();
                }
            }
        }

        // Straight abbreviations and dot-dropped misspellings
        if token.kind == TokenKind::Word && token.val.is_none() {
            if !self.abbr.contains(&token.txt) && self.abbr.is_wrong_single(&token.txt) {
                // "osfrv" and friends: correct the surface to the
                // canonical form, keeping the original text intact
                if let Some(corrections) = self.abbr.corrections(&token.txt) {
                    if let Some(canonical) = corrections.first().cloned() {
                        let len = token.len_chars();
                        token.substitute_longer(0, len, &canonical);
                        token = token.into_word(self.abbr.lookup(&canonical));
                    }
                }
            } else if self.abbr.has_meaning(&token.txt) {
                let meanings = self.abbr.meaning(&token.txt);
                token = token.into_word(meanings);
            }
        }

        // Composite-word continuations: "stjórnskipunar- og
        // eftirlitsnefnd", "dómsmála-, viðskipta- og iðnaðarráðherra"
        let mut queue: Vec<Token> = Vec::new();
        while token.kind == TokenKind::Word
            && next_token.punctuation() == Some(punct::COMPOSITE_HYPHEN)
        {
            queue.push(token);
            queue.push(next_token.into_punct(Some("-")));
            let mut follow = self.pull();
            if follow.is_punct(",") {
                queue.push(follow);
                follow = self.pull();
            }
            token = follow;
            next_token = self.pull();
        }
        if !queue.is_empty() {
            let conjunction =
                token.kind == TokenKind::Word && (token.txt == "og" || token.txt == "eða");
            if conjunction && next_token.kind == TokenKind::Word {
                let mut acc = queue.remove(0);
                for t in queue.drain(..) {
                    acc = acc.concatenate(t, " ", true);
                }
                acc = acc.concatenate(token, " ", true);
                acc = acc.concatenate(next_token, " ", true);
                acc.substitute_all(" -", "-");
                acc.substitute_all(" ,", ",");
                token = acc;
                next_token = self.pull();
            } else {
                // The prediction failed; release the queue unchanged
                self.out.extend(queue);
            }
        }

        self.out.push_back(token);
        self.cur = Some(next_token);
    }
}

impl<I: Iterator<Item = Token>> Iterator for Particles<I> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbrev::abbreviations;
    use crate::options::TokenizerOptions;
    use crate::pipeline::classify::Classifier;
    use crate::pipeline::raw::RawTokens;

    fn particles(text: &str) -> Vec<Token> {
        let options = TokenizerOptions::default();
        let abbr = abbreviations().unwrap();
        let raw = RawTokens::new(vec![text.to_string()].into_iter(), &options);
        let classified = Classifier::new(raw, options, abbr);
        Particles::new(classified, abbr).collect()
    }

    #[test]
    fn abbreviation_swallows_period_mid_sentence() {
        let toks = particles("t.d. á morgun");
        assert_eq!(toks[0].txt, "t.d.");
        assert_eq!(toks[0].kind, TokenKind::Word);
        let m = toks[0].meanings();
        assert_eq!(m[0].stem, "til dæmis");
        assert_eq!(toks[1].txt, "á");
    }

    #[test]
    fn finisher_keeps_period_attached_at_sentence_end() {
        let toks = particles("og o.s.frv. Hann kom");
        let osfrv = toks.iter().find(|t| t.txt.starts_with("o.s")).unwrap();
        assert_eq!(osfrv.txt, "o.s.frv.");
        assert!(!osfrv.meanings().is_empty());
        // No separate period token between the abbreviation and "Hann"
        let ix = toks.iter().position(|t| t.txt == "o.s.frv.").unwrap();
        assert_eq!(toks[ix + 1].txt, "Hann");
    }

    #[test]
    fn not_finisher_releases_period_at_sentence_end() {
        // "dags." is also an ordinary word form, so before a capitalized
        // word its period stays a separate token
        let toks = particles("þetta var dags. Hann kom");
        let ix = toks.iter().position(|t| t.txt == "dags").unwrap();
        assert_eq!(toks[ix + 1].txt, ".");
        // Mid-sentence the period is swallowed as usual
        let toks = particles("bréf dags. í gær");
        assert!(toks.iter().any(|t| t.txt == "dags."));
    }

    #[test]
    fn ordinal_promotion_before_lowercase() {
        let toks = particles("3. janúar");
        assert_eq!(toks[0].kind, TokenKind::Ordinal);
        assert_eq!(toks[0].txt, "3.");
        assert_eq!(toks[0].val, Some(TokenValue::Ordinal(3)));
    }

    #[test]
    fn ordinal_not_promoted_before_capitalized_word() {
        let toks = particles("á blaðsíðu 344. Hann kom");
        let ix = toks.iter().position(|t| t.txt == "344").unwrap();
        assert_eq!(toks[ix].kind, TokenKind::Number);
        assert_eq!(toks[ix + 1].txt, ".");
    }

    #[test]
    fn ordinal_promoted_before_capitalized_month() {
        let toks = particles("13. Ágúst");
        assert_eq!(toks[0].kind, TokenKind::Ordinal);
    }

    #[test]
    fn roman_ordinals() {
        let toks = particles("XVII. kafla");
        assert_eq!(toks[0].kind, TokenKind::Ordinal);
        assert_eq!(toks[0].txt, "XVII.");
        assert_eq!(toks[0].val, Some(TokenValue::Ordinal(17)));
    }

    #[test]
    fn wrong_single_is_corrected() {
        let toks = particles("osfrv og fleira");
        assert_eq!(toks[0].txt, "o.s.frv.");
        assert_eq!(toks[0].original, "osfrv");
        assert!(!toks[0].meanings().is_empty());
    }

    #[test]
    fn composite_word_continuation() {
        let toks = particles("fjölskyldu- og húsdýragarðurinn");
        assert_eq!(toks[0].kind, TokenKind::Word);
        assert_eq!(toks[0].txt, "fjölskyldu- og húsdýragarðurinn");
        assert_eq!(toks[0].original, "fjölskyldu- og húsdýragarðurinn");
    }

    #[test]
    fn multi_prefix_composites() {
        let toks = particles("dómsmála-, viðskipta- og iðnaðarráðherra");
        assert_eq!(toks[0].txt, "dómsmála-, viðskipta- og iðnaðarráðherra");
        assert_eq!(toks[0].kind, TokenKind::Word);
    }

    #[test]
    fn composite_backoff() {
        let toks = particles("ferðamála- ráðherra");
        let texts: Vec<&str> = toks.iter().map(|t| t.txt.as_str()).collect();
        assert_eq!(texts, vec!["ferðamála", "-", "ráðherra", ""]);
        let toks = particles("ferðamála- og 500");
        let texts: Vec<&str> = toks.iter().map(|t| t.txt.as_str()).collect();
        assert_eq!(texts, vec!["ferðamála", "-", "og", "500", ""]);
    }

    #[test]
    fn straight_abbreviation_gets_meanings() {
        let toks = particles("um IBM á Íslandi");
        let ibm = toks.iter().find(|t| t.txt == "IBM").unwrap();
        assert_eq!(ibm.meanings()[0].stem, "International Business Machines");
    }
}
