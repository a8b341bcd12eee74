//! Stage 2: the digit/particle classifier.
//!
//! Consumes raw tokens and resolves each into one or more typed tokens:
//! pure words take a fast path; everything else runs through a loop that
//! peels punctuation, recognizes e-mails, URLs, hashtags, usernames,
//! domains, numbers (via [`parse_digits`]), molecules and words, and falls
//! back to UNKNOWN one char at a time so that no input is ever dropped.

use std::collections::VecDeque;

use crate::abbrev::Abbreviations;
use crate::lang::{currency, elements, numbers, punct, unicode, units, web};
use crate::options::{KludgyOrdinals, TokenizerOptions};
use crate::pipeline::digits::parse_digits;
use crate::token::{Token, TokenKind};

pub struct Classifier<I: Iterator<Item = Token>> {
    input: I,
    out: VecDeque<Token>,
    options: TokenizerOptions,
    abbr: &'static Abbreviations,
    done: bool,
}

impl<I: Iterator<Item = Token>> Classifier<I> {
    pub fn new(input: I, options: TokenizerOptions, abbr: &'static Abbreviations) -> Self {
        Classifier {
            input,
            out: VecDeque::new(),
            options,
            abbr,
            done: false,
        }
    }

    fn classify(&mut self, rt: Token) {
        if rt.kind.is_meta() {
            self.out.push_back(rt);
            return;
        }

        // Fast path: a purely alphabetic surface, or a bare unit symbol, is
        // a word
        if rt.txt.chars().all(char::is_alphabetic) && !rt.txt.is_empty()
            || units::is_unit(&rt.txt)
        {
            self.out.push_back(rt.into_word(None));
            return;
        }
        if !self.options.replace_composite_glyphs && unicode::is_word_with_composites(&rt.txt) {
            self.out.push_back(rt.into_word(None));
            return;
        }

        let mut rt = rt;
        let chars: Vec<char> = rt.txt.chars().collect();
        if chars.len() > 1 {
            if matches!(chars[0], '+' | '-') && chars[1].is_ascii_digit() {
                // Signed number; parse immediately so that the sign is not
                // peeled off as punctuation
                let (t, rest) = parse_digits(rt, self.options.convert_numbers);
                self.out.push_back(t);
                if rest.txt.is_empty() {
                    return;
                }
                rt = rest;
            } else if punct::COMPOSITE_HYPHENS.contains(chars[0]) && chars[1].is_alphabetic() {
                // Leading hyphen attached to a word: "-menn" in
                // "þingkonur og -menn". Mixed case is not accepted.
                let mut i = 2;
                while i < chars.len() && chars[i].is_alphabetic() {
                    i += 1;
                }
                let head: String = chars[..i].iter().collect();
                if str_is_lower(&head) || (i > 2 && str_is_upper(&head)) {
                    let (word, rest) = rt.split(i);
                    self.out.push_back(word.into_word(None));
                    rt = rest;
                }
            }
        }

        // Quotes wrapping a single word normalize to an Icelandic pair
        let chars: Vec<char> = rt.txt.chars().collect();
        if chars.len() >= 3 {
            let inner: String = chars[1..chars.len() - 1].iter().collect();
            let wrapped_double =
                punct::DQUOTES.contains(chars[0]) && punct::DQUOTES.contains(chars[chars.len() - 1]);
            let wrapped_single =
                punct::SQUOTES.contains(chars[0]) && punct::SQUOTES.contains(chars[chars.len() - 1]);
            if (wrapped_double || wrapped_single) && inner.chars().all(char::is_alphabetic) {
                let (open, rest) = rt.split(1);
                let (word, close) = rest.split(chars.len() - 2);
                let (o, c) = if wrapped_double { ("„", "“") } else { ("‚", "‘") };
                self.out.push_back(open.into_punct(Some(o)));
                self.out.push_back(word.into_word(None));
                self.out.push_back(close.into_punct(Some(c)));
                return;
            }
        }

        // A leading quote on a longer token is an opening quote
        if chars.len() > 1 {
            if punct::DQUOTES.contains(chars[0]) {
                let (q, rest) = rt.split(1);
                self.out.push_back(q.into_punct(Some("„")));
                rt = rest;
            } else if punct::SQUOTES.contains(chars[0]) {
                let (q, rest) = rt.split(1);
                self.out.push_back(q.into_punct(Some("‚")));
                rt = rest;
            }
        }

        self.parse_mixed(rt);
    }

    /// The general loop over a mixed raw token.
    fn parse_mixed(&mut self, mut rt: Token) {
        while !rt.txt.is_empty() {
            let (rest, mut ate) = self.parse_puncts(rt);
            rt = rest;

            if rt.txt.contains('@') {
                if let Some(m) = web::EMAIL.find(&rt.txt) {
                    let len = rt.txt[..m.end()].chars().count();
                    let (email, rest) = rt.split(len);
                    self.out.push_back(email.into_kind(TokenKind::Email));
                    rt = rest;
                    ate = true;
                }
            }

            if let Some(first) = rt.txt.chars().next() {
                if let Some(v) = numbers::fraction_value(first) {
                    let (num, rest) = rt.split(1);
                    self.out.push_back(num.into_number(v));
                    rt = rest;
                    ate = true;
                }
            }

            if web::has_url_prefix(&rt.txt) {
                // Trailing right-hand punctuation is peeled off the URL even
                // though the RFCs technically allow it
                let chars: Vec<char> = rt.txt.chars().collect();
                let mut end = chars.len();
                while end > 0 && punct::RIGHT_PUNCTUATION.contains(chars[end - 1]) {
                    end -= 1;
                }
                let (url, rest) = rt.split(end);
                self.out.push_back(url.into_kind(TokenKind::Url));
                rt = rest;
                ate = true;
            }

            let chars: Vec<char> = rt.txt.chars().collect();
            if chars.len() >= 2
                && chars[0] == '#'
                && (chars[1].is_alphanumeric() || chars[1] == '_')
            {
                // Hashtag: eat up to the next punctuation char so that
                // "#MeToo-hreyfingin" stays two tokens
                let mut end = 1;
                while end < chars.len() && !punct::is_punct_char(chars[end]) {
                    end += 1;
                }
                let all_digits = chars[1..end].iter().all(char::is_ascii_digit);
                let (tag, rest) = rt.split(end);
                if all_digits && end > 1 {
                    // The hash is a number sign: "#12"
                    let n: String = chars[1..end].iter().collect();
                    let n = n.parse().unwrap_or(0);
                    self.out.push_back(tag.into_ordinal(n));
                } else {
                    self.out.push_back(tag.into_kind(TokenKind::Hashtag));
                }
                rt = rest;
                ate = true;
            }

            if let Some(len) = web::domain_prefix_len(&rt.txt) {
                let (domain, rest) = rt.split(len);
                self.out.push_back(domain.into_kind(TokenKind::Domain));
                rt = rest;
                ate = true;
            }

            let chars: Vec<char> = rt.txt.chars().collect();
            let digit_start = !chars.is_empty()
                && (chars[0].is_ascii_digit()
                    || (matches!(chars[0], '+' | '-')
                        && chars.len() >= 2
                        && chars[1].is_ascii_digit()));
            if digit_start {
                rt = self.parse_number(rt);
                ate = true;
            }

            if !rt.txt.is_empty() {
                if let Some(len) = elements::molecule_prefix_len(&rt.txt) {
                    let chars: Vec<char> = rt.txt.chars().collect();
                    let formula: String = chars[..len].iter().collect();
                    if !self.abbr.contains(&formula) && elements::contains_digit(&formula) {
                        let (mol, rest) = rt.split(len);
                        self.out.push_back(mol.into_kind(TokenKind::Molecule));
                        rt = rest;
                        ate = true;
                    }
                }
            }

            // Currency code immediately followed by digits: "USD50"
            let chars: Vec<char> = rt.txt.chars().collect();
            if chars.len() > 3 && chars[3].is_ascii_digit() {
                let prefix: String = chars[..3].iter().collect();
                if currency::is_currency_abbrev(&prefix) {
                    let probe = Token::raw(&rt.txt[rt.txt.char_indices().nth(3).map(|(b, _)| b).unwrap_or(0)..]);
                    let (digits, _) = parse_digits(probe, self.options.convert_numbers);
                    if digits.kind == TokenKind::Number {
                        if let Some(n) = digits.number() {
                            let (amount, rest) = rt.split(3 + digits.len_chars());
                            self.out.push_back(amount.into_amount(n, &prefix));
                            rt = rest;
                            ate = true;
                        }
                    }
                }
            }

            if rt.txt.chars().next().is_some_and(char::is_alphabetic) {
                rt = self.parse_letters(rt);
                ate = true;
            }

            // Quotes attached on the right-hand side of other text are
            // closing quotes
            if let Some(first) = rt.txt.chars().next() {
                if punct::SQUOTES.contains(first) {
                    let (q, rest) = rt.split(1);
                    self.out.push_back(q.into_punct(Some("‘")));
                    rt = rest;
                    ate = true;
                } else if punct::DQUOTES.contains(first) {
                    let (q, rest) = rt.split(1);
                    self.out.push_back(q.into_punct(Some("“")));
                    rt = rest;
                    ate = true;
                }
            }

            if !ate && !rt.txt.is_empty() {
                // Eat one char as UNKNOWN so the loop always advances
                let (unk, rest) = rt.split(1);
                self.out.push_back(unk.into_kind(TokenKind::Unknown));
                rt = rest;
            }
        }
    }

    /// Peel punctuation off the front of the token. Returns the remainder
    /// and whether anything was consumed.
    fn parse_puncts(&mut self, mut rt: Token) -> (Token, bool) {
        let mut ate = false;
        loop {
            let chars: Vec<char> = rt.txt.chars().collect();
            let Some(&first) = chars.first() else { break };
            if !punct::is_punct_char(first) {
                break;
            }
            let lw = chars.len();

            if rt.txt.starts_with("[...]") {
                let (p, rest) = rt.split(5);
                self.out.push_back(p.into_punct(Some("[…]")));
                rt = rest;
            } else if rt.txt.starts_with("[…]") {
                let (p, rest) = rt.split(3);
                self.out.push_back(p.into_punct(None));
                rt = rest;
            } else if rt.txt.starts_with("...") || rt.txt.starts_with('…') {
                // Three or more periods form one ellipsis
                let dots = chars.iter().take_while(|&&c| c == '.' || c == '…').count();
                let (p, rest) = rt.split(dots);
                self.out.push_back(p.into_punct(Some("…")));
                rt = rest;
            } else if rt.txt.starts_with("..") {
                let (p, rest) = rt.split(2);
                self.out.push_back(p.into_punct(Some(".")));
                rt = rest;
            } else if rt.txt.starts_with(",,") {
                if chars.get(2).is_some_and(|c| c.is_alphanumeric()) {
                    // Someone typing opening double quotes with commas
                    let (p, rest) = rt.split(2);
                    self.out.push_back(p.into_punct(Some("„")));
                    rt = rest;
                } else {
                    let commas = chars.iter().take_while(|&&c| c == ',').count();
                    let (p, rest) = rt.split(commas);
                    self.out.push_back(p.into_punct(Some(",")));
                    rt = rest;
                }
            } else if punct::HYPHENS.contains(first) {
                // A run of two or more identical dashes is one token; a
                // lone dash normalizes to a plain hyphen
                let run = chars.iter().take_while(|&&c| c == first).count();
                if run >= 2 {
                    let (p, rest) = rt.split(run);
                    self.out.push_back(p.into_punct(None));
                    rt = rest;
                } else {
                    let (p, rest) = rt.split(1);
                    self.out.push_back(p.into_punct(Some("-")));
                    rt = rest;
                }
            } else if punct::DQUOTES.contains(first) {
                let (p, rest) = rt.split(1);
                self.out.push_back(p.into_punct(Some("“")));
                rt = rest;
            } else if punct::SQUOTES.contains(first) {
                let (p, rest) = rt.split(1);
                self.out.push_back(p.into_punct(Some("‘")));
                rt = rest;
            } else if first == '#' && lw > 1 {
                // Might be a hashtag; leave it for the mixed loop
                ate = false;
                return (rt, ate);
            } else if first == '@' && lw > 1 {
                if let Some(m) = web::USERNAME.find(&rt.txt) {
                    let handle = m.as_str()[1..].to_string();
                    let len = m.as_str().chars().count();
                    let (user, rest) = rt.split(len);
                    self.out.push_back(user.into_username(handle));
                    rt = rest;
                } else {
                    let (p, rest) = rt.split(1);
                    self.out.push_back(p.into_punct(None));
                    rt = rest;
                }
            } else if lw >= 2 && chars.iter().all(|&c| c == '?' || c == '!') {
                // "???!!!" and the like collapse into one token
                let symbol = first.to_string();
                let (p, rest) = rt.split(lw);
                self.out.push_back(p.into_punct(Some(symbol.as_str())));
                rt = rest;
            } else {
                let (p, rest) = rt.split(1);
                self.out.push_back(p.into_punct(None));
                rt = rest;
            }
            ate = true;
        }
        (rt, ate)
    }

    /// Kludgy ordinals, then the digit cascade, then a unit glued to the
    /// number's tail.
    fn parse_number(&mut self, rt: Token) -> Token {
        let mut rest = 'kludgy: {
            for &(key, replacement) in numbers::ORDINAL_ERRORS {
                if rt.txt.starts_with(key) {
                    let key_chars = key.chars().count();
                    let (mut key_tok, rest) = rt.split(key_chars);
                    match self.options.kludgy_ordinals {
                        KludgyOrdinals::Modify => {
                            key_tok.substitute_longer(0, key_chars, replacement);
                            self.out.push_back(key_tok.into_word(None));
                        }
                        KludgyOrdinals::Translate => {
                            match numbers::kludgy_ordinal_number(key) {
                                Some(n) => self.out.push_back(key_tok.into_ordinal(n)),
                                None => self.out.push_back(key_tok.into_word(None)),
                            }
                        }
                        KludgyOrdinals::PassThrough => {
                            self.out.push_back(key_tok.into_word(None));
                        }
                    }
                    break 'kludgy rest;
                }
            }
            let (t, rest) = parse_digits(rt, self.options.convert_numbers);
            self.out.push_back(t);
            rest
        };

        if !rest.txt.is_empty() {
            // A unit glued right onto the number ("0,5km" leaves "km")
            if let Some(unit) = units::unit_prefix(&rest.txt) {
                let (u, r) = rest.split(unit.chars().count());
                self.out.push_back(u.into_word(None));
                rest = r;
            }
        }
        rest
    }

    /// A run of letters, possibly with interior periods, apostrophes or
    /// hyphens, off the front of the token.
    fn parse_letters(&mut self, rt: Token) -> Token {
        let keep_glyphs = !self.options.replace_composite_glyphs;
        let is_letter =
            |c: char| c.is_alphabetic() || (keep_glyphs && unicode::is_combining_mark(c));
        let chars: Vec<char> = rt.txt.chars().collect();
        let lw = chars.len();

        let mut i = 1;
        while i < lw
            && (is_letter(chars[i])
                || (punct::may_occur_inside_word(chars[i])
                    && i + 1 < lw
                    && is_letter(chars[i + 1])))
        {
            i += 1;
        }
        if i < lw && punct::may_end_word(chars[i]) {
            i += 1;
        }

        let word: String = chars[..i].iter().collect();
        let parts: Vec<&str> = word.split('.').collect();

        let mut rt = rt;
        if parts.len() == 2
            && parts[0].chars().count() > 1
            && str_is_lower(&parts[0].chars().skip(1).collect::<String>())
            && !parts[1].is_empty()
            && parts[1].chars().next().is_some_and(char::is_uppercase)
            && !self
                .abbr
                .contains(&chars[..(i + 1).min(lw)].iter().collect::<String>())
        {
            // Sentences running together over a missing space:
            // "sjávarútvegi.Það"
            let (word1, rest) = rt.split(parts[0].chars().count());
            let (dot, rest) = rest.split(1);
            let (word2, rest) = rest.split(parts[1].chars().count());
            self.out.push_back(word1.into_word(None));
            self.out.push_back(dot.into_punct(None));
            self.out.push_back(word2.into_word(None));
            rt = rest;
        } else if word.ends_with("-og") || word.ends_with("-eða") {
            // Missing space before the conjunction:
            // "fjármála-og efnahagsráðuneyti"
            let dash_parts: Vec<&str> = word.split('-').collect();
            let (word1, rest) = rt.split(dash_parts[0].chars().count());
            let (dash, rest) = rest.split(1);
            let (word2, rest) = rest.split(dash_parts[1].chars().count());
            self.out.push_back(word1.into_word(None));
            self.out
                .push_back(dash.into_punct(Some(punct::COMPOSITE_HYPHEN)));
            self.out.push_back(word2.into_word(None));
            rt = rest;
        } else {
            let (word, rest) = rt.split(i);
            self.out.push_back(word.into_word(None));
            rt = rest;
        }

        if rt
            .txt
            .chars()
            .next()
            .is_some_and(|c| punct::COMPOSITE_HYPHENS.contains(c))
        {
            // A hyphen stuck to the word's tail may start a composite-word
            // continuation; mark it for the later stages
            let (dash, rest) = rt.split(1);
            self.out
                .push_back(dash.into_punct(Some(punct::COMPOSITE_HYPHEN)));
            rt = rest;
        }
        rt
    }
}

impl<I: Iterator<Item = Token>> Iterator for Classifier<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(t) = self.out.pop_front() {
                return Some(t);
            }
            if self.done {
                return None;
            }
            match self.input.next() {
                Some(rt) => self.classify(rt),
                None => {
                    self.out.push_back(Token::end_sentinel());
                    self.done = true;
                }
            }
        }
    }
}

fn str_is_lower(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
}

fn str_is_upper(s: &str) -> bool {
    s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbrev::abbreviations;
    use crate::pipeline::raw::RawTokens;
    use crate::token::TokenValue;

    fn classify_all(text: &str) -> Vec<Token> {
        let options = TokenizerOptions::default();
        let raw = RawTokens::new(vec![text.to_string()].into_iter(), &options);
        Classifier::new(raw, options, abbreviations().unwrap()).collect()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn words_take_the_fast_path() {
        let toks = classify_all("þjóðhátíð BSRB");
        assert_eq!(
            kinds(&toks),
            vec![TokenKind::Word, TokenKind::Word, TokenKind::EndSentinel]
        );
    }

    #[test]
    fn interior_punctuation_survives_in_words() {
        let toks = classify_all("marg-ítrekað O'Malley o.s.frv.");
        assert_eq!(toks[0].txt, "marg-ítrekað");
        assert_eq!(toks[1].txt, "O'Malley");
        assert_eq!(toks[2].txt, "o.s.frv");
        assert_eq!(toks[3].txt, ".");
    }

    #[test]
    fn trailing_punctuation_is_peeled() {
        let toks = classify_all("kom,");
        assert_eq!(toks[0].txt, "kom");
        assert_eq!(toks[1].kind, TokenKind::Punctuation);
        assert_eq!(toks[1].txt, ",");
    }

    #[test]
    fn run_together_sentences_are_split() {
        let toks = classify_all("sjávarútvegi.Það");
        assert_eq!(toks[0].txt, "sjávarútvegi");
        assert_eq!(toks[1].txt, ".");
        assert_eq!(toks[2].txt, "Það");
    }

    #[test]
    fn abbreviations_are_not_run_together_sentences() {
        let toks = classify_all("f.Kr.");
        assert_eq!(toks[0].txt, "f.Kr");
        assert_eq!(toks[1].txt, ".");
    }

    #[test]
    fn missing_space_composites() {
        let toks = classify_all("fjármála-og efnahagsráðuneyti");
        assert_eq!(toks[0].txt, "fjármála");
        assert_eq!(toks[1].punctuation(), Some(punct::COMPOSITE_HYPHEN));
        assert_eq!(toks[2].txt, "og");
    }

    #[test]
    fn emails_urls_domains() {
        let toks = classify_all("fake@news.is https://greynir.is mbl.is");
        assert_eq!(
            kinds(&toks),
            vec![
                TokenKind::Email,
                TokenKind::Url,
                TokenKind::Domain,
                TokenKind::EndSentinel
            ]
        );
    }

    #[test]
    fn hashtags_and_usernames() {
        let toks = classify_all("#MeToo @user_123 #12");
        assert_eq!(toks[0].kind, TokenKind::Hashtag);
        assert_eq!(toks[1].kind, TokenKind::Username);
        assert_eq!(toks[1].val, Some(TokenValue::Username("user_123".into())));
        assert_eq!(toks[2].kind, TokenKind::Ordinal);
        assert_eq!(toks[2].val, Some(TokenValue::Ordinal(12)));
    }

    #[test]
    fn hashtag_stops_at_punctuation() {
        let toks = classify_all("#MeToo-hreyfingin");
        assert_eq!(toks[0].kind, TokenKind::Hashtag);
        assert_eq!(toks[0].txt, "#MeToo");
        assert_eq!(toks[1].kind, TokenKind::Punctuation);
        assert_eq!(toks[2].txt, "hreyfingin");
    }

    #[test]
    fn molecules_need_a_digit() {
        let toks = classify_all("H2SO4 CO");
        assert_eq!(toks[0].kind, TokenKind::Molecule);
        assert_eq!(toks[1].kind, TokenKind::Word);
    }

    #[test]
    fn currency_prefix_amounts() {
        let toks = classify_all("USD900");
        assert_eq!(toks[0].kind, TokenKind::Amount);
        assert_eq!(
            toks[0].val,
            Some(TokenValue::Amount {
                value: 900.0,
                currency: "USD".into()
            })
        );
    }

    #[test]
    fn quote_wrapped_word() {
        let toks = classify_all("\"orð\"");
        assert_eq!(toks[0].punctuation(), Some("„"));
        assert_eq!(toks[1].txt, "orð");
        assert_eq!(toks[2].punctuation(), Some("“"));
    }

    #[test]
    fn exclamation_runs_collapse() {
        let toks = classify_all("??!!");
        assert_eq!(toks[0].txt, "??!!");
        assert_eq!(toks[0].punctuation(), Some("?"));
    }

    #[test]
    fn ellipsis_normalization() {
        let toks = classify_all("beðið...");
        assert_eq!(toks[0].txt, "beðið");
        assert_eq!(toks[1].txt, "...");
        assert_eq!(toks[1].punctuation(), Some("…"));
    }

    #[test]
    fn signed_numbers() {
        let toks = classify_all("-7,4");
        assert_eq!(toks[0].kind, TokenKind::Number);
        assert_eq!(toks[0].val, Some(TokenValue::Number(-7.4)));
    }

    #[test]
    fn leading_dash_word() {
        let toks = classify_all("-menn");
        assert_eq!(toks[0].kind, TokenKind::Word);
        assert_eq!(toks[0].txt, "-menn");
    }

    #[test]
    fn unknown_fallback_never_loses_text() {
        let toks = classify_all("⌘⌘");
        let rebuilt: String = toks.iter().map(|t| t.original.as_str()).collect();
        assert_eq!(rebuilt, "⌘⌘");
        assert!(toks.iter().take(2).all(|t| t.kind == TokenKind::Unknown));
    }

    #[test]
    fn everything_ends_with_the_sentinel() {
        let toks = classify_all("orð");
        assert_eq!(toks.last().map(|t| t.kind), Some(TokenKind::EndSentinel));
    }
}
