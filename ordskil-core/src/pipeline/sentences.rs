//! Stage 7: the sentence segmenter.
//!
//! A two-state machine (outside/inside a sentence) that frames content
//! tokens with S_BEGIN/S_END markers. Terminating punctuation ends a
//! sentence unless the lookahead clearly continues it; abbreviations that
//! swallowed their final period end a sentence only when they are marked
//! as finishers and the lookahead starts something new. Hard splits from
//! blank lines always close an open sentence. The stream ends with a
//! single X_END sentinel that also carries any trailing whitespace.

use std::collections::VecDeque;

use crate::abbrev::Abbreviations;
use crate::lang::punct;
use crate::pipeline::could_be_end_of_sentence;
use crate::token::{Token, TokenKind, TokenStream};

pub struct Segmenter<I: Iterator<Item = Token>> {
    stream: TokenStream<I>,
    cur: Option<Token>,
    out: VecDeque<Token>,
    abbr: &'static Abbreviations,
    in_sentence: bool,
    started: bool,
    done: bool,
}

impl<I: Iterator<Item = Token>> Segmenter<I> {
    pub fn new(input: I, abbr: &'static Abbreviations) -> Self {
        Segmenter {
            stream: TokenStream::new(input),
            cur: None,
            out: VecDeque::new(),
            abbr,
            in_sentence: false,
            started: false,
            done: false,
        }
    }

    fn pull(&mut self) -> Token {
        self.stream.next().unwrap_or_else(Token::end_sentinel)
    }

    fn end_sentence(&mut self) {
        self.out.push_back(Token::marker(TokenKind::SentEnd));
        self.in_sentence = false;
    }

    /// Does this token close the sentence by itself, by virtue of an
    /// attached abbreviation period? Only finisher abbreviations
    /// ("o.s.frv.", "e.Kr.") qualify, and only when the lookahead starts
    /// something new.
    fn ends_with_finisher(&self, token: &Token, next: &Token) -> bool {
        if token.kind.is_meta() || !token.txt.ends_with('.') {
            return false;
        }
        let last = token.txt.rsplit(' ').next().unwrap_or(&token.txt);
        self.abbr.is_finisher(last)
            && !self.abbr.is_name_finisher(last)
            && could_be_end_of_sentence(next, false, false)
    }

    fn finalize(&mut self, token: Token) {
        // The classifier guarantees a terminal sentinel, so the final
        // pending token is X_END, possibly carrying trailing whitespace
        if !self.in_sentence && !token.kind.is_end() {
            self.out.push_back(Token::marker(TokenKind::SentBegin));
            self.in_sentence = true;
        }
        if self.in_sentence {
            self.end_sentence();
        }
        if token.kind == TokenKind::EndSentinel {
            self.out.push_back(token);
        } else {
            // Defensive: keep the token and still terminate the stream
            self.out.push_back(token);
            self.out.push_back(Token::end_sentinel());
        }
        self.done = true;
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
            self.finalize(token);
            return;
        };

        match token.kind {
            TokenKind::ParaBegin | TokenKind::ParaEnd => {
                if self.in_sentence {
                    self.end_sentence();
                }
                if token.kind == TokenKind::ParaBegin && next_token.kind == TokenKind::ParaEnd {
                    // An empty paragraph: fold both markers' originals onto
                    // the front of whatever follows
                    let follow = self.pull();
                    let skip = token.concatenate(next_token, "", true);
                    self.cur = Some(skip.concatenate(follow, "", true));
                    return;
                }
            }
            TokenKind::EndSentinel => {
                debug_assert!(!self.in_sentence);
            }
            TokenKind::SentSplit => {
                if self.in_sentence {
                    // The blank line's whitespace survives on the S_END
                    let mut end = Token::marker(TokenKind::SentEnd);
                    end.original = token.original;
                    self.out.push_back(end);
                    self.in_sentence = false;
                    self.cur = Some(next_token);
                } else {
                    self.cur = Some(token.concatenate(next_token, "", true));
                }
                return;
            }
            _ => {
                if !self.in_sentence {
                    self.out.push_back(Token::marker(TokenKind::SentBegin));
                    self.in_sentence = true;
                }

                // Indirect speech: „Er einhver þarna?“ sagði konan.
                if token
                    .punctuation()
                    .is_some_and(punct::is_indirect_speech)
                    && next_token
                        .punctuation()
                        .and_then(|p| p.chars().next())
                        .is_some_and(|c| punct::DQUOTES.contains(c))
                {
                    self.out.push_back(token);
                    token = next_token;
                    next_token = self.pull();
                    if str_is_lower(&next_token.txt) {
                        // The quote closes mid-sentence; carry on
                        self.out.push_back(token);
                        token = next_token;
                        next_token = self.pull();
                    } else {
                        self.out.push_back(token);
                        token = Token::marker(TokenKind::SentEnd);
                        self.in_sentence = false;
                    }
                }

                let terminates = token
                    .punctuation()
                    .is_some_and(|p| {
                        punct::ends_sentence(p)
                            && !(p == "…" && !could_be_end_of_sentence(&next_token, false, false))
                    });
                if terminates {
                    // Runs of combining punctuation collapse first
                    while token.punctuation().is_some_and(punct::may_combine)
                        && next_token.punctuation().is_some_and(punct::may_combine)
                    {
                        let symbol = {
                            let a = token.punctuation().unwrap_or("");
                            let b = next_token.punctuation().unwrap_or("");
                            if a == "…" && b == "?" {
                                b.to_string()
                            } else {
                                a.to_string()
                            }
                        };
                        token = token
                            .concatenate(next_token, "", false)
                            .into_punct(Some(symbol.as_str()));
                        next_token = self.pull();
                    }
                    // Closing brackets and quotes still belong to the
                    // sentence
                    while next_token.punctuation().is_some_and(punct::is_sentence_finisher) {
                        self.out.push_back(token);
                        token = next_token;
                        next_token = self.pull();
                    }
                    self.out.push_back(token);
                    token = Token::marker(TokenKind::SentEnd);
                    self.in_sentence = false;
                } else if self.in_sentence && self.ends_with_finisher(&token, &next_token) {
                    self.out.push_back(token);
                    token = Token::marker(TokenKind::SentEnd);
                    self.in_sentence = false;
                }
            }
        }

        self.out.push_back(token);
        self.cur = Some(next_token);
    }
}

impl<I: Iterator<Item = Token>> Iterator for Segmenter<I> {
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

fn str_is_lower(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
}
