//! Bounded-lookahead adapter over a token iterator.

use std::collections::VecDeque;

use super::Token;

/// Wraps a token iterator and allows peeking a bounded number of tokens
/// ahead. The lookahead window is the only buffering a pipeline stage is
/// allowed to do.
pub struct TokenStream<I: Iterator<Item = Token>> {
    inner: I,
    lookahead: VecDeque<Token>,
    max_lookahead: usize,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new(inner: I) -> Self {
        Self::with_lookahead(inner, 4)
    }

    pub fn with_lookahead(inner: I, max_lookahead: usize) -> Self {
        TokenStream {
            inner,
            lookahead: VecDeque::with_capacity(max_lookahead.max(1)),
            max_lookahead: max_lookahead.max(1),
        }
    }

    /// Peek at the token `i` positions ahead without consuming it.
    pub fn peek(&mut self, i: usize) -> Option<&Token> {
        if i >= self.max_lookahead {
            return None;
        }
        while self.lookahead.len() <= i {
            match self.inner.next() {
                Some(t) => self.lookahead.push_back(t),
                None => return None,
            }
        }
        self.lookahead.get(i)
    }

    /// Surface text of the token `i` positions ahead.
    pub fn peek_txt(&mut self, i: usize) -> Option<&str> {
        self.peek(i).map(|t| t.txt.as_str())
    }
}

impl<I: Iterator<Item = Token>> Iterator for TokenStream<I> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if let Some(t) = self.lookahead.pop_front() {
            return Some(t);
        }
        self.inner.next()
    }
}
