use std::collections::vec_deque::{self, VecDeque};
use std::fmt;
use std::iter::FromIterator;

use crate::Token;

/// Ordered, double-ended sequence of tokens in program order.
///
/// Both ends support O(1) push and pop. The optimizer relies on
/// `push_front` to hand back lookahead it could not use.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenDeque {
    tokens: VecDeque<Token>,
}

impl TokenDeque {
    pub fn new() -> Self {
        Self { tokens: VecDeque::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { tokens: VecDeque::with_capacity(capacity) }
    }

    pub fn push_back(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub fn push_front(&mut self, token: Token) {
        self.tokens.push_front(token);
    }

    pub fn pop_front(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    pub fn pop_back(&mut self) -> Option<Token> {
        self.tokens.pop_back()
    }

    pub fn front(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn back(&self) -> Option<&Token> {
        self.tokens.back()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Puts `tokens` back at the front so that the first element of the
    /// slice becomes the new front.
    pub fn restore_front(&mut self, tokens: &[Token]) {
        for &token in tokens.iter().rev() {
            self.tokens.push_front(token);
        }
    }
}

impl fmt::Debug for TokenDeque {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl FromIterator<Token> for TokenDeque {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self { tokens: iter.into_iter().collect() }
    }
}

impl From<Vec<Token>> for TokenDeque {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens: tokens.into() }
    }
}

impl IntoIterator for TokenDeque {
    type Item = Token;
    type IntoIter = vec_deque::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenDeque {
    type Item = &'a Token;
    type IntoIter = vec_deque::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
