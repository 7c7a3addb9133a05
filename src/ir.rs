use std::fmt::{self, Write};

use crate::deque::TokenDeque;
use crate::optimizer;
use crate::Token;

/// Runtime facilities the generated program needs, collected while
/// scanning and consulted by code generation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Program contains `.`
    pub output: bool,
    /// Program contains `,`
    pub input: bool,
}

/// Intermediate representation used by bf2go
#[derive(Clone, PartialEq, Eq)]
pub struct BfIR {
    /// Tokens in program order
    pub tokens: TokenDeque,
    pub caps: Capabilities,
}

impl fmt::Debug for BfIR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.tokens, f)
    }
}

impl BfIR {
    /// Runs the peephole pass with the default rules. Level 0 leaves the
    /// tokens untouched.
    pub fn optimize(self, level: u32) -> Self {
        if level == 0 {
            return self;
        }
        BfIR {
            tokens: optimizer::optimize(self.tokens, optimizer::RULES),
            caps: self.caps,
        }
    }

    /// One token per line, indented four spaces per loop level.
    pub fn dump(&self) -> String {
        let mut output = String::new();
        let mut level = 0usize;
        for token in &self.tokens {
            if *token == Token::LoopEnd {
                level = level.saturating_sub(1);
            }
            writeln!(output, "{}{:?}", " ".repeat(level * 4), token).unwrap();
            if *token == Token::LoopBegin {
                level += 1;
            }
        }
        output
    }
}
