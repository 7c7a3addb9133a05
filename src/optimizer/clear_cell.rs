// `[-]` always leaves the current cell at zero, whatever it held,
// without touching the pointer.

use super::Rule;
use crate::Token::{self, *};

pub struct ClearCell;

impl Rule for ClearCell {
    fn name(&self) -> &'static str {
        "clear-cell"
    }

    fn lookahead(&self) -> usize {
        2
    }

    fn rewrite(&self, head: &Token, window: &[Token]) -> Option<Token> {
        match (head, window) {
            (LoopBegin, [Decrement(1), LoopEnd]) => Some(SetZero),
            _ => None,
        }
    }
}
