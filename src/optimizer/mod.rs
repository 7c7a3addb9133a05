use crate::deque::TokenDeque;
use crate::Token;

mod clear_cell;

pub use clear_cell::ClearCell;

/// A peephole rewrite over a short window of tokens.
///
/// The pass hands a rule the current token and up to `lookahead()` tokens
/// that follow it. Returning `Some` replaces the head and the whole window
/// with the returned token; the window is shorter than `lookahead()` only
/// near the end of the input.
pub trait Rule: Sync {
    fn name(&self) -> &'static str;
    fn lookahead(&self) -> usize;
    fn rewrite(&self, head: &Token, window: &[Token]) -> Option<Token>;
}

/// Rules applied by `BfIR::optimize`, tried in order.
pub static RULES: &[&dyn Rule] = &[&ClearCell];

/// Single forward pass applying `rules` at each position. Lookahead that
/// no rule consumed is pushed back onto the input before moving on, so
/// every token is seen as a head exactly once unless a rule swallows it.
pub fn optimize(mut input: TokenDeque, rules: &[&dyn Rule]) -> TokenDeque {
    let before = input.len();
    let mut output = TokenDeque::with_capacity(before);
    let mut window = Vec::new();

    'scan: while let Some(head) = input.pop_front() {
        for rule in rules {
            window.clear();
            while window.len() < rule.lookahead() {
                match input.pop_front() {
                    Some(token) => window.push(token),
                    None => break,
                }
            }

            if let Some(replacement) = rule.rewrite(&head, &window) {
                log::trace!("{}: {:?} {:?} -> {:?}", rule.name(), head, window, replacement);
                output.push_back(replacement);
                continue 'scan;
            }

            input.restore_front(&window);
        }
        output.push_back(head);
    }

    log::debug!("peephole pass: {} -> {} tokens", before, output.len());

    output
}
