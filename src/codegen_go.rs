use std::fmt::Write;

use static_assertions::const_assert;

use crate::ir::{BfIR, Capabilities};
use crate::Token::{self, *};

/// Cells allocated by the generated program unless configured otherwise
pub const DEFAULT_TAPE_SIZE: usize = 30_000_000;

const_assert!(tape_size_assert; DEFAULT_TAPE_SIZE > 0);

#[derive(Default)]
struct CodegenState {
    output: String,
    level: usize,
}

/// Cell arithmetic wraps at 256, and Go rejects constant conversions that
/// overflow `byte`.
fn wrap(count: usize) -> u8 {
    (count % 256) as u8
}

fn header(state: &mut CodegenState, caps: Capabilities, tape_size: usize) {
    push_line!(state, "package main");
    if caps.output {
        push_line!(state, "import \"fmt\"");
    }
    if caps.input {
        push_line!(state, "import \"os\"");
    }
    push_line!(state, "func main() {{");
    state.level += 1;
    push_line!(state, "buffer := make([]byte, {})", tape_size);
    push_line!(state, "ptr := 0");
    if caps.input {
        push_line!(state, "b := make([]byte, 1)");
    }
    // Go refuses unused locals; a program may never touch one of these
    push_line!(state, "_, _ = buffer, ptr");
}

fn codegen_token(state: &mut CodegenState, token: &Token) {
    match *token {
        MoveForward(count) => push_line!(state, "ptr = ptr + {}", count),
        MoveBackward(count) => push_line!(state, "ptr = ptr - {}", count),
        Increment(count) => push_line!(state, "buffer[ptr] = buffer[ptr] + byte({})", wrap(count)),
        Decrement(count) => push_line!(state, "buffer[ptr] = buffer[ptr] - byte({})", wrap(count)),
        // Slicing keeps the raw byte; string(buffer[ptr]) would UTF-8 encode it
        Output => push_line!(state, "fmt.Print(string(buffer[ptr : ptr+1]))"),
        Input => {
            push_line!(state, "os.Stdin.Read(b)");
            push_line!(state, "buffer[ptr] = b[0]");
        }
        SetZero => push_line!(state, "buffer[ptr] = 0"),
        LoopBegin => {
            push_line!(state, "for buffer[ptr] != 0 {{");
            state.level += 1;
        }
        LoopEnd => {
            // Unbalanced input may close more loops than were opened
            state.level = state.level.saturating_sub(1);
            push_line!(state, "}}");
        }
    }
}

/// Generates a Go program equivalent to `ir`, with a tape of `tape_size`
/// byte cells.
pub fn codegen(ir: &BfIR, tape_size: usize) -> String {
    let mut state = CodegenState::default();

    header(&mut state, ir.caps, tape_size);
    for token in &ir.tokens {
        codegen_token(&mut state, token);
    }

    if state.level != 1 {
        log::warn!("loop nesting ends at depth {} instead of 1", state.level);
    }
    state.level = 0;
    push_line!(state, "}}");

    state.output
}
