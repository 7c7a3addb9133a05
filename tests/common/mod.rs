// Reference interpreters used to check that translation preserves
// behaviour. Both share the semantics of the generated Go program: 8-bit
// wrapping cells, and `,` at end of input stores the last byte read (0 if
// none).

#![allow(dead_code)]

use bf2go::{Token, TokenDeque};

pub const TAPE_LEN: usize = 4096;

struct Machine<'a> {
    tape: Vec<u8>,
    ptr: usize,
    input: &'a [u8],
    scratch: u8,
    output: Vec<u8>,
    fuel: usize,
}

impl<'a> Machine<'a> {
    fn new(input: &'a [u8], fuel: usize) -> Self {
        Machine {
            tape: vec![0; TAPE_LEN],
            ptr: TAPE_LEN / 2,
            input,
            scratch: 0,
            output: Vec::new(),
            fuel,
        }
    }

    fn tick(&mut self) -> bool {
        if self.fuel == 0 {
            return false;
        }
        self.fuel -= 1;
        true
    }

    fn read(&mut self) {
        if let Some((&first, rest)) = self.input.split_first() {
            self.scratch = first;
            self.input = rest;
        }
        self.tape[self.ptr] = self.scratch;
    }
}

fn jump_table(is_open: impl Fn(usize) -> bool, is_close: impl Fn(usize) -> bool, len: usize) -> Vec<usize> {
    let mut jumps = vec![0; len];
    let mut open = Vec::new();
    for i in 0..len {
        if is_open(i) {
            open.push(i);
        } else if is_close(i) {
            let start = open.pop().expect("unbalanced program");
            jumps[start] = i;
            jumps[i] = start;
        }
    }
    jumps
}

/// Interprets brainfuck source directly, one command at a time. Returns
/// `None` if the program did not halt within `fuel` steps.
pub fn run_source(code: &[u8], input: &[u8], fuel: usize) -> Option<Vec<u8>> {
    let jumps = jump_table(|i| code[i] == b'[', |i| code[i] == b']', code.len());
    let mut m = Machine::new(input, fuel);
    let mut pc = 0;

    while pc < code.len() {
        match code[pc] {
            b'>' => m.ptr = (m.ptr + 1) % TAPE_LEN,
            b'<' => m.ptr = (m.ptr + TAPE_LEN - 1) % TAPE_LEN,
            b'+' => m.tape[m.ptr] = m.tape[m.ptr].wrapping_add(1),
            b'-' => m.tape[m.ptr] = m.tape[m.ptr].wrapping_sub(1),
            b'.' => m.output.push(m.tape[m.ptr]),
            b',' => m.read(),
            b'[' => {
                if m.tape[m.ptr] == 0 {
                    pc = jumps[pc];
                }
            }
            b']' => {
                if m.tape[m.ptr] != 0 {
                    pc = jumps[pc];
                }
            }
            _ => {
                pc += 1;
                continue;
            }
        }
        if !m.tick() {
            return None;
        }
        pc += 1;
    }

    Some(m.output)
}

/// Final machine state after running tokens
pub struct Outcome {
    pub output: Vec<u8>,
    pub tape: Vec<u8>,
    pub ptr: usize,
}

/// Interprets a token sequence the way the generated program executes it.
pub fn run_tokens(tokens: &TokenDeque, input: &[u8], fuel: usize) -> Option<Outcome> {
    let tokens: Vec<Token> = tokens.iter().copied().collect();
    let jumps = jump_table(
        |i| tokens[i] == Token::LoopBegin,
        |i| tokens[i] == Token::LoopEnd,
        tokens.len(),
    );
    run_tokens_from(&tokens, &jumps, Machine::new(input, fuel))
}

/// Like `run_tokens`, but starting with the given current cell value.
pub fn run_tokens_on(tokens: &TokenDeque, cell: u8) -> Option<Outcome> {
    let tokens: Vec<Token> = tokens.iter().copied().collect();
    let jumps = jump_table(
        |i| tokens[i] == Token::LoopBegin,
        |i| tokens[i] == Token::LoopEnd,
        tokens.len(),
    );
    let mut m = Machine::new(&[], 10_000);
    m.tape[m.ptr] = cell;
    run_tokens_from(&tokens, &jumps, m)
}

fn run_tokens_from(tokens: &[Token], jumps: &[usize], mut m: Machine) -> Option<Outcome> {
    let mut pc = 0;

    while pc < tokens.len() {
        match tokens[pc] {
            Token::MoveForward(n) => m.ptr = (m.ptr + n) % TAPE_LEN,
            Token::MoveBackward(n) => m.ptr = (m.ptr + TAPE_LEN - n % TAPE_LEN) % TAPE_LEN,
            Token::Increment(n) => m.tape[m.ptr] = m.tape[m.ptr].wrapping_add((n % 256) as u8),
            Token::Decrement(n) => m.tape[m.ptr] = m.tape[m.ptr].wrapping_sub((n % 256) as u8),
            Token::Output => m.output.push(m.tape[m.ptr]),
            Token::Input => m.read(),
            Token::SetZero => m.tape[m.ptr] = 0,
            Token::LoopBegin => {
                if m.tape[m.ptr] == 0 {
                    pc = jumps[pc];
                }
            }
            Token::LoopEnd => {
                if m.tape[m.ptr] != 0 {
                    pc = jumps[pc];
                }
            }
        }
        if !m.tick() {
            return None;
        }
        pc += 1;
    }

    Some(Outcome {
        output: m.output,
        tape: m.tape,
        ptr: m.ptr,
    })
}
