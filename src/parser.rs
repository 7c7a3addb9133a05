use crate::ir::{BfIR, Capabilities};
use crate::token::Token;
use crate::deque::TokenDeque;
use std::error::Error;
use std::fmt;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorType {
    UnclosedLoop,
    ExtraCloseLoop,
}
use ParseErrorType::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    err: ParseErrorType,
    line: Vec<u8>,
    linenum: usize,
    offset: usize,
}

impl ParseError {
    fn new(err: ParseErrorType, code: &[u8], i: usize) -> Self {
        let (line, linenum, offset) = find_line(code, i);
        Self {
            err,
            line: line.into(),
            linenum,
            offset,
        }
    }

    pub fn kind(&self) -> ParseErrorType {
        self.err
    }

    /// 1-based line of the offending bracket
    pub fn line(&self) -> usize {
        self.linenum
    }

    /// 1-based byte column of the offending bracket
    pub fn column(&self) -> usize {
        self.offset + 1
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let line = String::from_utf8_lossy(&self.line);
        let prefix = String::from_utf8_lossy(&self.line[..self.offset]);
        let width = UnicodeWidthStr::width(&*prefix);

        match self.err {
            UnclosedLoop => {
                writeln!(f, "reached EOF with unterminated loop")?;
                writeln!(f, "Loop started at {}:{}", self.line(), self.column())?;
            }
            ExtraCloseLoop => {
                writeln!(
                    f,
                    "] found at {}:{} when not in a loop",
                    self.line(),
                    self.column()
                )?;
            }
        };

        writeln!(f, "{}", line)?;
        write!(f, "{}^", " ".repeat(width))?;

        Ok(())
    }
}

impl Error for ParseError {}

/// Converts brainfuck source into run-length merged tokens, recording which
/// I/O capabilities the program uses. Never fails: bytes outside the eight
/// commands are comments, and brackets are not matched here.
pub fn scan(code: &[u8]) -> BfIR {
    let mut tokens = TokenDeque::new();
    let mut caps = Capabilities::default();
    let mut pending: Option<Token> = None;

    for &c in code {
        let token = match Token::from_command(c) {
            Some(token) => token,
            None => continue,
        };

        match token {
            Token::Output => caps.output = true,
            Token::Input => caps.input = true,
            _ => (),
        }

        pending = Some(match pending.take() {
            Some(prev) => match prev.merge(token) {
                Ok(merged) => merged,
                Err((prev, next)) => {
                    tokens.push_back(prev);
                    next
                }
            },
            None => token,
        });
    }

    if let Some(last) = pending {
        tokens.push_back(last);
    }

    log::debug!("scanned {} bytes into {} tokens", code.len(), tokens.len());

    BfIR { tokens, caps }
}

/// Checks that every `[` has a matching `]`, pointing at the first
/// offending bracket otherwise.
pub fn check_brackets(code: &[u8]) -> Result<(), ParseError> {
    let mut open = Vec::new();

    for (i, &c) in code.iter().enumerate() {
        match c {
            b'[' => open.push(i),
            b']' => {
                if open.pop().is_none() {
                    return Err(ParseError::new(ExtraCloseLoop, code, i));
                }
            }
            _ => (),
        }
    }

    // Report the outermost unclosed loop
    match open.first() {
        Some(&start) => Err(ParseError::new(UnclosedLoop, code, start)),
        None => Ok(()),
    }
}

/// Checks brackets, then scans.
pub fn parse(code: &[u8]) -> Result<BfIR, ParseError> {
    check_brackets(code)?;
    Ok(scan(code))
}

/// Returns the line containing byte `i`, its 1-based number, and the
/// offset of `i` within it.
fn find_line(code: &[u8], i: usize) -> (&[u8], usize, usize) {
    let offset = code[0..i].iter().rev().take_while(|x| **x != b'\n').count();
    let end = i + code[i..].iter().take_while(|x| **x != b'\n').count();
    let linenum = 1 + code[0..(i - offset)]
        .iter()
        .filter(|x| **x == b'\n')
        .count();
    (&code[(i - offset)..end], linenum, offset)
}
