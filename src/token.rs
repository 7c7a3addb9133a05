use std::fmt;

use static_assertions::assert_eq_size;

/// A Token in bf2go's intermediate representation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `MoveForward(count)` Moves data pointer right by *count* cells
    MoveForward(usize),
    /// `MoveBackward(count)` Moves data pointer left by *count* cells
    MoveBackward(usize),
    /// `Increment(count)` Adds *count* to the current cell, wrapping
    Increment(usize),
    /// `Decrement(count)` Subtracts *count* from the current cell, wrapping
    Decrement(usize),
    /// `Output` Writes the current cell to stdout
    Output,
    /// `Input` Reads one byte from stdin to the current cell
    Input,
    /// `LoopBegin` Starts a loop that runs while the current cell is not zero
    LoopBegin,
    /// `LoopEnd` Closes the innermost open loop
    LoopEnd,
    /// `SetZero` Sets the current cell to zero
    SetZero,
}

assert_eq_size!(token_size_assert; Token, [usize; 2]);

impl Token {
    /// Maps a source byte to the token it stands for. Anything outside the
    /// eight commands is a comment.
    pub fn from_command(c: u8) -> Option<Token> {
        match c {
            b'>' => Some(Token::MoveForward(1)),
            b'<' => Some(Token::MoveBackward(1)),
            b'+' => Some(Token::Increment(1)),
            b'-' => Some(Token::Decrement(1)),
            b'.' => Some(Token::Output),
            b',' => Some(Token::Input),
            b'[' => Some(Token::LoopBegin),
            b']' => Some(Token::LoopEnd),
            _ => None,
        }
    }

    /// Run length of a counted token; `None` for the others.
    pub fn count(&self) -> Option<usize> {
        match *self {
            Token::MoveForward(count)
            | Token::MoveBackward(count)
            | Token::Increment(count)
            | Token::Decrement(count) => Some(count),
            _ => None,
        }
    }

    /// Combines two adjacent tokens of the same mergeable kind into one
    /// with the summed count. Gives both back unchanged otherwise.
    pub fn merge(self, next: Token) -> Result<Token, (Token, Token)> {
        use Token::*;

        match (self, next) {
            (MoveForward(a), MoveForward(b)) => Ok(MoveForward(a + b)),
            (MoveBackward(a), MoveBackward(b)) => Ok(MoveBackward(a + b)),
            (Increment(a), Increment(b)) => Ok(Increment(a + b)),
            (Decrement(a), Decrement(b)) => Ok(Decrement(a + b)),
            pair => Err(pair),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::MoveForward(count) => write!(f, "MoveForward(count={})", count),
            Token::MoveBackward(count) => write!(f, "MoveBackward(count={})", count),
            Token::Increment(count) => write!(f, "Increment(count={})", count),
            Token::Decrement(count) => write!(f, "Decrement(count={})", count),
            Token::Output => write!(f, "Output"),
            Token::Input => write!(f, "Input"),
            Token::LoopBegin => write!(f, "LoopBegin"),
            Token::LoopEnd => write!(f, "LoopEnd"),
            Token::SetZero => write!(f, "SetZero"),
        }
    }
}
