#[macro_use]
mod macros;

mod token;
mod deque;
mod error;
mod ir;
mod parser;
pub mod optimizer;
pub mod codegen_go;

pub use token::Token;
pub use deque::TokenDeque;
pub use error::Error;
pub use ir::{BfIR, Capabilities};
pub use parser::{check_brackets, parse, scan, ParseError, ParseErrorType};

use codegen_go::DEFAULT_TAPE_SIZE;

/// Settings for a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cells in the generated program's tape
    pub tape_size: usize,
    /// Optimization level; 0 disables the peephole pass
    pub level: u32,
    /// Reject unbalanced brackets before translating. When off, unbalanced
    /// programs produce mismatched nesting in the output.
    pub check_brackets: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tape_size: DEFAULT_TAPE_SIZE,
            level: 1,
            check_brackets: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.tape_size == 0 {
            return Err(Error::EmptyTape);
        }
        Ok(())
    }
}

/// Parses, optimizes and translates brainfuck source to a Go program.
pub fn translate(code: &[u8], config: &Config) -> Result<String, Error> {
    config.validate()?;

    let ir = if config.check_brackets {
        parse(code)?
    } else {
        scan(code)
    };
    let ir = ir.optimize(config.level);

    Ok(codegen_go::codegen(&ir, config.tape_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tape_is_rejected() {
        let config = Config { tape_size: 0, ..Config::default() };
        assert!(matches!(translate(b"+", &config), Err(Error::EmptyTape)));
    }

    #[test]
    fn unbalanced_rejected_by_default() {
        assert!(matches!(translate(b"[", &Config::default()), Err(Error::Parse(_))));
    }

    #[test]
    fn unbalanced_allowed_when_unchecked() {
        let config = Config { check_brackets: false, ..Config::default() };
        assert!(translate(b"[", &config).is_ok());
    }
}
