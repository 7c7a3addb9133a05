use thiserror::Error;

use crate::parser::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Parsing error: {0}")]
    Parse(#[from] ParseError),
    #[error("tape size must be at least one cell")]
    EmptyTape,
}
