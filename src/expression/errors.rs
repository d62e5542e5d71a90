use thiserror::Error;

/// Errors raised while reading an expression back from text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Invalid integer literal: {0}")]
    InvalidNumber(String),
    #[error("No integer result for {left} {op} {right}")]
    NoIntegerResult { left: i64, op: char, right: i64 },
}
