use std::{error::Error, fmt::Display};

/// A malformed invocation, detected before any arithmetic happens.
/// These exit with code 1 and get the help text printed after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    WrongArgumentCount(usize),
    InvalidInteger(String),
    MultiCharacterOperator(String),
    UnaryFormRequiresFactorial,
    FactorialIsUnary,
    UnknownOperation(char),
}

impl Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UsageError::WrongArgumentCount(count) => {
                write!(f, "invalid number of arguments ({})", count)
            }
            UsageError::InvalidInteger(token) => {
                write!(f, "invalid integer: {}", token)
            }
            UsageError::MultiCharacterOperator(token) => {
                write!(f, "operation must be a single character, got '{}'", token)
            }
            UsageError::UnaryFormRequiresFactorial => {
                write!(f, "unary form requires '!': N !")
            }
            UsageError::FactorialIsUnary => {
                write!(f, "'!' must be used in unary form: N !")
            }
            UsageError::UnknownOperation(char) => {
                write!(f, "unknown operation '{}'", char)
            }
        }
    }
}

impl Error for UsageError {}
