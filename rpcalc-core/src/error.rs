use std::{error::Error, fmt::Display};

/// An arithmetic operation failed or was given an operand outside its
/// domain. Every fallible operation in this crate reports one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    Overflow,
    DivisionByZero,
    NegativeFactorial,
    NegativeExponent,
}

impl Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::Overflow => write!(f, "overflow"),
            MathError::DivisionByZero => write!(f, "division by zero"),
            MathError::NegativeFactorial => write!(f, "factorial requires n >= 0"),
            MathError::NegativeExponent => write!(f, "power requires exp >= 0"),
        }
    }
}

impl Error for MathError {}
