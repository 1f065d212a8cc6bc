use crate::{checked, error::MathError};

/// The operations the calculator knows, one per operator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Factorial,
}

impl Op {
    pub fn from_char(char: char) -> Option<Self> {
        match char {
            '+' => Some(Op::Add),
            '-' => Some(Op::Subtract),
            'x' => Some(Op::Multiply),
            '/' => Some(Op::Divide),
            '^' => Some(Op::Power),
            '!' => Some(Op::Factorial),
            _ => None,
        }
    }

    /// Whether this operator takes two operands (`A B OP`) rather than
    /// one (`N !`).
    pub fn is_binary(&self) -> bool {
        *self != Op::Factorial
    }

    pub fn symbol(&self) -> char {
        match self {
            Op::Add => '+',
            Op::Subtract => '-',
            Op::Multiply => 'x',
            Op::Divide => '/',
            Op::Power => '^',
            Op::Factorial => '!',
        }
    }

    pub fn evaluate(&self, a: i32, b: i32) -> Result<i32, MathError> {
        match self {
            Op::Add => checked::add(a, b),
            Op::Subtract => checked::sub(a, b),
            Op::Multiply => checked::mul(a, b),
            Op::Divide => checked::div(a, b),
            Op::Power => checked::pow(a, b),
            Op::Factorial => checked::fact(a),
        }
    }
}
