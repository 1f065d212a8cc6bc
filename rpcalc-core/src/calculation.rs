use std::fmt::Display;

use crate::{error::MathError, operators::Op};

/// One parsed invocation: two operands and an operator. The second
/// operand is unused (and zero) for the unary factorial form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    pub a: i32,
    pub b: i32,
    pub op: Op,
}

impl Calculation {
    pub fn binary(a: i32, b: i32, op: Op) -> Self {
        Calculation { a, b, op }
    }

    pub fn unary(a: i32, op: Op) -> Self {
        Calculation { a, b: 0, op }
    }

    /// Reject semantically invalid operand/operator combinations without
    /// computing anything. Evaluation would report the same errors, but
    /// callers that want to fail before doing work can ask here first.
    pub fn check(&self) -> Result<(), MathError> {
        match self.op {
            Op::Factorial if self.a < 0 => Err(MathError::NegativeFactorial),
            Op::Power if self.b < 0 => Err(MathError::NegativeExponent),
            Op::Divide if self.b == 0 => Err(MathError::DivisionByZero),
            _ => Ok(()),
        }
    }

    pub fn evaluate(&self) -> Result<Outcome, MathError> {
        let result = self.op.evaluate(self.a, self.b)?;
        Ok(Outcome {
            calculation: *self,
            result,
        })
    }
}

/// A completed calculation paired with its result. Its `Display` impl
/// is the calculator's output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub calculation: Calculation,
    pub result: i32,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Calculation { a, b, op } = self.calculation;
        match op {
            Op::Factorial => write!(f, "fact({}) = {}", a, self.result),
            Op::Power => write!(f, "{}^{} = {}", a, b, self.result),
            _ => write!(f, "{} {} {} = {}", a, op.symbol(), b, self.result),
        }
    }
}
