use clap::Parser;
use rpcalc_core::{Calculation, Op};

use crate::usage_error::UsageError;

const AFTER_HELP: &str = "\
Operations:
  +  addition
  -  subtraction
  x  multiplication
  /  division
  ^  power
  !  factorial";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Reverse Polish calculator over checked 32-bit integers",
    after_help = AFTER_HELP,
    override_usage = "rpcalc <A> <B> <OP>\n       rpcalc <N> !"
)]
pub struct CliArgs {
    /// RPN tokens: `A B OP` for a binary operation, or `N !` for factorial.
    #[arg(value_name = "TOKEN", allow_negative_numbers = true)]
    pub tokens: Vec<String>,
}

impl CliArgs {
    /// Turn the raw tokens into a `Calculation`, enforcing arity, strict
    /// integer operands, and operator/arity agreement.
    pub fn parse_calculation(&self) -> Result<Calculation, UsageError> {
        match self.tokens.as_slice() {
            [a, op] => {
                let a = parse_operand(a)?;
                let op = parse_operator(op)?;
                if op.is_binary() {
                    return Err(UsageError::UnaryFormRequiresFactorial);
                }
                Ok(Calculation::unary(a, op))
            }
            [a, b, op] => {
                let a = parse_operand(a)?;
                let b = parse_operand(b)?;
                let op = parse_operator(op)?;
                if !op.is_binary() {
                    return Err(UsageError::FactorialIsUnary);
                }
                Ok(Calculation::binary(a, b, op))
            }
            tokens => Err(UsageError::WrongArgumentCount(tokens.len())),
        }
    }
}

/// Strict whole-string parse into the 32-bit signed range. `str::parse`
/// already rejects trailing garbage, empty strings, and out-of-range
/// values, which is exactly the strictness we want.
fn parse_operand(token: &str) -> Result<i32, UsageError> {
    token
        .parse::<i32>()
        .map_err(|_| UsageError::InvalidInteger(token.to_owned()))
}

fn parse_operator(token: &str) -> Result<Op, UsageError> {
    let mut chars = token.chars();
    let char = match (chars.next(), chars.next()) {
        (Some(char), None) => char,
        _ => return Err(UsageError::MultiCharacterOperator(token.to_owned())),
    };
    Op::from_char(char).ok_or(UsageError::UnknownOperation(char))
}
