use clap::CommandFactory;
use colored::*;
use rpcalc_core::{MathError, Outcome};

use crate::cli_args::CliArgs;
use crate::usage_error::UsageError;

const USAGE_EXIT_CODE: i32 = 1;
const MATH_EXIT_CODE: i32 = 2;

/// Anything that can stop a single invocation. Usage errors get help
/// printed and exit 1; math errors exit 2 without help.
#[derive(Debug, PartialEq)]
enum CalcError {
    Usage(UsageError),
    Math(MathError),
}

impl From<UsageError> for CalcError {
    fn from(value: UsageError) -> Self {
        CalcError::Usage(value)
    }
}

impl From<MathError> for CalcError {
    fn from(value: MathError) -> Self {
        CalcError::Math(value)
    }
}

/// Drives the whole pipeline: parse tokens, check preconditions,
/// evaluate, print. Everything interesting happens in `run_impl`;
/// `run` only does the printing and exit-code mapping.
pub struct StdioCalculator {
    args: CliArgs,
}

impl StdioCalculator {
    pub fn new(args: CliArgs) -> Self {
        StdioCalculator { args }
    }

    pub fn run(&self) -> i32 {
        match self.run_impl() {
            Ok(outcome) => {
                println!("{}", outcome);
                0
            }
            Err(err) => {
                let message = match &err {
                    CalcError::Usage(err) => err.to_string(),
                    CalcError::Math(err) => err.to_string(),
                };
                eprintln!("{}", format!("Error: {}", message).red());
                match err {
                    CalcError::Usage(_) => {
                        eprintln!();
                        eprintln!("{}", CliArgs::command().render_help());
                        USAGE_EXIT_CODE
                    }
                    CalcError::Math(_) => MATH_EXIT_CODE,
                }
            }
        }
    }

    fn run_impl(&self) -> Result<Outcome, CalcError> {
        let calculation = self.args.parse_calculation()?;
        calculation.check()?;
        let outcome = calculation.evaluate()?;
        Ok(outcome)
    }
}
