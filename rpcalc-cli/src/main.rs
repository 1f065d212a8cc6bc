mod calculator;
mod cli_args;
mod usage_error;

use calculator::StdioCalculator;
use clap::error::ErrorKind;
use clap::Parser;
use cli_args::CliArgs;

fn main() {
    // clap exits with its own code 2 on bad options; remap those to the
    // usage exit code so option errors and token errors agree.
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let exit_code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(exit_code);
        }
    };
    let calculator = StdioCalculator::new(args);
    std::process::exit(calculator.run());
}
