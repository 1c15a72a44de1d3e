//! maildedup - Maildir Duplicate Finder
//!
//! Entry point for the maildedup CLI application.

use clap::Parser;
use maildedup::{
    cli::Cli,
    config::ConfigError,
    error::{ExitCode, StructuredError},
    logging::init_logging,
};

fn main() {
    // Help and version end the run like a usage error does: non-zero
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(ExitCode::UsageError.as_i32());
        }
    };

    init_logging(cli.verbose, cli.quiet);
    let json_errors = cli.json_errors;

    match maildedup::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = if err.downcast_ref::<ConfigError>().is_some() {
                ExitCode::UsageError
            } else {
                ExitCode::GeneralError
            };

            if json_errors {
                let structured = StructuredError::new(&err, exit_code);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    eprintln!("{}", json);
                } else {
                    eprintln!("[{}] Error: {}", exit_code.code_prefix(), err);
                }
            } else {
                eprintln!("[{}] Error: {}", exit_code.code_prefix(), err);
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
