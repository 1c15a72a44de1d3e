//! maildedup - Maildir Duplicate Finder
//!
//! Finds duplicate email messages stored one per file in a Maildir tree and
//! optionally deletes all but the first copy of each. Messages are compared
//! by a SHA-1 digest of their body or by their `Message-ID` header.

pub mod actions;
pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, Write};

use crate::cli::{Cli, OutputFormat};
use crate::config::{Action, RunConfig};
use crate::duplicates::{DuplicateFinder, FinderConfig};
use crate::error::ExitCode;
use crate::output::{JsonOutput, TextOutput};

/// Run the application for parsed CLI arguments, reporting to stdout.
///
/// # Errors
///
/// Returns an error if the flags conflict, the scan fails, a duplicate
/// cannot be deleted, or the report cannot be written.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = RunConfig::from_cli(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}

/// Scan, then report or remove, writing all output to `out`.
///
/// Text output lists duplicate groups only in report mode; the
/// statistics block is written in both modes.
///
/// # Errors
///
/// Returns the first fatal error; nothing is written to `out` in that case.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> anyhow::Result<ExitCode> {
    log::debug!(
        "Run: root={} mode={} action={} output={} log={}",
        config.root.display(),
        config.mode,
        config.action,
        config.output,
        logging::current_level_name()
    );

    let finder = DuplicateFinder::new(FinderConfig::new(config.mode));
    let (index, mut stats) = finder.find_duplicates(&config.root)?;

    if config.action == Action::Remove {
        actions::remove_duplicates(&index, &mut stats)?;
    }

    let exit_code = ExitCode::Success;

    match config.output {
        OutputFormat::Text => {
            let text = TextOutput::new(&index, &stats);
            if config.action == Action::Report {
                text.write_groups(out)?;
            }
            text.write_statistics(out)?;
        }
        OutputFormat::Json => {
            JsonOutput::new(config.mode, config.action, &index, &stats, exit_code)
                .write_to(out)?;
        }
    }

    out.flush()?;
    Ok(exit_code)
}
