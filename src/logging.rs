//! Logging setup.
//!
//! `log` facade with the `env_logger` backend, writing to stderr so log
//! lines never mix with the report on stdout. `RUST_LOG`, when set, takes
//! precedence over the `-q`/`-v` flags.
//!
//! | Flags   | Level | Shows                                      |
//! |---------|-------|--------------------------------------------|
//! | `-q`    | error | fatal errors only                          |
//! | (none)  | warn  | nothing on a clean run                     |
//! | `-v`    | info  | directories scanned, each removed file     |
//! | `-vv`   | debug | per-group decisions, with the module path  |
//! | `-vvv`  | trace | every file and digest                      |

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Initialize logging for the process.
///
/// # Panics
///
/// Panics if a logger is already installed; call it once from `main`.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();
    builder.filter_level(determine_level(verbose, quiet));
    // RUST_LOG directives are applied after the flag level, so they win
    builder.parse_env("RUST_LOG");

    let with_module = verbose >= 2;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        write!(buf, "{style}{:<5}{style:#} ", record.level())?;
        if with_module {
            write!(buf, "[{}] ", record.module_path().unwrap_or("maildedup"))?;
        }
        writeln!(buf, "{}", record.args())
    });

    builder.init();
    log::debug!("Log level: {}", current_level_name());
}

/// Map the CLI flags to a level filter. `quiet` beats `verbose`.
fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Name of the active maximum log level.
pub fn current_level_name() -> &'static str {
    match log::max_level() {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}
