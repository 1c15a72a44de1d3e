//! Command-line interface definitions for maildedup.
//!
//! This module defines all CLI arguments using the clap derive API.
//! Mutually exclusive flag pairs are rejected by clap as usage errors
//! before any file is touched.
//!
//! # Example
//!
//! ```bash
//! # Report messages with identical bodies (default mode)
//! maildedup ~/Maildir
//!
//! # Group by Message-ID header instead
//! maildedup --message-id ~/Maildir
//!
//! # Delete all but the first copy, logging every removal
//! maildedup -v --force ~/Maildir
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Find and remove duplicate messages in a Maildir tree.
///
/// Messages are compared either by a SHA-1 digest of their body or by
/// their Message-ID header. Hidden files and directories are skipped.
#[derive(Debug, Parser)]
#[command(name = "maildedup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Maildir root directory to scan
    #[arg(value_name = "MAILDIR")]
    pub path: PathBuf,

    /// Compare messages by a SHA-1 digest of their body (default)
    #[arg(short, long)]
    pub body: bool,

    /// Compare messages by their Message-ID header
    #[arg(short, long, conflicts_with = "body")]
    pub message_id: bool,

    /// Only print duplicate groups (default)
    #[arg(short, long)]
    pub print: bool,

    /// Delete every duplicate except the first copy found
    ///
    /// Warning: Files cannot be recovered after deletion.
    #[arg(short, long, conflicts_with = "print")]
    pub force: bool,

    /// Increase verbosity level (-v progress and removals, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Print fatal errors as a JSON object on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Duplicate groups one per line, then a statistics block
    #[default]
    Text,
    /// JSON document for scripting
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
