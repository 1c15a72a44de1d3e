//! Run configuration.
//!
//! The command line is turned into a [`RunConfig`] exactly once, before
//! any traversal. Mutually exclusive flags collapse into two closed
//! enums, [`FingerprintMode`] and [`Action`], so the rest of the program
//! never looks at raw booleans.
//!
//! There is no configuration file; `RUST_LOG` is the only environment
//! input (see [`crate::logging`]).

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::cli::{Cli, OutputFormat};
use crate::scanner::FingerprintMode;

/// What to do with the duplicates once they are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Print duplicate groups, touch nothing.
    #[default]
    Report,
    /// Delete all but the first copy of each group.
    Remove,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Report => write!(f, "report"),
            Action::Remove => write!(f, "remove"),
        }
    }
}

/// Invalid flag combinations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Both fingerprint modes were requested.
    #[error("--body and --message-id cannot be used together")]
    ConflictingModes,

    /// Both actions were requested.
    #[error("--print and --force cannot be used together")]
    ConflictingActions,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Maildir root to scan
    pub root: PathBuf,
    /// Fingerprint strategy
    pub mode: FingerprintMode,
    /// Report or remove
    pub action: Action,
    /// Report format
    pub output: OutputFormat,
}

impl RunConfig {
    /// Build a configuration from individual mode and action flags.
    ///
    /// With neither mode flag set the body fingerprint is used; with
    /// neither action flag set duplicates are only reported.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when both flags of a pair are set.
    pub fn from_flags(
        root: PathBuf,
        body: bool,
        message_id: bool,
        print: bool,
        force: bool,
    ) -> Result<Self, ConfigError> {
        let mode = match (body, message_id) {
            (true, true) => return Err(ConfigError::ConflictingModes),
            (_, true) => FingerprintMode::MessageId,
            _ => FingerprintMode::Body,
        };

        let action = match (print, force) {
            (true, true) => return Err(ConfigError::ConflictingActions),
            (_, true) => Action::Remove,
            _ => Action::Report,
        };

        Ok(Self {
            root,
            mode,
            action,
            output: OutputFormat::default(),
        })
    }

    /// Build a configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for conflicting flags that bypassed clap.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let config = Self::from_flags(
            cli.path.clone(),
            cli.body,
            cli.message_id,
            cli.print,
            cli.force,
        )?;
        Ok(config.with_output(cli.output))
    }

    /// Set the report format.
    #[must_use]
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}
