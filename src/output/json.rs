//! JSON output formatter for scan results.
//!
//! Provides machine-readable output for scripting.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "mode": "body",
//!   "action": "report",
//!   "duplicates": [
//!     {
//!       "key": "3b1f...",
//!       "files": ["/mail/cur/1", "/mail/cur/2"]
//!     }
//!   ],
//!   "summary": {
//!     "files_processed": 3,
//!     "duplicates_found": 1,
//!     "duplicates_removed": 0,
//!     "duplicate_groups": 1,
//!     "exit_code": 0,
//!     "exit_code_name": "MD000"
//!   }
//! }
//! ```
//!
//! In remove mode the groups describe the tree as scanned; only the first
//! file of each group still exists afterwards.

use std::io::Write;

use serde::Serialize;

use crate::config::Action;
use crate::duplicates::{DuplicateGroup, DuplicateIndex, RunStatistics};
use crate::error::ExitCode;
use crate::scanner::FingerprintMode;

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// Fingerprint key shared by the files (non-UTF-8 bytes shown lossily)
    pub key: String,
    /// Paths in discovery order, original first
    pub files: Vec<String>,
}

impl JsonDuplicateGroup {
    /// Create a JSON duplicate group from a DuplicateGroup.
    #[must_use]
    pub fn from_duplicate_group(group: &DuplicateGroup) -> Self {
        Self {
            key: String::from_utf8_lossy(&group.key).into_owned(),
            files: group
                .files
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Regular files visited
    pub files_processed: usize,
    /// Files that joined an existing group
    pub duplicates_found: usize,
    /// Files deleted
    pub duplicates_removed: usize,
    /// Groups with two or more files
    pub duplicate_groups: usize,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "MD000")
    pub exit_code_name: String,
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Fingerprint strategy used
    pub mode: FingerprintMode,
    /// Action taken
    pub action: Action,
    /// List of duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Run statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from a completed run.
    #[must_use]
    pub fn new(
        mode: FingerprintMode,
        action: Action,
        index: &DuplicateIndex,
        stats: &RunStatistics,
        exit_code: ExitCode,
    ) -> Self {
        let duplicates: Vec<_> = index
            .duplicate_groups()
            .map(JsonDuplicateGroup::from_duplicate_group)
            .collect();

        Self {
            mode,
            action,
            summary: JsonSummary {
                files_processed: stats.files_processed,
                duplicates_found: stats.duplicates_found,
                duplicates_removed: stats.duplicates_removed,
                duplicate_groups: duplicates.len(),
                exit_code: exit_code.as_i32(),
                exit_code_name: exit_code.code_prefix().to_string(),
            },
            duplicates,
        }
    }

    /// Write pretty-printed JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
