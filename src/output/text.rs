//! Plain-text report and statistics block.
//!
//! # Format
//!
//! One line per duplicate group, paths separated by single spaces, the
//! retained original first:
//!
//! ```text
//! /mail/cur/1 /mail/cur/2
//! ```
//!
//! Followed by the statistics block:
//!
//! ```text
//! ----------------------------------------
//! Files processed:    3
//! Duplicates found:   1
//! Duplicates removed: 0
//! ----------------------------------------
//! ```

use std::io::{self, Write};

use crate::duplicates::{DuplicateGroup, DuplicateIndex, RunStatistics};

/// Line that opens and closes the statistics block.
pub const STATS_SEPARATOR: &str = "----------------------------------------";

/// Text formatter over a completed index.
#[derive(Debug, Clone, Copy)]
pub struct TextOutput<'a> {
    index: &'a DuplicateIndex,
    stats: &'a RunStatistics,
}

impl<'a> TextOutput<'a> {
    /// Create a formatter for an index and its statistics.
    #[must_use]
    pub fn new(index: &'a DuplicateIndex, stats: &'a RunStatistics) -> Self {
        Self { index, stats }
    }

    /// Write one line per duplicate group.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_groups<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for group in self.index.duplicate_groups() {
            writeln!(writer, "{}", format_group(group))?;
        }
        Ok(())
    }

    /// Write the statistics block.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_statistics<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_statistics(self.stats, writer)
    }

    /// Write the group listing followed by the statistics block.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_report<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.write_groups(writer)?;
        self.write_statistics(writer)
    }
}

/// Format a group as a single space-separated line.
#[must_use]
pub fn format_group(group: &DuplicateGroup) -> String {
    group
        .files
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the statistics block for `stats`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_statistics<W: Write>(stats: &RunStatistics, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", STATS_SEPARATOR)?;
    writeln!(writer, "Files processed:    {}", stats.files_processed)?;
    writeln!(writer, "Duplicates found:   {}", stats.duplicates_found)?;
    writeln!(writer, "Duplicates removed: {}", stats.duplicates_removed)?;
    writeln!(writer, "{}", STATS_SEPARATOR)
}
