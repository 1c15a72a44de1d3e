//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Walking a maildir and fingerprinting every message ([`finder`])
//! - Grouping files by fingerprint key ([`groups`])
//! - Run statistics (files processed, duplicates found and removed)

pub mod finder;
pub mod groups;

pub use finder::{DuplicateFinder, FinderConfig, FinderError, RunStatistics};
pub use groups::{DuplicateGroup, DuplicateIndex};
