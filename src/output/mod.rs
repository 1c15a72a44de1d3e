//! Output formatters for scan results.
//!
//! This module provides the report formats:
//! - Plain text: one line per duplicate group plus a statistics block
//! - JSON for automation and scripting
//!
//! # Example
//!
//! ```no_run
//! use maildedup::duplicates::DuplicateFinder;
//! use maildedup::output::TextOutput;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (index, stats) = finder.find_duplicates(Path::new("/home/user/Maildir")).unwrap();
//!
//! let output = TextOutput::new(&index, &stats);
//! output.write_report(&mut std::io::stdout()).unwrap();
//! ```

pub mod json;
pub mod text;

// Re-export main types
pub use json::JsonOutput;
pub use text::{write_statistics, TextOutput, STATS_SEPARATOR};
