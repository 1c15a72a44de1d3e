//! Duplicate finder: walks a maildir and builds the duplicate index.
//!
//! # Overview
//!
//! [`DuplicateFinder`] ties the pipeline together:
//! 1. **Validate** - the root must exist and be a directory
//! 2. **Walk** - enumerate non-hidden regular files (see [`crate::scanner::walker`])
//! 3. **Fingerprint** - compute each file's key with the selected strategy
//! 4. **Index** - record key → path in a [`DuplicateIndex`]
//!
//! The first walk or read failure aborts the scan. A partially built index
//! would under-report duplicates, so it is never returned.
//!
//! # Example
//!
//! ```no_run
//! use maildedup::duplicates::{DuplicateFinder, FinderConfig};
//! use maildedup::scanner::FingerprintMode;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::new(FinderConfig::new(FingerprintMode::MessageId));
//! let (index, stats) = finder.find_duplicates(Path::new("/home/user/Maildir")).unwrap();
//!
//! println!("{} files, {} duplicates", stats.files_processed, stats.duplicates_found);
//! for group in index.duplicate_groups() {
//!     println!("{:?}", group.files);
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::DuplicateIndex;
use crate::scanner::{
    FingerprintMode, Fingerprinter, HashError, ScanError, Walker, WalkerConfig,
};

/// Configuration for the duplicate finder.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// Fingerprint strategy
    pub mode: FingerprintMode,
    /// Walker configuration
    pub walker_config: WalkerConfig,
}

impl FinderConfig {
    /// Create a configuration for the given fingerprint mode.
    #[must_use]
    pub fn new(mode: FingerprintMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Set walker configuration.
    #[must_use]
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }
}

/// Counters for one run.
///
/// `duplicates_found` counts every file that joined an existing group, so
/// a group of three copies contributes two. After a successful force run
/// it equals `duplicates_removed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    /// Regular, non-hidden files visited
    pub files_processed: usize,
    /// Files whose key was already present in the index
    pub duplicates_found: usize,
    /// Files deleted by the remover
    pub duplicates_removed: usize,
}

impl RunStatistics {
    /// Create zeroed statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Errors that can occur during duplicate finding.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// The provided path does not exist.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// The provided path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while inspecting the root path.
    #[error("I/O error for {path}: {source}")]
    IoWithPath {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A message file could not be read.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Duplicate finder that walks a tree and fingerprints every message.
pub struct DuplicateFinder {
    config: FinderConfig,
    fingerprinter: Box<dyn Fingerprinter>,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        let fingerprinter = config.mode.fingerprinter();
        Self {
            config,
            fingerprinter,
        }
    }

    /// Create a finder with an explicit fingerprint strategy.
    ///
    /// The strategy's own mode replaces `config.mode`.
    #[must_use]
    pub fn with_fingerprinter(
        mut config: FinderConfig,
        fingerprinter: Box<dyn Fingerprinter>,
    ) -> Self {
        config.mode = fingerprinter.mode();
        Self {
            config,
            fingerprinter,
        }
    }

    /// Create a body-mode finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Active fingerprint mode.
    #[must_use]
    pub fn mode(&self) -> FingerprintMode {
        self.config.mode
    }

    /// Scan `path` and build the duplicate index.
    ///
    /// # Returns
    ///
    /// The completed [`DuplicateIndex`] and the [`RunStatistics`] with
    /// `files_processed` and `duplicates_found` filled in.
    ///
    /// # Errors
    ///
    /// Returns `FinderError` if:
    /// - The path does not exist or is not a directory
    /// - Any directory cannot be read
    /// - Any message file cannot be opened or read
    pub fn find_duplicates(
        &self,
        path: &Path,
    ) -> Result<(DuplicateIndex, RunStatistics), FinderError> {
        self.validate_root(path)?;

        log::info!(
            "Scanning {} ({} fingerprints)",
            path.display(),
            self.config.mode
        );

        let mut index = DuplicateIndex::new();
        let mut stats = RunStatistics::new();

        let walker = Walker::new(path, self.config.walker_config.clone());
        for entry in walker.walk() {
            let file = entry?;
            self.process_file(file, &mut index, &mut stats)?;
        }

        log::info!(
            "Scan complete: {} files, {} duplicate groups, {} duplicates",
            stats.files_processed,
            index.duplicate_group_count(),
            stats.duplicates_found
        );

        Ok((index, stats))
    }

    /// Fingerprint one file and record it.
    fn process_file(
        &self,
        file: PathBuf,
        index: &mut DuplicateIndex,
        stats: &mut RunStatistics,
    ) -> Result<(), FinderError> {
        stats.files_processed += 1;
        log::trace!("Processing {}", file.display());

        if let Some(key) = self.fingerprinter.fingerprint(&file)? {
            if index.record(key, file) {
                stats.duplicates_found += 1;
            }
        }

        Ok(())
    }

    fn validate_root(&self, path: &Path) -> Result<(), FinderError> {
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FinderError::PathNotFound(path.to_path_buf()),
            _ => FinderError::IoWithPath {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        if !metadata.is_dir() {
            return Err(FinderError::NotADirectory(path.to_path_buf()));
        }

        Ok(())
    }
}
