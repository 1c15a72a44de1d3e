//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a maildir
//! tree and yielding every regular message file in it. Traversal is
//! sequential; children are sorted by name so two runs over the same tree
//! discover files in the same order.
//!
//! # Features
//!
//! - Hidden entries (name starting with `.`) are pruned together with
//!   their whole subtree
//! - Symbolic links are never followed; they and other special files
//!   (sockets, FIFOs, devices) are skipped
//! - Directory read and metadata failures are yielded as [`ScanError`]
//!
//! # Example
//!
//! ```no_run
//! use maildedup::scanner::{Walker, WalkerConfig};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Maildir"), WalkerConfig::default());
//! let files: Result<Vec<_>, _> = walker.walk().collect();
//! println!("Found {} messages", files.unwrap().len());
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{ScanError, WalkerConfig};

/// Directory walker for message file discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Walker configuration
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    /// * `config` - Walker configuration options
    #[must_use]
    pub fn new(path: &Path, config: WalkerConfig) -> Self {
        Self {
            root: path.to_path_buf(),
            config,
        }
    }

    /// Walk the directory tree, yielding the paths of regular files.
    ///
    /// Errors are yielded as [`ScanError`] values. Callers that need
    /// strict-fail semantics stop at the first `Err` (collecting into a
    /// `Result<Vec<_>, _>` does exactly that).
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf, ScanError>> + '_ {
        let mut walk_dir = WalkDir::new(&self.root).follow_links(false);
        if self.config.sort_by_name {
            walk_dir = walk_dir.sort_by_file_name();
        }

        let skip_hidden = self.config.skip_hidden;

        walk_dir
            .into_iter()
            .filter_entry(move |entry| !(skip_hidden && is_hidden(entry)))
            .filter_map(move |entry_result| match entry_result {
                Ok(entry) => self.process_entry(entry),
                Err(e) => Some(Err(self.handle_walkdir_error(e))),
            })
    }

    /// Turn a directory entry into a file path, if it is a regular file.
    fn process_entry(&self, entry: DirEntry) -> Option<Result<PathBuf, ScanError>> {
        let file_type = entry.file_type();

        if file_type.is_dir() {
            log::info!("Scanning directory: {}", entry.path().display());
            return None;
        }

        if file_type.is_symlink() {
            log::trace!("Skipping symlink: {}", entry.path().display());
            return None;
        }

        if !file_type.is_file() {
            log::trace!("Skipping special file: {}", entry.path().display());
            return None;
        }

        Some(Ok(entry.into_path()))
    }

    /// Convert a walkdir error into a [`ScanError`].
    fn handle_walkdir_error(&self, error: walkdir::Error) -> ScanError {
        let path = error
            .path()
            .map_or_else(|| self.root.clone(), Path::to_path_buf);
        let message = error.to_string();

        log::error!("Walker error for {}: {}", path.display(), message);

        match error.into_io_error() {
            Some(io_error) => ScanError::from_io(path, io_error),
            None => ScanError::Io {
                path,
                source: std::io::Error::other(message),
            },
        }
    }
}

/// Whether an entry below the root is hidden. The root itself never is.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && name_is_hidden(entry.file_name())
}

fn name_is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().starts_with(b".")
}
