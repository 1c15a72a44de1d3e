//! Duplicate removal.
//!
//! # Overview
//!
//! For every group with two or more files, everything except the first
//! discovered copy is permanently deleted. There is no trash and no undo.
//!
//! # Safety
//!
//! - Only [`DuplicateGroup::duplicates`] (everything after index 0) is
//!   ever passed to the deletion routine, so the original survives.
//! - The first failed deletion aborts the whole removal. Files already
//!   deleted stay deleted, nothing further is attempted.
//!
//! # Example
//!
//! ```no_run
//! use maildedup::actions::remove_duplicates;
//! use maildedup::duplicates::DuplicateFinder;
//! use std::path::Path;
//!
//! let finder = DuplicateFinder::with_defaults();
//! let (index, mut stats) = finder.find_duplicates(Path::new("/home/user/Maildir")).unwrap();
//! let removed = remove_duplicates(&index, &mut stats).unwrap();
//! println!("Removed {} duplicates", removed);
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::{DuplicateGroup, DuplicateIndex, RunStatistics};

/// Error type for deletion operations.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// File was not found (may have been deleted or moved).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to delete.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeleteError {
    /// Classify an I/O error for the given path.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }

    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }
}

/// Permanently delete a single file.
///
/// **WARNING**: This operation cannot be undone.
///
/// # Errors
///
/// - `NotFound` if the file doesn't exist
/// - `PermissionDenied` if deletion is not allowed
/// - `Io` for any other failure
pub fn permanent_delete(path: &Path) -> Result<(), DeleteError> {
    let size = fs::symlink_metadata(path)
        .map_err(|e| DeleteError::from_io(path, e))?
        .len();

    fs::remove_file(path).map_err(|e| {
        log::error!("Delete failed for {}: {}", path.display(), e);
        DeleteError::from_io(path, e)
    })?;

    log::info!("Removed duplicate: {} ({} bytes)", path.display(), size);
    Ok(())
}

/// Delete every duplicate of one group, keeping its original.
///
/// Returns the number of files deleted and bumps
/// `stats.duplicates_removed` once per deletion.
///
/// # Errors
///
/// Stops at the first failed deletion.
pub fn remove_group(
    group: &DuplicateGroup,
    stats: &mut RunStatistics,
) -> Result<usize, DeleteError> {
    let duplicates = group.duplicates();

    if let Some(original) = group.original() {
        log::debug!(
            "Keeping {} ({} duplicate(s))",
            original.display(),
            duplicates.len()
        );
    }

    for path in duplicates {
        permanent_delete(path)?;
        stats.duplicates_removed += 1;
    }

    Ok(duplicates.len())
}

/// Delete all but the first-discovered file of every duplicate group.
///
/// Returns the number of files deleted by this call.
///
/// # Errors
///
/// Stops at the first failed deletion; earlier deletions are not undone.
pub fn remove_duplicates(
    index: &DuplicateIndex,
    stats: &mut RunStatistics,
) -> Result<usize, DeleteError> {
    let mut removed = 0;
    for group in index.duplicate_groups() {
        removed += remove_group(group, stats)?;
    }

    log::info!("Removed {} duplicate file(s)", removed);
    Ok(removed)
}
