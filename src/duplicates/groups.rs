//! Duplicate grouping by fingerprint key.
//!
//! # Overview
//!
//! [`DuplicateIndex`] maps each [`FingerprintKey`] to the ordered list of
//! files that produced it. Files are appended in discovery order, so the
//! first path of a group is always the one found first; that copy is the
//! original and survives removal.
//!
//! Groups are also kept in the order their key was first seen. Iterating
//! an index built from the same tree therefore always yields the same
//! sequence of groups.
//!
//! # Example
//!
//! ```
//! use maildedup::duplicates::DuplicateIndex;
//! use std::path::PathBuf;
//!
//! let mut index = DuplicateIndex::new();
//! index.record("k1", PathBuf::from("cur/1"));
//! index.record("k1", PathBuf::from("cur/2"));
//! index.record("k2", PathBuf::from("new/3"));
//!
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.duplicate_groups().count(), 1);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::FingerprintKey;

/// Files sharing one fingerprint key, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Fingerprint shared by every file in the group
    pub key: FingerprintKey,
    /// Paths in the order they were discovered
    pub files: Vec<PathBuf>,
}

impl DuplicateGroup {
    /// Create a group holding its first file.
    #[must_use]
    pub fn new(key: FingerprintKey, first: PathBuf) -> Self {
        Self {
            key,
            files: vec![first],
        }
    }

    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Check if this group holds actual duplicates (2+ files).
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.files.len() > 1
    }

    /// The first-discovered file, which is kept.
    #[must_use]
    pub fn original(&self) -> Option<&Path> {
        self.files.first().map(PathBuf::as_path)
    }

    /// Every file after the original.
    #[must_use]
    pub fn duplicates(&self) -> &[PathBuf] {
        self.files.get(1..).unwrap_or_default()
    }

    /// Number of duplicate copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.files.len().saturating_sub(1)
    }
}

/// Mapping from fingerprint key to the group of files sharing it.
#[derive(Debug, Clone, Default)]
pub struct DuplicateIndex {
    /// Groups in first-seen key order
    groups: Vec<DuplicateGroup>,
    /// Key to position in `groups`
    positions: HashMap<FingerprintKey, usize>,
}

impl DuplicateIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the group for `key`, creating the group if needed.
    ///
    /// Returns `true` when the file joined an existing group, i.e. it is
    /// a duplicate of something recorded earlier. Keys are compared as
    /// raw bytes.
    pub fn record(&mut self, key: impl Into<FingerprintKey>, path: PathBuf) -> bool {
        let key = key.into();
        if let Some(&pos) = self.positions.get(&key) {
            let group = &mut self.groups[pos];
            log::debug!(
                "Duplicate of {}: {}",
                group
                    .original()
                    .map_or_else(String::new, |p| p.display().to_string()),
                path.display()
            );
            group.files.push(path);
            true
        } else {
            self.positions.insert(key.clone(), self.groups.len());
            self.groups.push(DuplicateGroup::new(key, path));
            false
        }
    }

    /// Look up the group for a key.
    #[must_use]
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&DuplicateGroup> {
        self.positions.get(key.as_ref()).map(|&pos| &self.groups[pos])
    }

    /// All groups, singletons included, in first-seen key order.
    pub fn groups(&self) -> impl Iterator<Item = &DuplicateGroup> {
        self.groups.iter()
    }

    /// Groups with two or more files, in first-seen key order.
    pub fn duplicate_groups(&self) -> impl Iterator<Item = &DuplicateGroup> {
        self.groups.iter().filter(|g| g.has_duplicates())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of files recorded across all groups.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(DuplicateGroup::len).sum()
    }

    /// Number of groups with two or more files.
    #[must_use]
    pub fn duplicate_group_count(&self) -> usize {
        self.duplicate_groups().count()
    }

    /// Number of files beyond the first in every group.
    #[must_use]
    pub fn duplicate_file_count(&self) -> usize {
        self.groups.iter().map(DuplicateGroup::duplicate_count).sum()
    }
}
