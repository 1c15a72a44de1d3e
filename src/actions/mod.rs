//! File actions module.
//!
//! The only action is permanent removal of duplicate copies:
//! every group keeps its first-discovered file and loses the rest.
//!
//! ```no_run
//! use maildedup::actions::permanent_delete;
//! use std::path::PathBuf;
//!
//! let path = PathBuf::from("/home/user/Maildir/cur/duplicate");
//! let result = permanent_delete(&path);
//! ```

pub mod delete;

// Re-export commonly used types
pub use delete::{permanent_delete, remove_duplicates, remove_group, DeleteError};
