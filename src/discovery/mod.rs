//! Scan target enumeration: directory traversal and file filtering.

pub mod walker;

pub use walker::{DirectoryWalker, WalkConfig, DEFAULT_IGNORE_DIRS};
