//! Directory walking with the filters applied before any content is read.

use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Extensions that are binary or otherwise not worth scanning.
const BINARY_EXTENSIONS: &[&str] = &[
    "pyc", "png", "jpg", "jpeg", "gif", "exe", "dll", "so", "bin", "zip", "tar", "gz", "pdf",
];

/// Directory names never descended into.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[".git", "node_modules", "__pycache__", ".venv", "venv"];

/// Files above this size are skipped outright.
const MAX_FILE_SIZE: u64 = 1_000_000;

/// Configuration for directory walking.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Directory names to prune. Starts with the defaults;
    /// `with_ignore_dirs` extends the set.
    pub ignore_dirs: Vec<String>,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()).collect(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl WalkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add directory names to the ignore set.
    pub fn with_ignore_dirs(mut self, dirs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ignore_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}

/// Walks a root path and yields the files worth scanning.
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Collect scannable files under `root`. A file root is yielded directly
    /// when it passes the same filters.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(ScanError::PathNotFound(root.display().to_string()));
        }

        let files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| self.should_descend(e))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.is_scannable(e))
            .map(|e| e.into_path())
            .collect();

        trace!(root = %root.display(), files = files.len(), "Enumerated scannable files");
        Ok(files)
    }

    /// Directory pruning happens here so ignored trees are never entered.
    /// The root itself is always allowed, even when hidden.
    fn should_descend(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let name = entry.file_name().to_string_lossy();
        !name.starts_with('.')
            && !self
                .config
                .ignore_dirs
                .iter()
                .any(|d| d.as_str() == name.as_ref())
    }

    fn is_scannable(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            return false;
        }

        if let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) {
            if BINARY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                return false;
            }
        }

        match entry.metadata() {
            Ok(meta) => meta.len() <= self.config.max_file_size,
            Err(_) => false,
        }
    }
}
