//! Output tree walker: discovers existing directories and category files

use crate::error::GenerationError;
use crate::tree::path::relative_slash_path;
use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// File name of per-directory category metadata
pub const CATEGORY_FILE_NAME: &str = "_category_.json";

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to descend into symbolic links (default: false)
    pub follow_symlinks: bool,
}

/// Recursive walker over the documentation output root
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    fn walkdir(&self) -> WalkDir {
        WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
    }

    /// All directories under the root as `/`-joined relative paths.
    ///
    /// A symlink to a directory counts as an existing directory even when
    /// links are not followed; it is listed but not descended into. A missing
    /// root yields an empty set.
    pub fn scan_directories(&self) -> Result<BTreeSet<String>, GenerationError> {
        if !self.root.exists() {
            return Ok(BTreeSet::new());
        }

        let mut dirs = BTreeSet::new();
        for entry in self.walkdir().min_depth(1) {
            let entry = entry
                .map_err(|e| GenerationError::Walk(format!("{}: {}", self.root.display(), e)))?;
            if is_directory(&entry) {
                if let Some(relative) = relative_slash_path(&self.root, entry.path()) {
                    dirs.insert(relative);
                }
            }
        }
        Ok(dirs)
    }

    /// Every category metadata file under the root.
    ///
    /// Unreadable entries are skipped rather than reported.
    pub fn category_files(&self) -> Vec<PathBuf> {
        if !self.root.exists() {
            return Vec::new();
        }
        let mut files: Vec<PathBuf> = self
            .walkdir()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry.file_type().is_file() && entry.file_name() == CATEGORY_FILE_NAME
            })
            .map(DirEntry::into_path)
            .collect();
        files.sort();
        files
    }
}

/// Directories, plus unfollowed symlinks whose target is a directory.
fn is_directory(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return true;
    }
    entry.path_is_symlink()
        && std::fs::metadata(entry.path())
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
}
