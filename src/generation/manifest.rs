//! Generation manifest: what a run wrote

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Files and directories written by one run, as `/`-joined paths relative
/// to the output root. Files skipped because they already existed are never
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    files: BTreeSet<String>,
    directories: BTreeSet<String>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_file(&mut self, relative: impl Into<String>) {
        self.files.insert(relative.into());
    }

    pub fn record_directory(&mut self, relative: impl Into<String>) {
        self.directories.insert(relative.into());
    }

    pub fn files(&self) -> &BTreeSet<String> {
        &self.files
    }

    pub fn directories(&self) -> &BTreeSet<String> {
        &self.directories
    }

    /// Build the run summary. Sizes are read from disk at call time; a
    /// recorded file that has since vanished contributes zero bytes.
    pub fn summary(&self, output_root: &Path) -> GenerationSummary {
        let total_size = self
            .files
            .iter()
            .filter_map(|relative| std::fs::metadata(output_root.join(relative)).ok())
            .map(|metadata| metadata.len())
            .sum();

        GenerationSummary {
            files: self.files.iter().cloned().collect(),
            directories: self.directories.iter().cloned().collect(),
            total_files: self.files.len(),
            total_size,
        }
    }
}

/// Reported result of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Sorted relative file paths
    pub files: Vec<String>,
    /// Sorted relative directory paths
    pub directories: Vec<String>,
    pub total_files: usize,
    /// Bytes on disk across `files`
    pub total_size: u64,
}
