//! Label conflict resolution
//!
//! A new directory conflicts when its display label is already declared by a
//! category metadata file anywhere in the output tree. Malformed or
//! unreadable category files never match.

use crate::tree::Walker;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Read the `label` declared by a category metadata file.
pub fn read_label(path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(file = %path.display(), error = %e, "Skipping unreadable category file");
            return None;
        }
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(value) => value.get("label").and_then(Value::as_str).map(str::to_string),
        Err(e) => {
            debug!(file = %path.display(), error = %e, "Skipping malformed category file");
            None
        }
    }
}

/// Scan the tree under `walker` for a category file declaring `label`.
pub fn has_label_conflict(walker: &Walker, label: &str) -> bool {
    walker
        .category_files()
        .iter()
        .any(|path| read_label(path).as_deref() == Some(label))
}

/// Labels declared across the output tree.
///
/// Built with one scan, then kept current with [`LabelIndex::record`] as
/// category files are written, so `contains` answers exactly what a fresh
/// [`has_label_conflict`] scan would.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    labels: HashSet<String>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(walker: &Walker) -> Self {
        let labels: HashSet<String> = walker
            .category_files()
            .iter()
            .filter_map(|path| read_label(path))
            .collect();
        debug!(labels = labels.len(), "Indexed existing category labels");
        Self { labels }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Note a label written to the tree.
    pub fn record(&mut self, label: &str) {
        self.labels.insert(label.to_string());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
