//! Category decisions for planned directories, and the dry-run preview model.

use crate::emit::CategoryRecord;
use crate::labels::LabelIndex;
use crate::tree::DirPath;
use serde::{Deserialize, Serialize};

/// Decide the variant for one planned directory and note its label.
///
/// The decision only sees labels written before this directory, so a
/// directory never conflicts with itself. Later directories sharing the
/// label do conflict.
pub fn resolve_category(index: &mut LabelIndex, dir: &DirPath) -> CategoryRecord {
    let record = CategoryRecord::new(dir.clone(), index.contains(dir.label()));
    index.record(&record.label);
    record
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedDirectory {
    pub path: String,
    pub label: String,
    pub conflict: bool,
}

impl From<&CategoryRecord> for PlannedDirectory {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            path: record.path.to_string(),
            label: record.label.clone(),
            conflict: record.conflict,
        }
    }
}

/// What a run would do, computed without writing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPreview {
    /// New directories in realization order
    pub directories: Vec<PlannedDirectory>,
    /// Pages that would be written, in command order
    pub pages: Vec<String>,
    /// Pages left alone because a file already exists (or will by then)
    pub skipped_pages: Vec<String>,
}

impl GenerationPreview {
    pub fn conflict_count(&self) -> usize {
        self.directories.iter().filter(|d| d.conflict).count()
    }
}
