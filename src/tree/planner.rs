//! Directory planning: which namespace directories a run must create

use crate::command::Command;
use crate::tree::path::DirPath;
use std::collections::{BTreeSet, HashSet};

/// Compute the directories that do not exist yet.
///
/// Walks each command's namespace prefix chain in order. A prefix missing
/// from `existing` is planned once and then treated as known, so sibling
/// commands sharing a prefix never plan it twice. Every planned path has all
/// of its ancestors either planned or already existing.
pub fn plan_new_directories(existing: &BTreeSet<String>, commands: &[Command]) -> BTreeSet<DirPath> {
    let mut known: HashSet<String> = existing.iter().cloned().collect();
    let mut planned = BTreeSet::new();

    for command in commands {
        if command.namespace.is_empty() {
            continue;
        }
        let namespace = DirPath::from(command.namespace.as_slice());
        for prefix in namespace.prefixes() {
            if known.insert(prefix.to_string()) {
                planned.insert(prefix);
            }
        }
    }

    planned
}
