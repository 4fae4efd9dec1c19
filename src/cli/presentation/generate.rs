//! Generate command presentation: run summary formatters.

use super::shared::{count, section_heading, to_pretty_json};
use crate::error::ApiError;
use crate::generation::GenerationSummary;
use std::path::Path;

pub fn format_generation_text(summary: &GenerationSummary, output_root: &Path) -> String {
    let mut output = format!(
        "{}\n\n",
        section_heading(&format!(
            "Documentation skeleton: {}",
            output_root.display()
        ))
    );

    if summary.directories.is_empty() {
        output.push_str("No new directories.\n");
    } else {
        output.push_str(&format!(
            "Created {}:\n",
            count(summary.directories.len(), "directory", "directories")
        ));
        for dir in &summary.directories {
            output.push_str(&format!("  ✓ {}/\n", dir));
        }
    }
    output.push('\n');

    if summary.files.is_empty() {
        output.push_str("No files written. Existing pages are never overwritten.\n");
    } else {
        output.push_str("Wrote files:\n");
        for file in &summary.files {
            output.push_str(&format!("  ✓ {}\n", file));
        }
        output.push('\n');
        output.push_str(&format!(
            "Total: {}, {} bytes\n",
            count(summary.total_files, "file", "files"),
            summary.total_size
        ));
    }

    output
}

/// The result value: `{ files, directories, total_files, total_size }`.
pub fn format_generation_json(summary: &GenerationSummary) -> Result<String, ApiError> {
    to_pretty_json(summary)
}
