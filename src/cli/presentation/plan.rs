//! Plan command presentation: preview table and json.

use super::shared::{count, section_heading, to_pretty_json};
use crate::error::ApiError;
use crate::generation::GenerationPreview;
use comfy_table::{presets, Table};
use std::path::Path;

pub fn format_plan_text(preview: &GenerationPreview, output_root: &Path) -> String {
    let mut output = format!(
        "{}\n\n",
        section_heading(&format!("Generation plan: {}", output_root.display()))
    );

    if preview.directories.is_empty() {
        output.push_str("No new directories.\n");
    } else {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_header(vec!["Directory", "Label", "Category"]);
        for dir in &preview.directories {
            let variant = if dir.conflict { "conflict" } else { "plain" };
            table.add_row(vec![dir.path.as_str(), dir.label.as_str(), variant]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }
    output.push('\n');

    if !preview.pages.is_empty() {
        output.push_str("Would write pages:\n");
        for page in &preview.pages {
            output.push_str(&format!("  ✓ {}\n", page));
        }
        output.push('\n');
    }
    if !preview.skipped_pages.is_empty() {
        output.push_str("Would skip pages:\n");
        for page in &preview.skipped_pages {
            output.push_str(&format!("  ⊘ {} (already exists, skipped)\n", page));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "{}, {} with label conflicts, {}\n",
        count(preview.directories.len(), "new directory", "new directories"),
        preview.conflict_count(),
        count(preview.pages.len(), "new page", "new pages"),
    ));
    output
}

pub fn format_plan_json(preview: &GenerationPreview) -> Result<String, ApiError> {
    to_pretty_json(preview)
}
