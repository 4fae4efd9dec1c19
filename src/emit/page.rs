//! Command page emitter: one stub page per command, never overwritten

use crate::command::Command;
use crate::error::GenerationError;
use crate::generation::GenerationContext;
use crate::template::{retitle_headings, substitute, COMMAND_PAGE_TEMPLATE};
use crate::tree::DirPath;
use std::path::PathBuf;
use tracing::info;

/// Extension of generated documentation pages
pub const PAGE_EXTENSION: &str = "md";

/// Relative location of a command's page: its namespace directory and file name.
pub fn page_location(command: &Command) -> (DirPath, String) {
    (
        DirPath::from(command.namespace.as_slice()),
        format!("{}.{}", command.name, PAGE_EXTENSION),
    )
}

/// `/`-joined page path relative to the output root.
pub fn page_relative_path(command: &Command) -> String {
    let (dir, file_name) = page_location(command);
    if dir.is_empty() {
        file_name
    } else {
        format!("{}/{}", dir, file_name)
    }
}

/// Render a command page from `template`, or the built-in stub.
///
/// A template has its `# {...}` heading retitled to the command name and
/// every bare `{}` filled with the description.
pub fn render_page(command: &Command, template: Option<&str>) -> String {
    let description = command.display_description();
    match template {
        Some(text) => {
            let retitled = retitle_headings(text, &command.name);
            substitute(&retitled, &[], Some(&description))
        }
        None => default_page(command, &description),
    }
}

fn default_page(command: &Command, description: &str) -> String {
    let parameters: String = command
        .parameters
        .iter()
        .map(|p| {
            if p.description.is_empty() {
                format!("{}\n", p.name)
            } else {
                format!("{}    {}\n", p.name, p.description)
            }
        })
        .collect();

    format!(
        "---
sidebar_position: 10
---

# {name}
Overview: {description}

Parameters:
```bash
{parameters}```

Example:
```bash
{invocation}
```

Result:
```bash

```
",
        name = command.name,
        description = description,
        parameters = parameters,
        invocation = command.invocation(),
    )
}

/// Emit the page for `command` unless a file already exists at its path.
///
/// Returns the relative path written, or `None` when the page was left
/// untouched.
pub fn emit_page(
    ctx: &mut GenerationContext,
    command: &Command,
) -> Result<Option<String>, GenerationError> {
    let (dir, file_name) = page_location(command);
    let page_path: PathBuf = dir.to_fs_path(ctx.output_root()).join(&file_name);

    if page_path.exists() {
        info!(file = %page_relative_path(command), "Skipping existing page");
        return Ok(None);
    }

    ctx.create_dir(&dir)?;
    let template = ctx.templates().load_text(COMMAND_PAGE_TEMPLATE);
    let content = render_page(command, template.as_deref());
    ctx.write_file(&page_path, &content).map(Some)
}
