//! Category emitter: per-directory sidebar metadata
//!
//! Every new directory receives exactly one `_category_.json`. When its label
//! already appears elsewhere in the tree the conflict variant is written,
//! which links to a sibling `category.md` landing page instead of a
//! generated index.

use crate::error::GenerationError;
use crate::generation::GenerationContext;
use crate::template::{
    substitute, CATEGORY_CONFLICT_TEMPLATE, CATEGORY_TEMPLATE, LANDING_PAGE_TEMPLATE,
};
use crate::tree::{DirPath, CATEGORY_FILE_NAME};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::info;

/// File name of the conflict landing page
pub const LANDING_PAGE_FILE_NAME: &str = "category.md";

const LANDING_PAGE_DEFAULT: &str = "---
sidebar_position: 1
---

{description of this category}

import DocCardList from '@theme/DocCardList';

<DocCardList />
";

/// A planned directory and its conflict decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub path: DirPath,
    pub label: String,
    /// Decided before this directory's own files are written
    pub conflict: bool,
}

impl CategoryRecord {
    pub fn new(path: DirPath, conflict: bool) -> Self {
        let label = path.label().to_string();
        Self {
            path,
            label,
            conflict,
        }
    }

    /// Document id the conflict variant links to.
    pub fn landing_doc_id(&self) -> String {
        format!("{}/category", self.path)
    }
}

/// Plain category metadata, from `template` when given.
///
/// Only `label` is overridden on a template; every other field passes
/// through.
pub fn plain_category(label: &str, template: Option<Value>) -> Value {
    match template {
        Some(mut value) => {
            set_field(&mut value, "label", json!(label));
            value
        }
        None => json!({
            "label": label,
            "position": 1,
            "link": {
                "type": "generated-index",
                "description": format!("{} related documents", label),
            }
        }),
    }
}

/// Conflict-variant category metadata linking to the landing page.
///
/// On a template, `label` and `link.id` are overridden; a missing or
/// non-object `link` is replaced by an object holding just the id.
pub fn conflict_category(record: &CategoryRecord, template: Option<Value>) -> Value {
    let doc_id = record.landing_doc_id();
    match template {
        Some(mut value) => {
            set_field(&mut value, "label", json!(record.label));
            if let Some(object) = value.as_object_mut() {
                let link = object
                    .entry("link")
                    .or_insert_with(|| Value::Object(Map::new()));
                if !link.is_object() {
                    *link = Value::Object(Map::new());
                }
                set_field(link, "id", json!(doc_id));
            }
            value
        }
        None => json!({
            "label": record.label,
            "position": 1,
            "link": {
                "type": "doc",
                "id": doc_id,
            }
        }),
    }
}

/// Landing page body. Template placeholders mentioning `label` receive the
/// label; the built-in page leaves its body placeholder for the author.
pub fn landing_page(label: &str, template: Option<String>) -> String {
    match template {
        Some(text) => substitute(&text, &[("label", label)], None),
        None => LANDING_PAGE_DEFAULT.to_string(),
    }
}

fn set_field(value: &mut Value, key: &str, field: Value) {
    if let Some(object) = value.as_object_mut() {
        object.insert(key.to_string(), field);
    }
}

/// Serialize with 4-space indentation, leaving non-ASCII text unescaped.
pub fn to_category_json(value: &Value) -> Result<String, GenerationError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the category artifacts for one new directory.
///
/// Returns the relative paths written: the metadata file, followed by the
/// landing page for the conflict variant.
pub fn emit_category(
    ctx: &mut GenerationContext,
    record: &CategoryRecord,
) -> Result<Vec<String>, GenerationError> {
    let dir = ctx.create_dir(&record.path)?;
    let mut written = Vec::with_capacity(2);

    if record.conflict {
        info!(path = %record.path, label = %record.label, "Label conflict, writing landing page variant");
        let template = ctx.templates().load_structured(CATEGORY_CONFLICT_TEMPLATE);
        let metadata = to_category_json(&conflict_category(record, template))?;
        written.push(ctx.write_file(&dir.join(CATEGORY_FILE_NAME), &metadata)?);

        let template = ctx.templates().load_text(LANDING_PAGE_TEMPLATE);
        let page = landing_page(&record.label, template);
        written.push(ctx.write_file(&dir.join(LANDING_PAGE_FILE_NAME), &page)?);
    } else {
        let template = ctx.templates().load_structured(CATEGORY_TEMPLATE);
        let metadata = to_category_json(&plain_category(&record.label, template))?;
        written.push(ctx.write_file(&dir.join(CATEGORY_FILE_NAME), &metadata)?);
    }

    Ok(written)
}
