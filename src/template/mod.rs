//! Templates
//!
//! User-supplied templates live in a template directory under fixed names.
//! Any subset may be absent; emitters fall back to built-in defaults.

pub mod placeholder;
pub mod store;

pub use placeholder::{retitle_headings, substitute};
pub use store::{Template, TemplateStore};

/// Plain category metadata template
pub const CATEGORY_TEMPLATE: &str = "_category_.json";
/// Conflict-variant category metadata template
pub const CATEGORY_CONFLICT_TEMPLATE: &str = "_category_conflict.json";
/// Conflict landing page template
pub const LANDING_PAGE_TEMPLATE: &str = "category.md";
/// Command stub page template
pub const COMMAND_PAGE_TEMPLATE: &str = "command.md";
