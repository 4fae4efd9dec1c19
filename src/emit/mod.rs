//! Emitters for the two artifact families: per-directory category metadata
//! and per-command stub pages.

pub mod category;
pub mod page;

pub use category::{emit_category, CategoryRecord, LANDING_PAGE_FILE_NAME};
pub use page::{emit_page, page_relative_path, render_page};
