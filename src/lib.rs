//! docskel: documentation skeleton generation
//!
//! Turns a flat list of CLI command strings into a nested documentation tree:
//! one directory per namespace segment with `_category_.json` sidebar
//! metadata, and one Markdown page per command. Existing pages are never
//! overwritten, so re-running against a populated tree only fills gaps.

pub mod cli;
pub mod command;
pub mod config;
pub mod emit;
pub mod error;
pub mod generation;
pub mod labels;
pub mod logging;
pub mod template;
pub mod tree;
