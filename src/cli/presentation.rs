//! CLI presentation: text and json formatters per command family.

mod config;
mod generate;
mod plan;
mod shared;

pub use config::format_config;
pub use generate::{format_generation_json, format_generation_text};
pub use plan::{format_plan_json, format_plan_text};
