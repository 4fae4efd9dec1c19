//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; the route table calls the generation entry points.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, InputArgs};
pub use presentation::{
    format_config, format_generation_json, format_generation_text, format_plan_json,
    format_plan_text,
};
pub use route::RunContext;
