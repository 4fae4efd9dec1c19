//! Generation
//!
//! Sequences the three phases of a run (plan new directories, write their
//! category metadata, write command pages) over an explicit per-run
//! [`GenerationContext`], and reports what was written.

pub mod context;
pub mod manifest;
pub mod orchestrator;
pub mod plan;
pub mod run;

pub use context::GenerationContext;
pub use manifest::{GenerationSummary, Manifest};
pub use orchestrator::{GenerationOutcome, Generator};
pub use plan::{resolve_category, GenerationPreview, PlannedDirectory};
pub use run::{error_object, parse_request_commands, run_generate, run_preview, GenerateRequest};
