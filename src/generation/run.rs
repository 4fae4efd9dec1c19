//! Single generate entry point: validate input, parse, generate.
//! CLI and other callers use this only; no orchestration in adapters.

use crate::command::{decode_command_list, parse_command_strings, Command};
use crate::error::ApiError;
use crate::generation::orchestrator::{GenerationOutcome, Generator};
use crate::generation::plan::GenerationPreview;
use crate::tree::WalkerConfig;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::{debug, info};

const LOGGED_COMMAND_SAMPLES: usize = 5;

/// Everything one generation invocation needs
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// JSON array of command strings
    pub commands_json: String,
    pub output_dir: PathBuf,
    pub template_dir: PathBuf,
    /// Leading token stripped from each command string, if present
    pub program_name: Option<String>,
    pub follow_symlinks: bool,
}

impl GenerateRequest {
    fn generator(&self) -> Generator {
        Generator::new(&self.output_dir, &self.template_dir).with_walker_config(WalkerConfig {
            follow_symlinks: self.follow_symlinks,
        })
    }
}

/// Validate and parse the request's command list.
///
/// Fails before anything touches the filesystem.
pub fn parse_request_commands(request: &GenerateRequest) -> Result<Vec<Command>, ApiError> {
    let strings = decode_command_list(&request.commands_json)?;
    info!(received = strings.len(), "Decoded command list");

    let commands = parse_command_strings(&strings, request.program_name.as_deref());
    info!(parsed = commands.len(), dropped = strings.len() - commands.len(), "Parsed commands");

    for (i, command) in commands.iter().take(LOGGED_COMMAND_SAMPLES).enumerate() {
        let namespace = if command.namespace.is_empty() {
            "(root)".to_string()
        } else {
            command.namespace.join(" > ")
        };
        debug!("  [{}] {} > {}", i + 1, namespace, command.name);
    }
    if commands.len() > LOGGED_COMMAND_SAMPLES {
        debug!("  ... and {} more", commands.len() - LOGGED_COMMAND_SAMPLES);
    }

    Ok(commands)
}

/// Generate the documentation skeleton for a request.
///
/// Input errors return `Err` with no side effects. Write failures are
/// reported inside the outcome alongside a best-effort summary.
pub fn run_generate(request: &GenerateRequest) -> Result<GenerationOutcome, ApiError> {
    let commands = parse_request_commands(request)?;
    let mut generator = request.generator();
    Ok(generator.generate(&commands))
}

/// Preview a request without writing anything.
pub fn run_preview(request: &GenerateRequest) -> Result<GenerationPreview, ApiError> {
    let commands = parse_request_commands(request)?;
    Ok(request.generator().preview(&commands)?)
}

/// The `{ "error": message }` result value.
pub fn error_object(err: &ApiError) -> Value {
    json!({ "error": err.to_string() })
}
