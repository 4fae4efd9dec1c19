//! CLI route: single route table and run context. Dispatches to the
//! generation entry points and presentation.

use crate::cli::parse::{Commands, InputArgs};
use crate::cli::presentation::{
    format_config, format_generation_json, format_generation_text, format_plan_json,
    format_plan_text,
};
use crate::config::{ConfigLoader, DocskelConfig};
use crate::error::{ApiError, InputError};
use crate::generation::{error_object, run_generate, run_preview, GenerateRequest};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: the resolved configuration.
/// Built from the project root and optional config path using ConfigLoader only.
pub struct RunContext {
    config: DocskelConfig,
}

impl RunContext {
    /// Create run context from project root and optional config path.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&project_root)?
        };
        Ok(Self::from_config(config.validated()?))
    }

    pub fn from_config(config: DocskelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DocskelConfig {
        &self.config
    }

    /// Execute a parsed command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        debug!(command = command.name(), "Dispatching command");
        match command {
            Commands::Generate { input, format } => self.handle_generate(input, format),
            Commands::Plan { input, format } => self.handle_plan(input, format),
            Commands::Config { format } => format_config(&self.config, format),
        }
    }

    fn handle_generate(&self, input: &InputArgs, format: &str) -> Result<String, ApiError> {
        let request = self.build_request(input).map_err(|e| render_input_error(e, format))?;
        let outcome = run_generate(&request).map_err(|e| render_input_error(e, format))?;

        let rendered = if format == "json" {
            format_generation_json(&outcome.summary)?
        } else {
            format_generation_text(&outcome.summary, &request.output_dir)
        };

        match outcome.error {
            None => {
                info!(files = outcome.summary.total_files, "Generate finished");
                Ok(rendered)
            }
            Some(e) => Err(ApiError::Generation(e).with_output(rendered)),
        }
    }

    fn handle_plan(&self, input: &InputArgs, format: &str) -> Result<String, ApiError> {
        let request = self.build_request(input).map_err(|e| render_input_error(e, format))?;
        let preview = run_preview(&request).map_err(|e| render_input_error(e, format))?;
        if format == "json" {
            format_plan_json(&preview)
        } else {
            Ok(format_plan_text(&preview, &request.output_dir))
        }
    }

    /// Merge CLI input flags over the configured generation settings.
    fn build_request(&self, input: &InputArgs) -> Result<GenerateRequest, ApiError> {
        let generation = &self.config.generation;
        let commands_json = match (&input.commands, &input.commands_file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => read_commands_file(path)?,
            (None, None) => return Err(InputError::EmptyArgument.into()),
        };

        let program_name = match &input.program_name {
            Some(name) if name.is_empty() => None,
            Some(name) => Some(name.clone()),
            None => generation.program_name().map(str::to_string),
        };

        Ok(GenerateRequest {
            commands_json,
            output_dir: input
                .output
                .clone()
                .unwrap_or_else(|| generation.output_dir.clone()),
            template_dir: input
                .template
                .clone()
                .unwrap_or_else(|| generation.template_dir.clone()),
            program_name,
            follow_symlinks: generation.follow_symlinks,
        })
    }
}

fn read_commands_file(path: &Path) -> Result<String, ApiError> {
    std::fs::read_to_string(path).map_err(|source| {
        InputError::CommandsFile {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// In json mode input failures still print the `{ "error": ... }` value.
fn render_input_error(err: ApiError, format: &str) -> ApiError {
    if format != "json" || !matches!(err, ApiError::Input(_)) {
        return err;
    }
    let rendered = error_object(&err).to_string();
    err.with_output(rendered)
}
