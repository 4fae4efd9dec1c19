//! Configuration System
//!
//! Layered configuration for generation paths and logging. Built-in defaults
//! are overridden by the global config file, the project's `docskel.toml`,
//! and `DOCSKEL__*` environment variables, in that order. CLI flags override
//! the resolved values last.

use crate::command::DEFAULT_PROGRAM_NAME;
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use merge::merge_policy::{DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATE_DIR};
pub use sources::project_file::PROJECT_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocskelConfig {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where generation reads templates and writes the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Leading token stripped from command strings; empty disables stripping
    #[serde(default = "default_program_name")]
    pub program_name: String,

    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_template_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_DIR)
}

fn default_program_name() -> String {
    DEFAULT_PROGRAM_NAME.to_string()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            template_dir: default_template_dir(),
            program_name: default_program_name(),
            follow_symlinks: false,
        }
    }
}

impl GenerationConfig {
    /// `None` when stripping is disabled.
    pub fn program_name(&self) -> Option<&str> {
        Some(self.program_name.as_str()).filter(|name| !name.is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.output_dir.as_os_str().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }
        if self.template_dir.as_os_str().is_empty() {
            return Err("Template directory cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("Generation: {0}")]
    Generation(String),

    #[error("Logging: {0}")]
    Logging(String),
}

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

impl DocskelConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.generation.validate() {
            errors.push(ValidationError::Generation(e));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            errors.push(ValidationError::Logging(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// [`DocskelConfig::validate`] folded into a single [`ApiError`].
    pub fn validated(self) -> Result<Self, ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }
}
