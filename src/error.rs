//! Error types for the docskel documentation skeleton generator.

use std::path::PathBuf;
use thiserror::Error;

/// Input validation errors, raised before any filesystem mutation
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Received an empty command list argument. Check quote escaping, e.g. --commands '[\"acli network nic list\"]'")]
    EmptyArgument,

    #[error("Malformed JSON input: {0}. Make sure strings use double quotes.")]
    MalformedJson(String),

    #[error("Input must be a JSON array, e.g. '[\"cmd1\", \"cmd2\"]'")]
    NotAnArray,

    #[error("Command list cannot be empty")]
    EmptyList,

    #[error("Failed to read commands file {path:?}: {source}")]
    CommandsFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised while writing the output tree
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk output tree: {0}")]
    Walk(String),

    #[error("Failed to serialize category metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GenerationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerationError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Top-level errors surfaced to API and CLI callers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output formatting error: {0}")]
    Output(String),

    /// A failure whose result was still rendered; `output` goes to stdout
    #[error("{source}")]
    WithOutput {
        output: String,
        source: Box<ApiError>,
    },
}

impl ApiError {
    pub fn with_output(self, output: String) -> Self {
        ApiError::WithOutput {
            output,
            source: Box::new(self),
        }
    }

    /// Rendered output attached to this error, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            ApiError::WithOutput { output, .. } => Some(output.as_str()),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
