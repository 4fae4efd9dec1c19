//! Command model and input parsing
//!
//! Turns free-text command strings such as `"acli network nic list"` into
//! [`Command`] values: every token but the last is a namespace segment, the
//! last token is the command name.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Program name stripped from the front of command strings by default
pub const DEFAULT_PROGRAM_NAME: &str = "acli";

/// A single parameter descriptor attached to a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// One documented command
///
/// Identity is `(namespace, name)`. Commands are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Grouping segments preceding the leaf name, mapped to nested directories
    pub namespace: Vec<String>,
    /// Leaf command name; doubles as the page file stem
    pub name: String,
    /// Explicit description; empty means "derive from the invocation path"
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Command {
    pub fn new(namespace: Vec<String>, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// A command with an empty name never reaches the generator.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Namespace segments and name, space-joined.
    pub fn invocation(&self) -> String {
        let mut parts: Vec<&str> = self.namespace.iter().map(String::as_str).collect();
        parts.push(&self.name);
        parts.join(" ")
    }

    /// Explicit description when supplied, else `ns > ... > name`.
    pub fn display_description(&self) -> String {
        if !self.description.is_empty() {
            return self.description.clone();
        }
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{} > {}", self.namespace.join(" > "), self.name)
        }
    }
}

/// Parse one command string.
///
/// A leading `program_name` token is stripped case-insensitively. Fewer than
/// two remaining tokens, or any token that is not a plain path segment,
/// yields a command with an empty name.
pub fn parse_command_string(input: &str, program_name: Option<&str>) -> Command {
    let mut parts: Vec<&str> = input.split_whitespace().collect();

    if let (Some(first), Some(program)) = (parts.first(), program_name) {
        if !program.is_empty() && first.to_lowercase() == program.to_lowercase() {
            parts.remove(0);
        }
    }

    if let Some(token) = parts.iter().find(|token| !is_plain_segment(token)) {
        debug!(input, token = %token, "Rejecting command with a path-like token");
        return Command::new(Vec::new(), "");
    }

    match parts.split_last() {
        Some((name, namespace)) if !namespace.is_empty() => Command::new(
            namespace.iter().map(|s| s.to_string()).collect(),
            *name,
        ),
        _ => Command::new(Vec::new(), ""),
    }
}

/// Tokens become directory and file names, so they must stay inside their parent.
fn is_plain_segment(token: &str) -> bool {
    token != "." && token != ".." && !token.contains(['/', '\\'])
}

/// Parse a batch of command strings, dropping invalid entries.
pub fn parse_command_strings<S: AsRef<str>>(
    inputs: &[S],
    program_name: Option<&str>,
) -> Vec<Command> {
    inputs
        .iter()
        .map(|s| parse_command_string(s.as_ref(), program_name))
        .filter(Command::is_valid)
        .collect()
}

/// Decode and validate the JSON-encoded command list.
///
/// Elements are coerced to strings (non-string values use their JSON text)
/// and trimmed.
pub fn decode_command_list(commands_json: &str) -> Result<Vec<String>, InputError> {
    if commands_json.trim().is_empty() {
        return Err(InputError::EmptyArgument);
    }

    let raw: Value = serde_json::from_str(commands_json)
        .map_err(|e| InputError::MalformedJson(e.to_string()))?;

    let Value::Array(items) = raw else {
        return Err(InputError::NotAnArray);
    };
    if items.is_empty() {
        return Err(InputError::EmptyList);
    }

    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::String(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        })
        .collect())
}
