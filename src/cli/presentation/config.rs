//! Config command presentation.

use super::shared::to_pretty_json;
use crate::config::DocskelConfig;
use crate::error::ApiError;

pub fn format_config(config: &DocskelConfig, format: &str) -> Result<String, ApiError> {
    if format == "json" {
        return to_pretty_json(config);
    }
    toml::to_string_pretty(config).map_err(|e| ApiError::Output(e.to_string()))
}
