//! Config facade: single entry for loading layered configuration.

use super::merge::merge_policy;
use super::sources::{environment, global_file, project_file};
use super::DocskelConfig;
use crate::error::ApiError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`DocskelConfig`] from defaults, config files and environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project rooted at `project_root`.
    ///
    /// Sources in increasing precedence: built-in defaults, global file,
    /// project file, `DOCSKEL__*` environment variables.
    pub fn load(project_root: &Path) -> Result<DocskelConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, project_root)?;
        let builder = environment::add_to_builder(builder);

        let config: DocskelConfig = builder.build()?.try_deserialize()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Load configuration from an explicit file, skipping file discovery.
    /// Environment variables still apply on top.
    pub fn load_from_file(path: &Path) -> Result<DocskelConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        let builder = environment::add_to_builder(builder);

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
