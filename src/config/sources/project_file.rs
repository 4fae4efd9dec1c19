//! Project config file source: docskel.toml and docskel.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use std::path::Path;
use tracing::debug;

pub const PROJECT_CONFIG_FILE: &str = "docskel.toml";
pub const ENV_NAME_VAR: &str = "DOCSKEL_ENV";

/// Add project config files to builder.
/// Precedence: docskel.toml (base) then docskel.{DOCSKEL_ENV}.toml.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    project_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base_config_path = project_root.join(PROJECT_CONFIG_FILE);
    if base_config_path.is_file() {
        debug!(config_path = %base_config_path.display(), "Loading project config");
        builder = builder.add_source(
            File::from(base_config_path)
                .format(FileFormat::Toml)
                .required(false),
        );
    }

    if let Some(env_name) = std::env::var(ENV_NAME_VAR).ok().filter(|v| !v.is_empty()) {
        let env_config_path = project_root.join(format!("docskel.{}.toml", env_name));
        if env_config_path.is_file() {
            debug!(config_path = %env_config_path.display(), "Loading environment config");
            builder = builder.add_source(
                File::from(env_config_path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
    }

    Ok(builder)
}
