//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources replace earlier ones key by key:
//! defaults, global file, project file, environment.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

use crate::command::DEFAULT_PROGRAM_NAME;

pub const DEFAULT_OUTPUT_DIR: &str = "./docs";
pub const DEFAULT_TEMPLATE_DIR: &str = "./src/statics";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("generation.output_dir", DEFAULT_OUTPUT_DIR)?
        .set_default("generation.template_dir", DEFAULT_TEMPLATE_DIR)?
        .set_default("generation.program_name", DEFAULT_PROGRAM_NAME)?
        .set_default("generation.follow_symlinks", false)
}
