//! CLI parse: clap types for docskel. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// docskel - documentation skeleton generator for command-line tools
#[derive(Parser, Debug)]
#[command(name = "docskel")]
#[command(about = "Generate a documentation skeleton from a list of CLI commands")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides config file discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Where the command list comes from and where the tree goes
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON array of command strings, e.g. '["acli network nic list"]'
    #[arg(
        long,
        conflicts_with = "commands_file",
        required_unless_present = "commands_file"
    )]
    pub commands: Option<String>,

    /// File containing the JSON array of command strings
    #[arg(long)]
    pub commands_file: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Template directory (overrides config)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Leading program name stripped from each command (overrides config)
    #[arg(long)]
    pub program_name: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate category metadata and command pages
    Generate {
        #[command(flatten)]
        input: InputArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show what generate would create without writing anything
    Plan {
        #[command(flatten)]
        input: InputArgs,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Print the resolved configuration
    Config {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml", value_parser = ["toml", "json"])]
        format: String,
    },
}

impl Commands {
    /// Command name for logging (e.g. "generate").
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Generate { .. } => "generate",
            Commands::Plan { .. } => "plan",
            Commands::Config { .. } => "config",
        }
    }
}
