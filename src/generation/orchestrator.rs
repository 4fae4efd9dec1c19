//! Generation orchestrator: plan, categories, pages, in three strict phases.

use crate::command::Command;
use crate::emit::{emit_category, emit_page, page_relative_path, LANDING_PAGE_FILE_NAME};
use crate::error::GenerationError;
use crate::generation::context::GenerationContext;
use crate::generation::manifest::GenerationSummary;
use crate::generation::plan::{resolve_category, GenerationPreview, PlannedDirectory};
use crate::labels::LabelIndex;
use crate::tree::{plan_new_directories, DirPath, Walker, WalkerConfig};
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Result of [`Generator::generate`]: what was written, and the failure that
/// stopped the run early, if any.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub summary: GenerationSummary,
    pub error: Option<GenerationError>,
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Drives one generation run over a single output tree.
pub struct Generator {
    ctx: GenerationContext,
    walker_config: WalkerConfig,
}

impl Generator {
    pub fn new(output_root: impl Into<PathBuf>, template_dir: impl Into<PathBuf>) -> Self {
        Self {
            ctx: GenerationContext::new(output_root, template_dir),
            walker_config: WalkerConfig::default(),
        }
    }

    pub fn with_walker_config(mut self, walker_config: WalkerConfig) -> Self {
        self.walker_config = walker_config;
        self
    }

    pub fn context(&self) -> &GenerationContext {
        &self.ctx
    }

    fn walker(&self) -> Walker {
        Walker::with_config(
            self.ctx.output_root().to_path_buf(),
            self.walker_config.clone(),
        )
    }

    /// Phase 1: directories the commands need that do not exist yet.
    pub fn plan(&self, commands: &[Command]) -> Result<BTreeSet<DirPath>, GenerationError> {
        let existing = self.walker().scan_directories()?;
        debug!(existing = existing.len(), "Scanned output tree");
        Ok(plan_new_directories(&existing, commands))
    }

    /// Run all three phases. Files written before a failure stay on disk.
    pub fn run(&mut self, commands: &[Command]) -> Result<(), GenerationError> {
        info!(
            output = %self.ctx.output_root().display(),
            templates = %self.ctx.template_dir().display(),
            commands = commands.len(),
            "Starting generation"
        );

        let planned = self.plan(commands)?;
        info!(directories = planned.len(), "Phase 1: planned new directories");

        let root = self.ctx.output_root().to_path_buf();
        std::fs::create_dir_all(&root).map_err(|e| GenerationError::io(&root, e))?;

        info!("Phase 2: writing category metadata");
        let mut labels = LabelIndex::scan(&self.walker());
        for dir in &planned {
            self.ctx.create_new_dir(dir)?;
            let record = resolve_category(&mut labels, dir);
            emit_category(&mut self.ctx, &record)?;
        }

        info!("Phase 3: writing command pages");
        for command in commands {
            if !command.is_valid() {
                debug!(?command, "Skipping command without a name");
                continue;
            }
            emit_page(&mut self.ctx, command)?;
        }

        Ok(())
    }

    /// Run and report. A write failure ends the run but still yields a
    /// summary of everything written up to that point.
    pub fn generate(&mut self, commands: &[Command]) -> GenerationOutcome {
        let result = self.run(commands);
        let summary = self.summary();
        match result {
            Ok(()) => {
                info!(
                    files = summary.total_files,
                    directories = summary.directories.len(),
                    bytes = summary.total_size,
                    "Generation complete"
                );
                GenerationOutcome {
                    summary,
                    error: None,
                }
            }
            Err(e) => {
                error!(error = %e, files = summary.total_files, "Generation aborted");
                GenerationOutcome {
                    summary,
                    error: Some(e),
                }
            }
        }
    }

    /// Summary of what this generator has written so far.
    pub fn summary(&self) -> GenerationSummary {
        self.ctx.manifest().summary(self.ctx.output_root())
    }

    /// Compute what [`Generator::run`] would do without touching disk.
    pub fn preview(&self, commands: &[Command]) -> Result<GenerationPreview, GenerationError> {
        let planned = self.plan(commands)?;
        let mut labels = LabelIndex::scan(&self.walker());
        let mut claimed: HashSet<String> = HashSet::new();
        let mut preview = GenerationPreview::default();

        for dir in &planned {
            let record = resolve_category(&mut labels, dir);
            if record.conflict {
                claimed.insert(format!("{}/{}", dir, LANDING_PAGE_FILE_NAME));
            }
            preview.directories.push(PlannedDirectory::from(&record));
        }

        let root = self.ctx.output_root();
        for command in commands.iter().filter(|c| c.is_valid()) {
            let relative = page_relative_path(command);
            if root.join(&relative).exists() || !claimed.insert(relative.clone()) {
                preview.skipped_pages.push(relative);
            } else {
                preview.pages.push(relative);
            }
        }

        Ok(preview)
    }
}
