//! Per-run generation context
//!
//! Owns everything one invocation mutates besides the output tree itself:
//! the template cache and the manifest. Independent runs build independent
//! contexts.

use crate::error::GenerationError;
use crate::generation::manifest::Manifest;
use crate::template::TemplateStore;
use crate::tree::path::relative_slash_path;
use crate::tree::DirPath;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub struct GenerationContext {
    output_root: PathBuf,
    templates: TemplateStore,
    manifest: Manifest,
}

impl GenerationContext {
    pub fn new(output_root: impl Into<PathBuf>, template_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            templates: TemplateStore::new(template_dir),
            manifest: Manifest::new(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn template_dir(&self) -> &Path {
        self.templates.dir()
    }

    pub fn templates(&mut self) -> &mut TemplateStore {
        &mut self.templates
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Create a namespace directory (and any missing ancestors).
    pub fn create_dir(&self, dir: &DirPath) -> Result<PathBuf, GenerationError> {
        let path = dir.to_fs_path(&self.output_root);
        std::fs::create_dir_all(&path).map_err(|e| GenerationError::io(&path, e))?;
        Ok(path)
    }

    /// Create a planned directory and record it as new.
    pub fn create_new_dir(&mut self, dir: &DirPath) -> Result<PathBuf, GenerationError> {
        let path = self.create_dir(dir)?;
        self.manifest.record_directory(dir.to_string());
        Ok(path)
    }

    /// Write `contents` to `path` (under the output root), replacing any
    /// existing file, and record it. Returns the relative path.
    pub fn write_file(&mut self, path: &Path, contents: &str) -> Result<String, GenerationError> {
        std::fs::write(path, contents).map_err(|e| GenerationError::io(path, e))?;
        let relative = relative_slash_path(&self.output_root, path)
            .unwrap_or_else(|| path.display().to_string());
        info!(file = %relative, bytes = contents.len(), "Generated");
        self.manifest.record_file(relative.clone());
        Ok(relative)
    }
}
