//! Template store: cached, failure-tolerant template loading

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A loaded template
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    /// JSON mapping, from names ending in `.json`
    Structured(Value),
    /// Raw text
    Text(String),
}

impl Template {
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            Template::Structured(value) => Some(value),
            Template::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Template::Text(text) => Some(text.as_str()),
            Template::Structured(_) => None,
        }
    }
}

/// Loads templates from one directory, at most once per name.
///
/// Missing, unreadable, and unparsable templates all resolve to `None`;
/// callers fall back to their built-in default.
#[derive(Debug)]
pub struct TemplateStore {
    dir: PathBuf,
    cache: HashMap<String, Option<Template>>,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load `name`, reading disk only on the first request.
    pub fn load(&mut self, name: &str) -> Option<&Template> {
        if !self.cache.contains_key(name) {
            let loaded = self.read(name);
            self.cache.insert(name.to_string(), loaded);
        }
        self.cache.get(name).and_then(Option::as_ref)
    }

    /// Deep copy of a structured template.
    pub fn load_structured(&mut self, name: &str) -> Option<Value> {
        self.load(name)
            .and_then(Template::as_structured)
            .cloned()
    }

    pub fn load_text(&mut self, name: &str) -> Option<String> {
        self.load(name).and_then(Template::as_text).map(str::to_string)
    }

    /// Number of distinct names requested so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    fn read(&self, name: &str) -> Option<Template> {
        let path = self.dir.join(name);
        debug!(template = %path.display(), "Loading template");

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(template = %path.display(), "Template not found, using built-in default");
                return None;
            }
            Err(e) => {
                warn!(template = %path.display(), error = %e, "Failed to read template, using built-in default");
                return None;
            }
        };

        if !name.ends_with(".json") {
            info!(template = name, "Loaded text template");
            return Some(Template::Text(content));
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(value) if value.is_object() => {
                info!(template = name, "Loaded JSON template");
                Some(Template::Structured(value))
            }
            Ok(_) => {
                warn!(template = name, "JSON template is not an object, using built-in default");
                None
            }
            Err(e) => {
                warn!(template = name, error = %e, "Failed to parse JSON template, using built-in default");
                None
            }
        }
    }
}
