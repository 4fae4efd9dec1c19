//! Namespace directory paths and relative path normalization

use std::cmp::Ordering;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// An ordered sequence of namespace segments naming a directory under the
/// output root.
///
/// Ordering compares the `/`-joined string form, so a prefix always sorts
/// before any of its extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DirPath {
    segments: Vec<String>,
}

impl DirPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parse a `/`-joined relative path. Empty segments are dropped.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Display label: the last segment.
    pub fn label(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// Every non-empty prefix, shortest first: `[a]`, `[a, b]`, ...
    pub fn prefixes(&self) -> impl Iterator<Item = DirPath> + '_ {
        (1..=self.segments.len()).map(move |n| DirPath {
            segments: self.segments[..n].to_vec(),
        })
    }

    /// Resolve against a filesystem root.
    pub fn to_fs_path(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        for segment in &self.segments {
            path.push(segment);
        }
        path
    }

    fn joined_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.segments.iter().enumerate().flat_map(|(i, segment)| {
            let sep = if i == 0 { None } else { Some(b'/') };
            sep.into_iter().chain(segment.bytes())
        })
    }
}

impl Ord for DirPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.joined_bytes()
            .cmp(other.joined_bytes())
            .then_with(|| self.segments.cmp(&other.segments))
    }
}

impl PartialOrd for DirPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DirPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl From<&[String]> for DirPath {
    fn from(segments: &[String]) -> Self {
        Self::new(segments.to_vec())
    }
}

/// Express `path` relative to `root` using forward slashes on every platform.
///
/// Returns `None` when `path` is not under `root` or equals it.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
