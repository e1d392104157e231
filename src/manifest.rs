//! Asset manifest: fingerprints for every file under a directory
//!
//! Walks the asset root, fingerprints each regular file and returns entries
//! sorted by relative path, so two builds over the same tree produce the same
//! manifest. Nothing is cached between runs.

use crate::asset::Asset;
use crate::error::FingerprintError;
use crate::fingerprint::DEFAULT_LENGTH;
use crate::url::versioned_url;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Manifest walk configuration
#[derive(Debug, Clone)]
pub struct ManifestConfig {
    /// Content fingerprint length
    pub length: usize,
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Path components to skip (e.g. ".git", "_site")
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    pub max_depth: Option<usize>,
}

pub fn default_ignore_patterns() -> Vec<String> {
    [".git", "node_modules", ".sass-cache", ".jekyll-cache", "_site"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            follow_symlinks: false,
            ignore_patterns: default_ignore_patterns(),
            max_depth: None,
        }
    }
}

/// One fingerprinted asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Path relative to the manifest root, `/`-separated
    pub path: String,
    /// Base name without extension
    pub name: String,
    pub fingerprint: String,
    pub salt: String,
    /// `path?v=fingerprint`
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub root: PathBuf,
    pub length: usize,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn get(&self, path: &str) -> Option<&ManifestEntry> {
        self.entries
            .binary_search_by(|entry| entry.path.as_str().cmp(path))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// One line per entry: `<fingerprint>  <salt>  <path>`.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}  {}  {}", e.fingerprint, e.salt, e.path))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_json(&self) -> Result<String, FingerprintError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct ManifestBuilder {
    root: PathBuf,
    config: ManifestConfig,
}

impl ManifestBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: ManifestConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ManifestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(&self) -> Result<Manifest, FingerprintError> {
        if !self.root.is_dir() {
            return Err(FingerprintError::NotADirectory(self.root.clone()));
        }

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        let mut entries = Vec::new();
        let mut iter = walker.into_iter();
        while let Some(entry) = iter.next() {
            let entry = entry.map_err(|e| FingerprintError::Walk {
                root: self.root.clone(),
                message: e.to_string(),
            })?;

            if self.should_ignore(&entry) {
                if entry.file_type().is_dir() {
                    iter.skip_current_dir();
                }
                continue;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            entries.push(self.fingerprint_entry(entry.path())?);
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));

        info!(
            root = %self.root.display(),
            assets = entries.len(),
            "Built asset manifest"
        );

        Ok(Manifest {
            root: self.root.clone(),
            length: self.config.length,
            entries,
        })
    }

    fn fingerprint_entry(&self, path: &Path) -> Result<ManifestEntry, FingerprintError> {
        let asset = Asset::from_path(path)?;
        let relative = relative_path(&self.root, path);
        let fingerprint = asset.fingerprint(self.config.length);

        debug!(path = %relative, fingerprint = %fingerprint, "Fingerprinted asset");

        Ok(ManifestEntry {
            url: versioned_url(&relative, &fingerprint),
            name: asset.name().to_string(),
            salt: asset.salt(),
            fingerprint,
            path: relative,
        })
    }

    /// Ignore patterns match whole path components below the root.
    fn should_ignore(&self, entry: &DirEntry) -> bool {
        let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
        relative.components().any(|component| match component {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                self.config.ignore_patterns.iter().any(|p| p.as_str() == name.as_ref())
            }
            _ => false,
        })
    }
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
