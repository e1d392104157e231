//! Configuration System
//!
//! Layered configuration built with the `config` crate. Sources, lowest to highest:
//! built-in defaults, the global config file, workspace `cachebust.toml`, workspace
//! `config/{CACHEBUST_ENV}.toml`, then `CACHEBUST_*` environment variables.

use crate::error::FingerprintError;
use crate::fingerprint::DEFAULT_LENGTH;
use crate::logging::LoggingConfig;
use crate::manifest::{default_ignore_patterns, ManifestConfig};
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

mod merge {
    pub(super) mod merge_policy;
}

mod sources {
    pub(super) mod global_file;
    pub(super) mod workspace_file;
}

pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CachebustConfig {
    #[serde(default)]
    pub fingerprint: FingerprintSection,

    #[serde(default)]
    pub manifest: ManifestSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[fingerprint]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FingerprintSection {
    /// Content fingerprint length in hex characters (clamped to 32)
    #[serde(default = "default_length")]
    pub length: usize,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

impl Default for FingerprintSection {
    fn default() -> Self {
        Self {
            length: default_length(),
        }
    }
}

/// `[manifest]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestSection {
    #[serde(default)]
    pub follow_symlinks: bool,

    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Default for ManifestSection {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: default_ignore_patterns(),
            max_depth: None,
        }
    }
}

impl CachebustConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), FingerprintError> {
        if self.fingerprint.length == 0 {
            return Err(FingerprintError::ConfigError(
                "fingerprint.length must be at least 1".to_string(),
            ));
        }
        if self.manifest.max_depth == Some(0) {
            return Err(FingerprintError::ConfigError(
                "manifest.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Walk configuration for the manifest, with an optional length override.
    pub fn manifest_config(&self, length: Option<usize>) -> ManifestConfig {
        ManifestConfig {
            length: length.unwrap_or(self.fingerprint.length),
            follow_symlinks: self.manifest.follow_symlinks,
            ignore_patterns: self.manifest.ignore_patterns.clone(),
            max_depth: self.manifest.max_depth,
        }
    }
}

/// Loads [`CachebustConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for `workspace_root` from all sources.
    pub fn load(workspace_root: &Path) -> Result<CachebustConfig, FingerprintError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(environment_source());

        let config: CachebustConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from a single file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<CachebustConfig, FingerprintError> {
        if !path.is_file() {
            return Err(FingerprintError::ConfigError(format!(
                "Config file not found: {:?}",
                path
            )));
        }

        let config: CachebustConfig = merge::merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;

        debug!(config_path = %path.display(), "Loaded configuration file");
        Ok(config)
    }
}

/// `CACHEBUST_FINGERPRINT__LENGTH=8` sets `fingerprint.length`;
/// `CACHEBUST_MANIFEST__IGNORE_PATTERNS=vendor,dist` sets a comma-separated list.
fn environment_source() -> Environment {
    Environment::with_prefix("CACHEBUST")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("manifest.ignore_patterns")
}
