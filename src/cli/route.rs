//! CLI route: single route table and run context.

use crate::asset::{basename_without_ext, Asset};
use crate::cli::help::command_name;
use crate::cli::parse::{Commands, ManifestFormat};
use crate::config::{CachebustConfig, ConfigLoader};
use crate::error::FingerprintError;
use crate::fingerprint::{fingerprint, fingerprint_for_asset};
use crate::manifest::ManifestBuilder;
use crate::url::versioned_url;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace root and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: CachebustConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, FingerprintError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: CachebustConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &CachebustConfig {
        &self.config
    }

    /// Execute a command and return its stdout text.
    pub fn execute(&self, command: &Commands) -> Result<String, FingerprintError> {
        let started = Instant::now();
        let output = self.dispatch(command)?;
        info!(
            command = command_name(command),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        Ok(output)
    }

    fn dispatch(&self, command: &Commands) -> Result<String, FingerprintError> {
        match command {
            Commands::Content { text, file, length } => {
                let length = self.length(*length);
                match (text, file) {
                    (Some(text), _) => Ok(fingerprint(text, length)),
                    (None, Some(file)) => Ok(Asset::from_path(file)?.fingerprint(length)),
                    (None, None) => {
                        let mut content = Vec::new();
                        std::io::stdin().read_to_end(&mut content)?;
                        Ok(Asset::new("", content).fingerprint(length))
                    }
                }
            }
            Commands::Salt { name, path } => {
                // clap requires one of the two
                let name = name
                    .clone()
                    .or_else(|| path.as_deref().map(basename_without_ext))
                    .unwrap_or_default();
                Ok(fingerprint_for_asset(&name))
            }
            Commands::Url { url, file, length } => {
                let fp = Asset::from_path(file)?.fingerprint(self.length(*length));
                Ok(versioned_url(url, &fp))
            }
            Commands::Manifest {
                dir,
                format,
                length,
            } => {
                let root = dir.clone().unwrap_or_else(|| self.workspace_root.clone());
                self.handle_manifest(&root, *format, *length)
            }
        }
    }

    fn handle_manifest(
        &self,
        root: &Path,
        format: ManifestFormat,
        length: Option<usize>,
    ) -> Result<String, FingerprintError> {
        debug!(root = %root.display(), ?format, "Building manifest");
        let manifest = ManifestBuilder::new(root.to_path_buf())
            .with_config(self.config.manifest_config(length))
            .build()?;

        match format {
            ManifestFormat::Text => Ok(manifest.to_text()),
            ManifestFormat::Json => manifest.to_json(),
        }
    }

    fn length(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.fingerprint.length)
    }
}
