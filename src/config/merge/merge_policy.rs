//! Merge rules: built-in defaults applied before any file or environment source.
//! List-valued keys (manifest.ignore_patterns) default through serde so a file
//! value replaces the built-in list instead of merging into it.

use crate::fingerprint::DEFAULT_LENGTH;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("fingerprint.length", DEFAULT_LENGTH as i64)?
        .set_default("manifest.follow_symlinks", false)
}
