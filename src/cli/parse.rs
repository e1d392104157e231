//! CLI parse: clap types for cachebust. No behavior; definitions only.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Cachebust CLI - content fingerprints for static site assets
#[derive(Parser)]
#[command(name = "cachebust")]
#[command(about = "Content and name fingerprints for cache-busting static site assets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the content fingerprint of text, a file, or stdin
    Content {
        /// Text to fingerprint
        #[arg(conflicts_with = "file")]
        text: Option<String>,
        /// File whose content to fingerprint
        #[arg(long)]
        file: Option<PathBuf>,
        /// Fingerprint length in hex characters (clamped to 32)
        #[arg(long, value_parser = length_parser())]
        length: Option<usize>,
    },
    /// Print the name-based salt of an asset
    Salt {
        /// Base name without extension
        #[arg(required_unless_present = "path", conflicts_with = "path")]
        name: Option<String>,
        /// Asset path; its file name without extension is used
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Print an asset URL with its content fingerprint as `?v=`
    Url {
        /// URL to version (e.g. /assets/css/style.css)
        url: String,
        /// File whose content is fingerprinted
        #[arg(long)]
        file: PathBuf,
        /// Fingerprint length in hex characters (clamped to 32)
        #[arg(long, value_parser = length_parser())]
        length: Option<usize>,
    },
    /// Fingerprint every asset under a directory
    Manifest {
        /// Asset root (defaults to the workspace)
        dir: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = ManifestFormat::Text)]
        format: ManifestFormat,
        /// Fingerprint length in hex characters (clamped to 32)
        #[arg(long, value_parser = length_parser())]
        length: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManifestFormat {
    Text,
    Json,
}

/// `--length` shares the config rule: at least 1.
fn length_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}
