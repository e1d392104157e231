//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string used in log fields (e.g. "content", "manifest").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Content { .. } => "content",
        Commands::Salt { .. } => "salt",
        Commands::Url { .. } => "url",
        Commands::Manifest { .. } => "manifest",
    }
}
