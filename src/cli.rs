//! CLI domain: parse, route, help and output only.
//! Fingerprinting lives in the library modules; route handlers stay thin.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ManifestFormat};
pub use route::RunContext;
