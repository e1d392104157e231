//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::FingerprintError;

/// Map domain errors to a one-line message for stderr.
pub fn map_error(e: &FingerprintError) -> String {
    format!("error: {}", e)
}
