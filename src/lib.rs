//! Cachebust: Content Fingerprints for Static Assets
//!
//! Short, stable hex identifiers derived from asset content or asset names,
//! spliced into URLs at site-build time so browsers refetch changed assets.

pub mod asset;
pub mod cli;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod logging;
pub mod manifest;
pub mod url;

pub use fingerprint::{content_fingerprint, fingerprint, fingerprint_for_asset};
