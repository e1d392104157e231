//! Static assets loaded from disk

use crate::error::FingerprintError;
use crate::fingerprint;
use std::path::Path;

/// A file's content together with its logical name (file name without extension).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    name: String,
    content: Vec<u8>,
}

impl Asset {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read an asset from `path`, naming it after the file's base name.
    pub fn from_path(path: &Path) -> Result<Self, FingerprintError> {
        let content = std::fs::read(path).map_err(|source| FingerprintError::AssetRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(basename_without_ext(path), content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content fingerprint of `length` hex characters.
    ///
    /// UTF-8 content is hashed as text; anything else falls back to the byte form.
    pub fn fingerprint(&self, length: usize) -> String {
        match std::str::from_utf8(&self.content) {
            Ok(text) => fingerprint::fingerprint(text, length),
            Err(_) => fingerprint::fingerprint_bytes(&self.content, length),
        }
    }

    /// Name-based salt for this asset.
    pub fn salt(&self) -> String {
        fingerprint::fingerprint_for_asset(&self.name)
    }
}

/// File name with its last extension removed.
///
/// `css/app.min.js` gives `app.min`; dotfiles such as `.htaccess` keep their name.
pub fn basename_without_ext(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
