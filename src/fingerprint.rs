//! Content and name fingerprints for cache-busting
//!
//! A fingerprint is a short lowercase hex prefix of an MD5 digest. It is
//! spliced into asset URLs at build time so browsers refetch an asset after it
//! changes. Collisions in the default 6-character space are acceptable for
//! cache keys; nothing here is meant for security.

use md5::{Digest, Md5};

/// Fingerprint length used when the caller does not ask for one.
pub const DEFAULT_LENGTH: usize = 6;

/// Hex length of a 128-bit digest. Longer requests are clamped to this.
pub const MAX_LENGTH: usize = 32;

/// Number of leading characters appended to the trimmed content.
const PREFIX_CHARS: usize = 3;

/// Whitespace stripped from both ends of content before hashing.
fn is_strip_char(c: char) -> bool {
    matches!(c, '\0' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | ' ')
}

fn is_strip_byte(b: &u8) -> bool {
    is_strip_char(*b as char)
}

/// Trimmed content followed by its own first three characters.
///
/// `"  hello \n"` becomes `"hellohel"`; content shorter than three characters
/// repeats whole (`"ab"` becomes `"abab"`).
pub fn augment(content: &str) -> String {
    let trimmed = content.trim_matches(is_strip_char);
    let prefix_end = trimmed
        .char_indices()
        .nth(PREFIX_CHARS)
        .map(|(idx, _)| idx)
        .unwrap_or(trimmed.len());

    let mut augmented = String::with_capacity(trimmed.len() + prefix_end);
    augmented.push_str(trimmed);
    augmented.push_str(&trimmed[..prefix_end]);
    augmented
}

/// Byte-level counterpart of [`augment`] for content that is not UTF-8.
fn augment_bytes(content: &[u8]) -> Vec<u8> {
    let start = content
        .iter()
        .position(|b| !is_strip_byte(b))
        .unwrap_or(content.len());
    let end = content
        .iter()
        .rposition(|b| !is_strip_byte(b))
        .map_or(start, |idx| idx + 1);
    let trimmed = &content[start..end];

    let mut augmented = Vec::with_capacity(trimmed.len() + PREFIX_CHARS);
    augmented.extend_from_slice(trimmed);
    augmented.extend_from_slice(&trimmed[..trimmed.len().min(PREFIX_CHARS)]);
    augmented
}

/// Lowercase hex MD5 of `data`, cut to at most `length` characters.
pub fn truncated_hex_digest(data: &[u8], length: usize) -> String {
    let mut hex = hex::encode(Md5::digest(data));
    hex.truncate(length.min(MAX_LENGTH));
    hex
}

/// Compute the content fingerprint of `content`.
///
/// The digest input is the trimmed content with its first three characters
/// appended (see [`augment`]). Returns `min(length, 32)` lowercase hex
/// characters.
pub fn fingerprint(content: &str, length: usize) -> String {
    truncated_hex_digest(augment(content).as_bytes(), length)
}

/// [`fingerprint`] at [`DEFAULT_LENGTH`].
pub fn content_fingerprint(content: &str) -> String {
    fingerprint(content, DEFAULT_LENGTH)
}

/// Content fingerprint over raw bytes, for binary assets.
///
/// Agrees with [`fingerprint`] whenever the first three characters of the
/// trimmed content are ASCII.
pub fn fingerprint_bytes(content: &[u8], length: usize) -> String {
    truncated_hex_digest(&augment_bytes(content), length)
}

/// Name-based salt: the first 6 hex characters of MD5 of the name itself.
///
/// Unlike [`fingerprint`] the name is hashed verbatim, so the salt ties a URL
/// to an asset's identity rather than its content.
pub fn fingerprint_for_asset(basename_without_extension: &str) -> String {
    truncated_hex_digest(basename_without_extension.as_bytes(), DEFAULT_LENGTH)
}
