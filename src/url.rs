//! Versioned asset URLs: `style.css` becomes `style.css?v=<fingerprint>`.

/// Query parameter carrying the fingerprint.
pub const VERSION_PARAM: &str = "v";

/// Append the fingerprint to `url` as a `v` query parameter.
///
/// An existing query string is extended with `&`; a fragment stays last.
pub fn versioned_url(url: &str, fingerprint: &str) -> String {
    let (base, fragment) = match url.find('#') {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    };

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    format!("{base}{separator}{VERSION_PARAM}={fingerprint}{fragment}")
}
