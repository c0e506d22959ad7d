//! URL normalization for the host boundary
//!
//! Internal conference and connection handles carry full location URLs.
//! Externally only a normalized string form is presented.

use url::Url;

/// Normalize a URL for presentation to the host.
///
/// Query parameters and the fragment are stripped; the rest of the URL is
/// kept verbatim. Two internal URLs that differ only in parameters normalize
/// to the same outward string.
pub fn normalize_url(url: &Url) -> String {
    let mut stripped = url.clone();
    stripped.set_query(None);
    stripped.set_fragment(None);
    stripped.to_string()
}
