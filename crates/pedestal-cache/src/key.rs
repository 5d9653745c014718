#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};
use url::Url;

/// Namespace prefix for index keys.
///
/// Keeps preview entries distinct from anything else that might share the
/// persisted key space.
const KEY_NAMESPACE: &str = "preview!";

/// Index key for a resource identifier: namespace prefix + full URL.
#[must_use]
pub fn cache_key(url: &Url) -> String {
    format!("{KEY_NAMESPACE}{url}")
}

/// On-disk filename for a resource identifier.
///
/// Hex-truncated SHA-256 of the full URL string, with the extension of the
/// URL's last path segment appended when present. The extension is kept so
/// the presentation layer can still sniff the file type; the hash guarantees
/// distinct URLs map to distinct files even when their basenames collide.
#[must_use]
pub fn cached_file_name(url: &Url) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_str().as_bytes());
    let hash = hasher.finalize();
    let stem = hex::encode(&hash[..16]);

    match extension_of(url) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

/// Extension of the URL's last path segment, if it has a usable one.
fn extension_of(url: &Url) -> Option<String> {
    let last = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|s| !s.is_empty())?;
    let (_, ext) = last.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
