//! File extension extraction from a URL path.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{to_url, Result};

static RE_EXTENSION: OnceLock<Regex> = OnceLock::new();

/// Returns the lowercased extension of the last path segment of `url`, dot
/// included (e.g. `.png`), or an empty string when there is none.
///
/// Only letters count (`.tar.gz` gives `.gz`, `.mp4` gives nothing), and the
/// query string is never considered.
pub fn file_extension(url: &str) -> Result<String> {
    let parsed = to_url(url)?;
    Ok(path_extension(parsed.path()))
}

pub(crate) fn path_extension(path: &str) -> String {
    let re = RE_EXTENSION.get_or_init(|| Regex::new(r"(?i)\.[a-z]{2,}$").unwrap());
    re.find(path)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default()
}
