//! Path component normalization for directory slugs.

use regex::Regex;
use std::sync::OnceLock;

static RE_TRACKING_SUFFIX: OnceLock<Regex> = OnceLock::new();
static RE_SCRIPT_SUFFIX: OnceLock<Regex> = OnceLock::new();
static RE_STRIPPED_CHARS: OnceLock<Regex> = OnceLock::new();
static RE_CONTENT_TYPE_SUFFIX: OnceLock<Regex> = OnceLock::new();

/// Normalizes a URL path (as returned by `Url::path`) into a lowercase,
/// filesystem-friendly fragment.
///
/// `/fOo/Bar/bAAz.html` becomes `/foo/bar/baaz`. Single-shot rules only rewrite
/// their first match; the character-class rule strips every match. Root and
/// empty paths give an empty string.
pub fn normalize_path(path: &str) -> String {
    let tracking_suffix =
        RE_TRACKING_SUFFIX.get_or_init(|| Regex::new(r"-[a-z0-9]{5,}$").unwrap());
    let script_suffix =
        RE_SCRIPT_SUFFIX.get_or_init(|| Regex::new(r"\.(action|fcgi|do)").unwrap());
    let stripped_chars = RE_STRIPPED_CHARS.get_or_init(|| Regex::new(r"[@=%&#()~!,]+").unwrap());
    let content_type_suffix = RE_CONTENT_TYPE_SUFFIX
        .get_or_init(|| Regex::new(r"\.(s?html?|php|xml|aspx?)").unwrap());

    let mut out = path.to_lowercase();
    // Random ids appended to slugs, e.g. `-1a2d8a61510`.
    out = tracking_suffix.replace(&out, "").into_owned();
    out = out.replacen("%40", "_at_", 1);
    out = script_suffix.replace(&out, "").into_owned();
    out = out.replacen("cgi-bin/", "/", 1);
    if let Some(stripped) = out.strip_suffix('/') {
        out = stripped.to_string();
    }
    // Colons in paths (`Category:Topics`) become a directory level.
    out = out.replacen(':', "/", 1);
    out = out.replacen("//", "/", 1);
    out = stripped_chars.replace_all(&out, "").into_owned();
    out = content_type_suffix.replace(&out, "").into_owned();
    out
}
