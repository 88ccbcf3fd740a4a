//! URL modeling: directory slugs and asset reference resolution.
//!
//! Derives the storage directory of a document from its URL and resolves the
//! references found inside it to absolute URLs. Everything here is a pure
//! function of its inputs; the same URL always maps to the same slug.

mod extension;
mod path;
mod query;
mod resolve;

pub use extension::file_extension;
pub(crate) use extension::path_extension;
pub use path::normalize_path;
pub use query::canonicalize_query;
pub use resolve::resolve_reference;

use crate::error::{to_url, Result};

/// Derives the directory slug under which a document is archived.
///
/// The slug is `host + normalized path + canonical query`, lowercased, with every
/// `www.` removed. The scheme is ignored, so `http` and `https` variants of a
/// document share a directory.
///
/// # Examples
///
/// - `directory_slug("gopher://example.org/Foo/bAr/")` → `"example.org/foo/bar"`
/// - `directory_slug("http://example.org/foo?b=2&a=1")` → `"example.org/foo/a/1/b/2"`
pub fn directory_slug(url: &str) -> Result<String> {
    let parsed = to_url(url)?;
    let host = parsed.host_str().unwrap_or_default();
    let path = normalize_path(parsed.path());
    let query = parsed.query().map(canonicalize_query).unwrap_or_default();
    Ok(format!("{host}{path}{query}")
        .to_lowercase()
        .replace("www.", ""))
}
