//! Resolution of asset references found in a document against the document URL.

use url::Url;

use crate::error::{to_url, Result};

/// Source paths ending like this name a page, not a directory.
const PAGE_SUFFIXES: [&str; 4] = [".htm", ".html", ".do", ".action"];

/// Resolves `reference` (as found in an `img[src]` or similar) against the URL of
/// the document it was found in, returning an absolute URL.
///
/// With a source document at `http://example.org/foo/bar.html`:
///
/// - `/a/b.jpg` → `http://example.org/a/b.jpg`
/// - `a/b.jpg` → `http://example.org/foo/a/b.jpg`
/// - `../a/b.jpg` → `http://example.org/a/b.jpg`
/// - `a/b.jpg?foo=bar` → `http://example.org/foo/a/b.jpg?foo=bar`
/// - `//example.org/a/b.jpg` → `http://example.org/a/b.jpg`
/// - `https://elsewhere.org/a/b.jpg` → `https://elsewhere.org/a/b.jpg`
///
/// Going up more directories than the base has stops at the origin.
pub fn resolve_reference(source_document: &str, reference: &str) -> Result<String> {
    let source = to_url(source_document)?;
    let origin = origin_of(&source);

    let absolute = reference.starts_with("http://") || reference.starts_with("https://");
    let protocol_relative = reference.starts_with("//");
    let root_relative = reference.starts_with('/') && !protocol_relative;

    let mut base = directory_base(source.as_str());
    let mut target = reference
        .strip_prefix("./")
        .unwrap_or(reference)
        .to_string();

    if !absolute && !protocol_relative {
        if is_page_path(source.path()) {
            base = format!("{origin}/");
            if !root_relative {
                let mut segments = path_segments(source.path());
                segments.pop();
                base.push_str(&segments.join("/"));
                if !base.ends_with('/') {
                    base.push('/');
                }
            }
        }

        if root_relative {
            base = format!("{origin}/");
            target.remove(0);
        }

        let go_up = target.matches("../").count();
        if go_up > 0 {
            let base_url = to_url(&base)?;
            let base_segments = path_segments(base_url.path());
            if go_up > base_segments.len() {
                tracing::debug!(
                    source_document,
                    reference,
                    go_up,
                    depth = base_segments.len(),
                    "parent traversal past the origin, clamping"
                );
            }
            let keep = base_segments.len().saturating_sub(go_up);
            let joined: Vec<&str> = base_segments[..keep]
                .iter()
                .copied()
                .chain(target.split('/').filter(|s| *s != ".."))
                .collect();
            target = joined.join("/");
            base = format!("{origin}/");
        }
    }

    if absolute {
        base.clear();
    }

    if protocol_relative {
        base = if source.as_str().starts_with("https://") {
            "https:".to_string()
        } else {
            "http:".to_string()
        };
    }

    let resolved = to_url(&format!("{base}{target}"))?;
    Ok(resolved.to_string())
}

/// Source href with a trailing slash when it ends like a path segment would.
fn directory_base(href: &str) -> String {
    match href.chars().last() {
        Some(c) if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':') => {
            format!("{href}/")
        }
        _ => href.to_string(),
    }
}

fn is_page_path(path: &str) -> bool {
    PAGE_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// `scheme://host[:port]`, the part of a URL a root-relative reference keeps.
fn origin_of(url: &Url) -> String {
    let mut out = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    if let Some(port) = url.port() {
        out.push_str(&format!(":{port}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(source: &str, reference: &str) -> String {
        resolve_reference(source, reference).unwrap()
    }

    #[test]
    fn relative_to_directory() {
        assert_eq!(
            resolve("http://www.example.org/a/", "b/c.png"),
            "http://www.example.org/a/b/c.png"
        );
        assert_eq!(
            resolve("http://www.example.org/a/", "./b/c.png"),
            "http://www.example.org/a/b/c.png"
        );
    }

    #[test]
    fn source_without_trailing_slash_is_a_directory() {
        assert_eq!(
            resolve("http://example.org/a/b", "c.png"),
            "http://example.org/a/b/c.png"
        );
    }

    #[test]
    fn relative_to_page() {
        let source = "http://example.org/foo/bar.html";
        assert_eq!(resolve(source, "/a/b.jpg"), "http://example.org/a/b.jpg");
        assert_eq!(resolve(source, "a/b.jpg"), "http://example.org/foo/a/b.jpg");
        assert_eq!(resolve(source, "a/b"), "http://example.org/foo/a/b");
        assert_eq!(resolve(source, "../a/b.jpg"), "http://example.org/a/b.jpg");
        assert_eq!(
            resolve(source, "a/b.jpg?foo=bar"),
            "http://example.org/foo/a/b.jpg?foo=bar"
        );
        assert_eq!(
            resolve(source, "//example.org/a/b.jpg"),
            "http://example.org/a/b.jpg"
        );
        assert_eq!(
            resolve(source, "http://elsewhere.org/a/b.jpg"),
            "http://elsewhere.org/a/b.jpg"
        );
        assert_eq!(
            resolve(source, "https://example.org/a/b.jpg"),
            "https://example.org/a/b.jpg"
        );
    }

    #[test]
    fn page_at_root() {
        assert_eq!(
            resolve("http://example.org/index.html", "a.png"),
            "http://example.org/a.png"
        );
        assert_eq!(
            resolve("http://example.org/list.do", "img/a.png"),
            "http://example.org/img/a.png"
        );
    }

    #[test]
    fn parent_traversal() {
        assert_eq!(
            resolve("http://example.org/ignored/also_ignored/and_too", "../../../a.jpg"),
            "http://example.org/a.jpg"
        );
        assert_eq!(
            resolve("http://example.org/ignored/also_ignored/", "../../a.jpg"),
            "http://example.org/a.jpg"
        );
        assert_eq!(
            resolve("http://example.org/a/b/c/", "../x.png"),
            "http://example.org/a/b/x.png"
        );
        assert_eq!(
            resolve("http://example.org/b/c.html", "../a.png"),
            "http://example.org/a.png"
        );
    }

    #[test]
    fn parent_traversal_overflow_clamps_to_origin() {
        assert_eq!(
            resolve("http://example.org/b/c.html", "../../../../../a.png"),
            "http://example.org/a.png"
        );
        assert_eq!(
            resolve("http://renoirboulanger.com/page/3/", "../../../avatar.jpg"),
            "http://renoirboulanger.com/avatar.jpg"
        );
    }

    #[test]
    fn root_relative_keeps_origin_at_any_depth() {
        for source in [
            "http://example.org/",
            "http://example.org/a",
            "http://example.org/a/b/c/d/",
            "http://example.org/a/b/c/d/e.html",
            "http://example.org:8080/a/b/",
        ] {
            let resolved = Url::parse(&resolve(source, "/x.png")).unwrap();
            let source = Url::parse(source).unwrap();
            assert_eq!(resolved.origin(), source.origin());
            assert_eq!(resolved.path(), "/x.png");
        }
    }

    #[test]
    fn protocol_relative_inherits_scheme() {
        assert_eq!(
            resolve("https://example.org/a/", "//cdn.example.org/x.png"),
            "https://cdn.example.org/x.png"
        );
        assert_eq!(
            resolve(
                "http://renoirboulanger.com/page/3/",
                "//www.gravatar.com/avatar/cbf8c9036c204fe85e15155f9d70faec?s=500"
            ),
            "http://www.gravatar.com/avatar/cbf8c9036c204fe85e15155f9d70faec?s=500"
        );
    }

    #[test]
    fn absolute_reference_is_idempotent() {
        for absolute in [
            "http://example.org/a/b.png",
            "https://s3.amazonaws.com/github/ribbons/forkme_right_gray_6d6d6d.png",
            "http://example.org/a/b.png?x=1#top",
        ] {
            assert_eq!(resolve("http://example.org/deep/page/", absolute), absolute);
            assert_eq!(resolve("http://example.org/deep/page.html", absolute), absolute);
        }
    }

    #[test]
    fn fragment_survives() {
        assert_eq!(
            resolve("http://example.org/a/", "b.svg#icon"),
            "http://example.org/a/b.svg#icon"
        );
    }

    #[test]
    fn invalid_source_document() {
        assert!(resolve_reference("not a url", "a.png").is_err());
    }
}
