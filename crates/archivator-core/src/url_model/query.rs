//! Query string canonicalization for directory slugs.

/// Turns a query string (without the leading `?`) into path-like segments.
///
/// `b=2&a=1&c=` becomes `/a/1/b/2`: parameters without a value are dropped,
/// names and values are lowercased and pairs are ordered by key, then value.
/// Paging parameters (`page`, `pageid`) all collapse to `page`. Returns an
/// empty string when nothing survives.
pub fn canonicalize_query(query: &str) -> String {
    let mut pairs: Vec<(String, String)> = query
        .split('&')
        .filter_map(|param| {
            let mut parts = param.split('=');
            let key = parts.next()?.to_lowercase();
            let value = parts.collect::<Vec<_>>().join("/").to_lowercase();
            if value.is_empty() || value.starts_with('/') {
                return None;
            }
            Some((key, value))
        })
        .collect();

    if pairs.is_empty() {
        return String::new();
    }

    pairs.sort();

    let mut out = String::new();
    for (key, value) in &pairs {
        for segment in key.split('/').chain(value.split('/')) {
            out.push('/');
            if segment == "page" || segment == "pageid" {
                out.push_str("page");
            } else {
                out.push_str(segment);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_key() {
        assert_eq!(canonicalize_query("b=2&a=1"), "/a/1/b/2");
        assert_eq!(canonicalize_query("a=1&b=2"), "/a/1/b/2");
    }

    #[test]
    fn ties_broken_by_value() {
        assert_eq!(canonicalize_query("tag=z&tag=a"), "/tag/a/tag/z");
    }

    #[test]
    fn drops_empty_values() {
        assert_eq!(canonicalize_query("b=2&a=1&c="), "/a/1/b/2");
        assert_eq!(canonicalize_query("b=2&a=1&c"), "/a/1/b/2");
    }

    #[test]
    fn nothing_survives() {
        assert_eq!(canonicalize_query(""), "");
        assert_eq!(canonicalize_query("bar"), "");
        assert_eq!(canonicalize_query("a=&b="), "");
    }

    #[test]
    fn lowercases() {
        assert_eq!(canonicalize_query("Type=Polonaise"), "/type/polonaise");
    }

    #[test]
    fn paging_parameters_collapse() {
        assert_eq!(canonicalize_query("pageId=3"), "/page/3");
        assert_eq!(canonicalize_query("PAGEID=3"), "/page/3");
        assert_eq!(canonicalize_query("page=3"), "/page/3");
        assert_eq!(canonicalize_query("pages=3"), "/pages/3");
    }

    #[test]
    fn extra_equals_become_segments() {
        assert_eq!(canonicalize_query("a=b=c"), "/a/b/c");
    }
}
