//! Archive index entries: which page to archive and which parts of it to keep.
//!
//! Each archive keeps an `archivator.csv` index, one page per line:
//!
//! ```csv
//! http://example.org/a/b.html;article;.ad,.social-button
//! ```
//!
//! The fields are the page URL, a CSS selector for the main content, and a
//! comma separated list of CSS selectors to strip off.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{self, to_url};
use crate::url_model::directory_slug;

/// File name of the index in every archive folder.
pub const ARCHIVE_INDEX_FILENAME: &str = "archivator.csv";

/// First line of an archive index.
pub const ARCHIVE_INDEX_HEADER: &str =
    r#""Web Page URL";"CSS Selectors for main content";"CSS Selectors to strip content off""#;

/// Selector used when an entry names none.
const DEFAULT_SELECTOR: &str = "body";

/// Selectors always stripped from archived content.
const ALWAYS_TRUNCATED: &str = "script,style,noscript,template";

/// One page to archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archivable {
    /// Directory slug of `url`, where the page is archived.
    pub archive: String,
    pub selector: String,
    pub truncate: String,
    pub url: String,
}

impl Archivable {
    /// Fails if `url` is not an absolute URL.
    pub fn new(url: &str, selector: &str, truncate: &str) -> error::Result<Self> {
        let parsed = to_url(url)?;
        let archive = directory_slug(parsed.as_str())?;
        Ok(Self {
            archive,
            selector: with_default_selector(selector),
            truncate: with_default_truncate(truncate),
            url: parsed.to_string(),
        })
    }

    /// Parses one index line, see [`parse_csv_line`].
    pub fn from_line(line: &str) -> error::Result<Self> {
        let (url, selector, truncate) = parse_csv_line(line)?;
        Self::new(&url, &selector, &truncate)
    }
}

/// Splits an index line into `(url, selector, truncate)`.
///
/// Missing fields are empty. Fields are kept as written, surrounding whitespace
/// included. Fails if the first field is not an absolute URL.
pub fn parse_csv_line(line: &str) -> error::Result<(String, String, String)> {
    let mut fields = line.split(';');
    let url = fields.next().unwrap_or_default();
    let selector = fields.next().unwrap_or_default();
    let truncate = fields.next().unwrap_or_default();
    to_url(url)?;
    Ok((url.to_string(), selector.to_string(), truncate.to_string()))
}

/// Reads an archive index. Blank lines and the header are skipped; lines that do
/// not parse are logged and skipped.
pub fn load_index(path: &Path) -> Result<Vec<Archivable>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read archive index: {}", path.display()))?;
    Ok(parse_index(&data))
}

/// Parses the contents of an archive index, see [`load_index`].
pub fn parse_index(data: &str) -> Vec<Archivable> {
    let mut out = Vec::new();
    for (lineno, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line == ARCHIVE_INDEX_HEADER {
            continue;
        }
        match Archivable::from_line(line) {
            Ok(entry) => out.push(entry),
            Err(e) => tracing::warn!(line = lineno + 1, "skipping archive index entry: {e}"),
        }
    }
    out
}

fn with_default_selector(selector: &str) -> String {
    if selector.is_empty() {
        DEFAULT_SELECTOR.to_string()
    } else {
        selector.to_string()
    }
}

fn with_default_truncate(truncate: &str) -> String {
    if truncate.is_empty() {
        ALWAYS_TRUNCATED.to_string()
    } else {
        format!("{truncate},{ALWAYS_TRUNCATED}")
    }
}
