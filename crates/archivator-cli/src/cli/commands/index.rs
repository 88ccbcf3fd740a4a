//! `archivator index <path>` – list archive index entries.

use anyhow::Result;
use archivator_core::archivable::load_index;
use std::io::Write;
use std::path::Path;

pub fn run_index(out: &mut impl Write, path: &Path) -> Result<()> {
    let entries = load_index(path)?;
    if entries.is_empty() {
        writeln!(out, "No entries in {}.", path.display())?;
        return Ok(());
    }
    writeln!(out, "{:<56} {:<16} URL", "ARCHIVE", "SELECTOR")?;
    for entry in entries {
        writeln!(out, "{:<56} {:<16} {}", entry.archive, entry.selector, entry.url)?;
    }
    Ok(())
}
