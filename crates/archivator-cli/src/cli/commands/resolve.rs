//! `archivator resolve <source> <reference>...` – absolute URL of each reference.

use anyhow::{Context, Result};
use archivator_core::resolve_reference;
use std::io::Write;

pub fn run_resolve(out: &mut impl Write, source: &str, references: &[String]) -> Result<()> {
    for reference in references {
        let resolved = resolve_reference(source, reference)
            .with_context(|| format!("resolve {reference} against {source}"))?;
        writeln!(out, "{resolved}")?;
    }
    Ok(())
}
