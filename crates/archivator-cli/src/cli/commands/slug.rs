//! `archivator slug <url>...` – print archive directory slugs.

use anyhow::{Context, Result};
use archivator_core::directory_slug;
use std::io::Write;

pub fn run_slug(out: &mut impl Write, urls: &[String]) -> Result<()> {
    for url in urls {
        let slug = directory_slug(url).with_context(|| format!("slug for {url}"))?;
        writeln!(out, "{slug}")?;
    }
    Ok(())
}
