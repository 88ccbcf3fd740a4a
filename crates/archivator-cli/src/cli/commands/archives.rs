//! `archivator archives` – list configured archives.

use anyhow::Result;
use archivator_core::config::ArchivatorConfig;
use std::io::Write;

pub fn run_archives(out: &mut impl Write, cfg: &ArchivatorConfig) -> Result<()> {
    if cfg.archives.is_empty() {
        writeln!(out, "No archives configured.")?;
        return Ok(());
    }
    writeln!(out, "{:<20} INDEX", "NAME")?;
    for archive in &cfg.archives {
        let index = cfg.index_path(&archive.name)?;
        writeln!(out, "{:<20} {}", archive.name, index.display())?;
    }
    Ok(())
}
