//! `archivator assets <source> <reference>...` – asset descriptors of a document.

use anyhow::Result;
use archivator_core::config::ArchivatorConfig;
use archivator_core::{AssetCatalog, AssetDescriptor, ContentAddressNamer};
use std::io::Write;

/// Flags of the `assets` command.
#[derive(Debug, Default)]
pub struct AssetsOptions {
    pub algorithm: Option<String>,
    pub encoding: Option<String>,
    pub json: bool,
    pub map: bool,
}

pub fn run_assets(
    out: &mut impl Write,
    cfg: &ArchivatorConfig,
    source: &str,
    references: Vec<String>,
    opts: &AssetsOptions,
) -> Result<()> {
    let namer = ContentAddressNamer::new(
        opts.algorithm.as_deref().unwrap_or(&cfg.digest_algorithm),
        opts.encoding.as_deref().unwrap_or(&cfg.digest_encoding),
    )?;
    let mut catalog = AssetCatalog::new(source, references)?;
    catalog.set_reference_handler(namer);

    if opts.map {
        let map = catalog.into_reference_map()?;
        writeln!(out, "{}", serde_json::to_string_pretty(&map)?)?;
        return Ok(());
    }

    let assets = catalog.collect::<Result<Vec<AssetDescriptor>, _>>()?;
    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&assets)?)?;
        return Ok(());
    }

    writeln!(out, "{:<48} {:<56} DEST", "MATCH", "SRC")?;
    for asset in &assets {
        writeln!(
            out,
            "{:<48} {:<56} {}",
            asset.matched(),
            asset.src(),
            cfg.asset_path(asset)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        )?;
    }
    Ok(())
}
