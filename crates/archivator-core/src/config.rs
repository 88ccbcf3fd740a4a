use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::archivable::ARCHIVE_INDEX_FILENAME;
use crate::asset::AssetDescriptor;
use crate::digest::ContentAddressNamer;
use crate::url_model::directory_slug;

/// A named archive: a folder under the archive root holding an `archivator.csv` index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub name: String,
    /// Folder relative to the archive root; its last component must equal `name`.
    pub folder: PathBuf,
}

/// Global configuration loaded from `~/.config/archivator/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivatorConfig {
    /// Directory under which documents and assets are stored.
    pub archive_root: PathBuf,
    /// Digest used for asset file names: md5, sha1, sha224, sha256, sha384, sha512.
    pub digest_algorithm: String,
    /// Digest encoding: "hex" or "base64".
    pub digest_encoding: String,
    #[serde(default)]
    pub archives: Vec<ArchiveConfig>,
}

impl Default for ArchivatorConfig {
    fn default() -> Self {
        Self {
            archive_root: PathBuf::from("archive"),
            digest_algorithm: "sha1".to_string(),
            digest_encoding: "hex".to_string(),
            archives: Vec::new(),
        }
    }
}

impl ArchivatorConfig {
    /// Namer for asset file names; fails on an unsupported algorithm or encoding.
    pub fn namer(&self) -> Result<ContentAddressNamer> {
        Ok(ContentAddressNamer::new(
            &self.digest_algorithm,
            &self.digest_encoding,
        )?)
    }

    /// Checks archive names: unique, `[a-z0-9_.-]+`, and matching their folder.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for archive in &self.archives {
            let valid_name = !archive.name.is_empty()
                && archive
                    .name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
            if !valid_name {
                anyhow::bail!("invalid archive name {:?}", archive.name);
            }
            let last = archive.folder.file_name().and_then(|s| s.to_str());
            if last != Some(archive.name.as_str()) {
                anyhow::bail!(
                    "archive {} and archive folder name must have matching names in path {}",
                    archive.name,
                    archive.folder.display()
                );
            }
            if !seen.insert(archive.name.as_str()) {
                anyhow::bail!(
                    "the archive name {:?} was specified more than once in the configuration",
                    archive.name
                );
            }
        }
        Ok(())
    }

    pub fn archive_folder(&self, name: &str) -> Option<PathBuf> {
        self.archives
            .iter()
            .find(|a| a.name == name)
            .map(|a| self.archive_root.join(&a.folder))
    }

    /// Path of the `archivator.csv` index of archive `name`.
    pub fn index_path(&self, name: &str) -> Result<PathBuf> {
        let folder = self
            .archive_folder(name)
            .with_context(|| format!("no archive found for name {name}"))?;
        Ok(folder.join(ARCHIVE_INDEX_FILENAME))
    }

    /// Directory where the document at `url` is archived.
    pub fn document_dir(&self, url: &str) -> Result<PathBuf> {
        Ok(self.archive_root.join(directory_slug(url)?))
    }

    /// Where a resolved asset is written, or `None` before its `dest` is known.
    pub fn asset_path(&self, asset: &AssetDescriptor) -> Option<PathBuf> {
        asset.dest().map(|dest| self.archive_root.join(dest))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("archivator")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ArchivatorConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ArchivatorConfig> {
    if !path.exists() {
        let default_cfg = ArchivatorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ArchivatorConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
