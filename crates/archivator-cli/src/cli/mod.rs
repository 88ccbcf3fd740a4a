//! CLI for the archivator web archive normalizer.

mod commands;

use anyhow::Result;
use archivator_core::config;
use clap::{Parser, Subcommand};
use std::io;
use std::path::Path;

use commands::{run_archives, run_assets, run_index, run_resolve, run_slug, AssetsOptions};

/// Top-level CLI for archivator.
#[derive(Debug, Parser)]
#[command(name = "archivator")]
#[command(about = "archivator: where web documents and their assets are archived", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the archive directory slug of one or more URLs.
    Slug {
        /// Absolute document URLs.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Resolve asset references against the document they were found in.
    Resolve {
        /// Absolute URL of the source document.
        source: String,
        /// References as found in the document (relative, root-relative, `//host/...` or absolute).
        #[arg(required = true)]
        references: Vec<String>,
    },

    /// Show where each asset of a document is fetched from and stored.
    Assets {
        /// Absolute URL of the source document.
        source: String,
        /// References as found in the document.
        #[arg(required = true)]
        references: Vec<String>,
        /// Digest algorithm for asset file names (overrides config).
        #[arg(long)]
        algorithm: Option<String>,
        /// Digest encoding, "hex" or "base64" (overrides config).
        #[arg(long)]
        encoding: Option<String>,
        /// Print descriptors as JSON.
        #[arg(long, conflicts_with = "map")]
        json: bool,
        /// Print a JSON map from reference as found to local file name.
        #[arg(long)]
        map: bool,
    },

    /// List the entries of an archive index with their archive directories.
    Index {
        /// Path to an archivator.csv file.
        #[arg(required_unless_present = "archive")]
        path: Option<String>,
        /// Name of a configured archive instead of a path.
        #[arg(long, conflicts_with = "path")]
        archive: Option<String>,
    },

    /// List configured archives.
    Archives,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Slug { urls } => run_slug(&mut out, &urls)?,
            CliCommand::Resolve { source, references } => {
                run_resolve(&mut out, &source, &references)?
            }
            CliCommand::Assets {
                source,
                references,
                algorithm,
                encoding,
                json,
                map,
            } => {
                let opts = AssetsOptions {
                    algorithm,
                    encoding,
                    json,
                    map,
                };
                run_assets(&mut out, &load_config()?, &source, references, &opts)?;
            }
            CliCommand::Index { path, archive } => match (path, archive) {
                (_, Some(name)) => run_index(&mut out, &load_config()?.index_path(&name)?)?,
                (Some(path), None) => run_index(&mut out, Path::new(&path))?,
                (None, None) => anyhow::bail!("index needs a path or --archive"),
            },
            CliCommand::Archives => run_archives(&mut out, &load_config()?)?,
        }

        Ok(())
    }
}

/// Only commands that touch archives read (or create) the config file.
fn load_config() -> Result<config::ArchivatorConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
