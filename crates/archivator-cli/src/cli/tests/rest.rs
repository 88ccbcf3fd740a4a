//! Tests for index and archives.

use super::parse;
use crate::cli::commands::{run_archives, run_index};
use crate::cli::{Cli, CliCommand};
use archivator_core::archivable::ARCHIVE_INDEX_HEADER;
use archivator_core::config::{ArchiveConfig, ArchivatorConfig};
use std::path::PathBuf;

use clap::Parser;

#[test]
fn cli_parse_index_path() {
    match parse(&["archivator", "index", "blog/archivator.csv"]) {
        CliCommand::Index { path, archive } => {
            assert_eq!(path.as_deref(), Some("blog/archivator.csv"));
            assert!(archive.is_none());
        }
        _ => panic!("expected Index"),
    }
}

#[test]
fn cli_parse_index_archive() {
    match parse(&["archivator", "index", "--archive", "blog"]) {
        CliCommand::Index { path, archive } => {
            assert!(path.is_none());
            assert_eq!(archive.as_deref(), Some("blog"));
        }
        _ => panic!("expected Index"),
    }
}

#[test]
fn cli_parse_index_needs_path_or_archive() {
    assert!(Cli::try_parse_from(["archivator", "index"]).is_err());
}

#[test]
fn cli_parse_archives() {
    match parse(&["archivator", "archives"]) {
        CliCommand::Archives => {}
        _ => panic!("expected Archives"),
    }
}

#[test]
fn run_index_prints_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("archivator.csv");
    std::fs::write(
        &path,
        format!("{ARCHIVE_INDEX_HEADER}\nhttp://www.example.org/a/;main;\n"),
    )
    .unwrap();
    let mut out = Vec::new();
    run_index(&mut out, &path).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ARCHIVE"));
    assert!(lines[1].starts_with("example.org/a "));
    assert!(lines[1].contains(" main "));
    assert!(lines[1].ends_with("http://www.example.org/a/"));

    assert!(run_index(&mut Vec::new(), &dir.path().join("missing.csv")).is_err());
}

#[test]
fn run_index_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("archivator.csv");
    std::fs::write(&path, format!("{ARCHIVE_INDEX_HEADER}\n")).unwrap();
    let mut out = Vec::new();
    run_index(&mut out, &path).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("No entries in "));
}

#[test]
fn run_archives_lists_configured() {
    let mut cfg = ArchivatorConfig::default();
    let mut out = Vec::new();
    run_archives(&mut out, &cfg).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No archives configured.\n");

    cfg.archives.push(ArchiveConfig {
        name: "blog".to_string(),
        folder: PathBuf::from("blog"),
    });
    let mut out = Vec::new();
    run_archives(&mut out, &cfg).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("NAME"));
    assert!(lines[1].starts_with("blog "));
    assert!(lines[1].ends_with("archive/blog/archivator.csv"));
}
