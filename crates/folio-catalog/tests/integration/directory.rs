//! Integration tests for loading from a content directory on disk.

use std::fs;

use folio_catalog::{DirectorySource, ProjectStore, LOAD_FAILED_MESSAGE};
use tempfile::TempDir;

use crate::common::project_doc;

fn content_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("weather.md"),
        project_doc("Weather", "2024-01-01", "web", &["Vue"]),
    )
    .unwrap();
    fs::write(
        dir.path().join("cli-tool.md"),
        project_doc("CLI Tool", "2023-06-15", "tools", &["Rust"]),
    )
    .unwrap();
    fs::write(dir.path().join("README.txt"), "not a project").unwrap();
    dir
}

#[tokio::test]
async fn test_load_from_directory() {
    let dir = content_dir();
    let store = ProjectStore::new(DirectorySource::new(dir.path()));

    let stats = store.load_projects().await.unwrap();
    assert_eq!(stats.discovered, 2);

    let ids: Vec<String> = store.catalog().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec!["weather", "cli-tool"]);
}

#[tokio::test]
async fn test_reload_picks_up_changes() {
    let dir = content_dir();
    let store = ProjectStore::new(DirectorySource::new(dir.path()));
    store.load_projects().await.unwrap();

    fs::write(
        dir.path().join("new-thing.md"),
        project_doc("New Thing", "2025-03-01", "web", &["Svelte"]),
    )
    .unwrap();
    fs::remove_file(dir.path().join("cli-tool.md")).unwrap();
    store.load_projects().await.unwrap();

    let ids: Vec<String> = store.catalog().iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec!["new-thing", "weather"]);
    assert_eq!(store.all_technologies(), vec!["Svelte", "Vue"]);
}

#[tokio::test]
async fn test_missing_directory_sets_error() {
    let dir = TempDir::new().unwrap();
    let store = ProjectStore::new(DirectorySource::new(dir.path().join("absent")));

    assert!(store.load_projects().await.is_err());
    assert_eq!(store.error().as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert!(store.catalog().is_empty());
}

#[tokio::test]
async fn test_non_utf8_document_does_not_abort_load() {
    let dir = content_dir();
    let mut latin1 = project_doc("Cafe", "2022-01-01", "food", &["PHP"]).into_bytes();
    let at = latin1.windows(4).position(|w| w == b"Cafe").unwrap() + 3;
    latin1[at] = 0xe9;
    fs::write(dir.path().join("cafe.md"), latin1).unwrap();

    let store = ProjectStore::new(DirectorySource::new(dir.path()));
    let stats = store.load_projects().await.unwrap();

    assert_eq!(stats.loaded, 3);
    assert!(store.error().is_none());
    let cafe = store.project_by_slug("cafe").unwrap();
    assert_eq!(cafe.frontmatter.title, "Caf\u{FFFD}");
}
