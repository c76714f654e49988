//! Document sources.
//!
//! A [`SourceProvider`] enumerates markdown documents and fetches their raw
//! text. The catalog loader only depends on this trait; where documents come
//! from (a directory, memory, a remote store) is up to the implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_catalog::{DirectorySource, SourceProvider};
//!
//! let source = DirectorySource::new("content/projects");
//! for entry in source.list().await? {
//!     let text = source.fetch(&entry).await?;
//!     println!("{}: {} bytes", entry.stem(), text.len());
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::{id_from_path, Error, Result};

/// One document known to a source.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceEntry {
    path: PathBuf,
}

impl SourceEntry {
    /// Create an entry for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Full identifier of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without extension; the project's ID and slug.
    pub fn stem(&self) -> String {
        id_from_path(&self.path).unwrap_or_default()
    }
}

/// Supplier of raw markdown documents.
///
/// Both operations may fail; any failure here is fatal to the load that
/// issued it.
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// Enumerate every document.
    async fn list(&self) -> Result<Vec<SourceEntry>>;

    /// Fetch the raw text of one document.
    async fn fetch(&self, entry: &SourceEntry) -> Result<String>;
}

// ============================================================================
// DirectorySource
// ============================================================================

/// Markdown files directly inside one directory (not recursive).
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extensions: HashSet<String>,
}

impl DirectorySource {
    /// Source over `*.md` files in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: HashSet::from(["md".to_string()]),
        }
    }

    /// Replace the accepted extensions (without dots, case-insensitive).
    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = extensions.iter().map(|e| e.to_lowercase()).collect();
        self
    }

    /// Directory being listed.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

#[async_trait]
impl SourceProvider for DirectorySource {
    async fn list(&self) -> Result<Vec<SourceEntry>> {
        let mut dir = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            Error::source_unavailable_with(
                format!("Cannot read content directory {}", self.root.display()),
                e,
            )
        })?;

        let mut entries = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| Error::io_with_path(e, &self.root))?
        {
            let path = entry.path();
            if !self.accepts(&path) {
                continue;
            }
            // Follows symlinks; broken links are skipped
            let is_file = tokio::fs::metadata(&path)
                .await
                .is_ok_and(|meta| meta.is_file());
            if is_file {
                entries.push(SourceEntry::new(path));
            }
        }

        // Sort for deterministic ordering
        entries.sort();
        log::debug!(
            "Found {} documents in {}",
            entries.len(),
            self.root.display()
        );
        Ok(entries)
    }

    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the load.
    async fn fetch(&self, entry: &SourceEntry) -> Result<String> {
        let bytes = tokio::fs::read(entry.path())
            .await
            .map_err(|e| Error::io_with_path(e, entry.path()))?;

        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::warn!(
                    "{} is not valid UTF-8; decoding lossily",
                    entry.path().display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }
}

// ============================================================================
// MemorySource
// ============================================================================

/// Documents held in memory, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<(SourceEntry, String)>,
}

impl MemorySource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document.
    pub fn with_document(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    /// Add a document in place.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents.push((SourceEntry::new(path), text.into()));
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the source has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<P, T> FromIterator<(P, T)> for MemorySource
where
    P: Into<PathBuf>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (path, text) in iter {
            source.insert(path, text);
        }
        source
    }
}

#[async_trait]
impl SourceProvider for MemorySource {
    async fn list(&self) -> Result<Vec<SourceEntry>> {
        Ok(self.documents.iter().map(|(e, _)| e.clone()).collect())
    }

    async fn fetch(&self, entry: &SourceEntry) -> Result<String> {
        self.documents
            .iter()
            .find(|(e, _)| e == entry)
            .map(|(_, text)| text.clone())
            .ok_or_else(|| {
                Error::source_unavailable(format!(
                    "Document {} is not in this source",
                    entry.path().display()
                ))
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
