//! Common test sources and fixtures for catalog integration tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_catalog::{MemorySource, SourceEntry, SourceProvider};
use folio_core::{Error, Result};

/// Render a valid project document.
pub fn project_doc(title: &str, date: &str, category: &str, technologies: &[&str]) -> String {
    format!(
        "---\n\
         title: \"{title}\"\n\
         description: About {title}\n\
         technologies: [{}]\n\
         category: {category}\n\
         imageUrl: /images/{title}.png\n\
         featured: {}\n\
         date: {date}\n\
         ---\n\
         \n\
         # {title}\n",
        technologies
            .iter()
            .map(|t| format!("'{t}'"))
            .collect::<Vec<_>>()
            .join(", "),
        category == "web",
    )
}

/// The three-document portfolio used across tests.
pub fn portfolio() -> MemorySource {
    MemorySource::new()
        .with_document(
            "/src/content/projects/weather.md",
            project_doc("Weather", "2024-01-01", "web", &["Vue", "TypeScript"]),
        )
        .with_document(
            "/src/content/projects/cli-tool.md",
            project_doc("CLI Tool", "2023-06-15", "tools", &["Rust"]),
        )
        .with_document(
            "/src/content/projects/portfolio.md",
            project_doc("Portfolio", "2024-06-01", "web", &["Vue", "Vite"]),
        )
}

/// Source whose enumeration can be switched to fail.
pub struct SwitchableSource {
    inner: MemorySource,
    failing: AtomicBool,
}

impl SwitchableSource {
    pub fn new(inner: MemorySource) -> Arc<Self> {
        Arc::new(Self {
            inner,
            failing: AtomicBool::new(false),
        })
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl SourceProvider for SwitchableSource {
    async fn list(&self) -> Result<Vec<SourceEntry>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::source_unavailable("listing disabled"));
        }
        self.inner.list().await
    }

    async fn fetch(&self, entry: &SourceEntry) -> Result<String> {
        self.inner.fetch(entry).await
    }
}

/// Source whose fetch fails for one named stem.
pub struct BrokenDocumentSource {
    inner: MemorySource,
    broken_stem: String,
}

impl BrokenDocumentSource {
    pub fn new(inner: MemorySource, broken_stem: &str) -> Self {
        Self {
            inner,
            broken_stem: broken_stem.to_string(),
        }
    }
}

#[async_trait]
impl SourceProvider for BrokenDocumentSource {
    async fn list(&self) -> Result<Vec<SourceEntry>> {
        self.inner.list().await
    }

    async fn fetch(&self, entry: &SourceEntry) -> Result<String> {
        if entry.stem() == self.broken_stem {
            return Err(Error::source_unavailable(format!(
                "cannot fetch {}",
                entry.stem()
            )));
        }
        self.inner.fetch(entry).await
    }
}

/// Source that delays every fetch and records peak concurrency.
pub struct SlowSource {
    inner: MemorySource,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    fetched: AtomicUsize,
}

impl SlowSource {
    pub fn new(inner: MemorySource, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            inner,
            delay,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            fetched: AtomicUsize::new(0),
        })
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn fetched(&self) -> usize {
        self.fetched.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceProvider for SlowSource {
    async fn list(&self) -> Result<Vec<SourceEntry>> {
        self.inner.list().await
    }

    async fn fetch(&self, entry: &SourceEntry) -> Result<String> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.fetched.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(entry).await
    }
}

/// Many small valid documents, one per day of January 2024.
pub fn many_documents(count: usize) -> MemorySource {
    (0..count)
        .map(|i| {
            let date = format!("2024-01-{:02}", (i % 28) + 1);
            (
                format!("doc-{i:03}.md"),
                project_doc(&format!("Doc {i}"), &date, "bulk", &["Rust"]),
            )
        })
        .collect()
}
