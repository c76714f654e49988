//! Batch catalog loading.
//!
//! [`load_catalog`] enumerates a [`SourceProvider`], fetches and parses every
//! document with bounded concurrency, and assembles a sorted [`Catalog`].
//!
//! Failure policy:
//!
//! - A document that fails to parse ([`Error::Format`], [`Error::Schema`]) is
//!   logged and skipped.
//! - A failed or timed-out `list`/`fetch` aborts the load. All in-flight
//!   documents still run to completion first; nothing is cancelled.

use std::future::Future;
use std::time::Duration;

use folio_core::{Error, Result};
use futures::stream::{self, StreamExt};

use crate::catalog::Catalog;
use crate::project::Project;
use crate::source::{SourceEntry, SourceProvider};

/// Default number of documents fetched at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Default limit for a single source call.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Tuning for a catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Maximum documents fetched and parsed concurrently (at least 1).
    pub max_concurrency: usize,
    /// Limit for each `list` and `fetch` call; `None` waits forever.
    pub fetch_timeout: Option<Duration>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            fetch_timeout: Some(DEFAULT_FETCH_TIMEOUT),
        }
    }
}

impl LoadOptions {
    /// Set the concurrency limit.
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.max_concurrency = max;
        self
    }

    /// Set the per-call timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Disable the per-call timeout.
    pub fn without_timeout(mut self) -> Self {
        self.fetch_timeout = None;
        self
    }
}

/// Statistics about a completed load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Documents the source listed.
    pub discovered: usize,
    /// Documents that became projects.
    pub loaded: usize,
    /// Documents dropped because they failed to parse.
    pub skipped: usize,
}

/// Load every document from `source` into a new catalog.
///
/// # Errors
///
/// Returns the first source error (enumeration, fetch, or timeout). Parse
/// errors never surface here.
pub async fn load_catalog(
    source: &dyn SourceProvider,
    options: &LoadOptions,
) -> Result<(Catalog, LoadStats)> {
    let entries = with_timeout(options.fetch_timeout, source.list()).await?;
    log::info!("Loading {} project documents", entries.len());

    let outcomes: Vec<Result<Option<Project>>> = stream::iter(
        (0..entries.len())
            .map(|i| load_document(source, &entries[i], options.fetch_timeout)),
    )
    .buffered(options.max_concurrency.max(1))
    .collect()
    .await;

    let mut stats = LoadStats {
        discovered: entries.len(),
        ..Default::default()
    };
    let mut projects = Vec::with_capacity(entries.len());
    let mut first_error = None;

    for outcome in outcomes {
        match outcome {
            Ok(Some(project)) => projects.push(project),
            Ok(None) => stats.skipped += 1,
            Err(e) => {
                log::error!("Source failure while loading projects: {e}");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    if let Some(e) = first_error {
        return Err(e);
    }

    stats.loaded = projects.len();
    let catalog = Catalog::new(projects);

    log::info!(
        "Loaded {} projects ({} skipped)",
        stats.loaded,
        stats.skipped
    );

    Ok((catalog, stats))
}

/// Fetch and parse one document. `Ok(None)` means it was skipped.
async fn load_document(
    source: &dyn SourceProvider,
    entry: &SourceEntry,
    timeout: Option<Duration>,
) -> Result<Option<Project>> {
    let raw = with_timeout(timeout, source.fetch(entry)).await?;
    let id = entry.stem();

    match Project::from_source(id.as_str(), &raw) {
        Ok(project) => Ok(Some(project)),
        Err(e) if e.is_document_scoped() => {
            log::warn!("Error parsing {id}: {e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

async fn with_timeout<T, F>(limit: Option<Duration>, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| Error::timeout(limit))?,
        None => fut.await,
    }
}

// ============================================================================
// Tests
// ============================================================================
