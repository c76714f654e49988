//! Observable project store.
//!
//! [`ProjectStore`] owns the current [`Catalog`] snapshot together with the
//! `loading` / `error` flags of the most recent reload, and publishes every
//! change through a watch channel.
//!
//! # Usage
//!
//! ```rust,ignore
//! use folio_catalog::{DirectorySource, ProjectStore};
//!
//! let store = ProjectStore::new(DirectorySource::new("content/projects"));
//! let mut updates = store.subscribe();
//!
//! store.load_projects().await?;
//! for project in store.featured_projects() {
//!     println!("{}", project.frontmatter.title);
//! }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use folio_core::{Error, Result};
use tokio::sync::watch;

use crate::catalog::Catalog;
use crate::loader::{load_catalog, LoadOptions, LoadStats};
use crate::project::Project;
use crate::source::SourceProvider;

/// User-facing message published when a reload fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects";

// ============================================================================
// StoreState
// ============================================================================

/// Snapshot of the store as readers see it.
#[derive(Clone, Debug, Default)]
pub struct StoreState {
    /// Latest successfully loaded catalog.
    pub catalog: Arc<Catalog>,
    /// A reload is in progress.
    pub loading: bool,
    /// Message from the last failed reload, cleared when a reload starts.
    pub error: Option<String>,
}

impl StoreState {
    /// Projects of the current catalog.
    pub fn projects(&self) -> &[Project] {
        self.catalog.projects()
    }
}

// ============================================================================
// ProjectStore
// ============================================================================

/// Thread-safe handle over the project catalog.
///
/// Cheap to clone (Arc internals); clones share state. Reloads are not
/// serialized by the store: two concurrent [`load_projects`] calls both run
/// and the last one to finish wins.
///
/// [`load_projects`]: ProjectStore::load_projects
#[derive(Clone)]
pub struct ProjectStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    source: Arc<dyn SourceProvider>,
    options: LoadOptions,
    tx: watch::Sender<StoreState>,
}

/// Clears `loading` on every exit path, including cancellation of the
/// reload future.
struct LoadingGuard<'a> {
    tx: &'a watch::Sender<StoreState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.tx.send_if_modified(|state| std::mem::replace(&mut state.loading, false));
    }
}

impl ProjectStore {
    /// Create an empty store over `source` with default load options.
    pub fn new<S: SourceProvider + 'static>(source: S) -> Self {
        Self::with_options(source, LoadOptions::default())
    }

    /// Create an empty store with explicit load options.
    pub fn with_options<S: SourceProvider + 'static>(source: S, options: LoadOptions) -> Self {
        Self::from_shared(Arc::new(source), options)
    }

    /// Create an empty store over an already shared source.
    pub fn from_shared(source: Arc<dyn SourceProvider>, options: LoadOptions) -> Self {
        let (tx, _rx) = watch::channel(StoreState::default());
        Self {
            inner: Arc::new(StoreInner {
                source,
                options,
                tx,
            }),
        }
    }

    /// Load options used by [`ProjectStore::load_projects`].
    pub fn options(&self) -> &LoadOptions {
        &self.inner.options
    }

    /// Current state (cloned; the catalog itself is shared).
    pub fn state(&self) -> StoreState {
        self.inner.tx.borrow().clone()
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.inner.tx.borrow().catalog)
    }

    /// Whether a reload is in progress.
    pub fn is_loading(&self) -> bool {
        self.inner.tx.borrow().loading
    }

    /// Message from the last failed reload.
    pub fn error(&self) -> Option<String> {
        self.inner.tx.borrow().error.clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.inner.tx.subscribe()
    }

    /// Reload the catalog from the source.
    ///
    /// Publishes `loading = true` and clears `error`, loads every document,
    /// then swaps in the new catalog. Documents that fail to parse are
    /// skipped. If the source fails, the previous catalog stays in place,
    /// `error` is set to [`LOAD_FAILED_MESSAGE`], and the error is returned.
    /// `loading` is reset on every exit path.
    pub async fn load_projects(&self) -> Result<LoadStats> {
        let tx = &self.inner.tx;
        tx.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
        let _guard = LoadingGuard { tx };

        match load_catalog(self.inner.source.as_ref(), &self.inner.options).await {
            Ok((catalog, stats)) => {
                tx.send_modify(|state| {
                    state.catalog = Arc::new(catalog);
                    state.loading = false;
                });
                Ok(stats)
            }
            Err(e) => {
                log::error!("Error loading projects: {e}");
                tx.send_modify(|state| {
                    state.error = Some(LOAD_FAILED_MESSAGE.to_string());
                    state.loading = false;
                });
                Err(e)
            }
        }
    }

    /// Wait until no reload is in progress, or timeout.
    pub async fn wait_idle(&self, timeout: Duration) -> Result<StoreState> {
        let mut rx = self.subscribe();
        let deadline = tokio::time::sleep(timeout);
        tokio::pin!(deadline);

        // Check current state first
        {
            let state = rx.borrow_and_update().clone();
            if !state.loading {
                return Ok(state);
            }
        }

        loop {
            tokio::select! {
                _ = &mut deadline => {
                    return Err(Error::timeout(timeout));
                }
                result = rx.changed() => {
                    if result.is_err() {
                        return Ok(self.state());
                    }
                    let state = rx.borrow_and_update().clone();
                    if !state.loading {
                        return Ok(state);
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Queries over the current snapshot
    // ------------------------------------------------------------------------

    /// See [`Catalog::projects_by_technology`].
    pub fn projects_by_technology(&self, tech: &str) -> Vec<Project> {
        owned(self.catalog().projects_by_technology(tech))
    }

    /// See [`Catalog::projects_by_category`].
    pub fn projects_by_category(&self, category: &str) -> Vec<Project> {
        owned(self.catalog().projects_by_category(category))
    }

    /// See [`Catalog::featured_projects`].
    pub fn featured_projects(&self) -> Vec<Project> {
        owned(self.catalog().featured_projects())
    }

    /// See [`Catalog::project_by_slug`].
    pub fn project_by_slug(&self, slug: &str) -> Option<Project> {
        self.catalog().project_by_slug(slug).cloned()
    }

    /// See [`Catalog::all_technologies`].
    pub fn all_technologies(&self) -> Vec<String> {
        self.catalog().all_technologies()
    }

    /// See [`Catalog::all_categories`].
    pub fn all_categories(&self) -> Vec<String> {
        self.catalog().all_categories()
    }
}

fn owned(projects: Vec<&Project>) -> Vec<Project> {
    projects.into_iter().cloned().collect()
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.tx.borrow();
        f.debug_struct("ProjectStore")
            .field("projects", &state.catalog.len())
            .field("loading", &state.loading)
            .field("error", &state.error)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
