//! Project catalog for Folio.
//!
//! This crate turns a set of markdown documents into a sorted, queryable
//! catalog of projects:
//!
//! - [`source`]: where documents come from ([`SourceProvider`])
//! - [`project`]: typed records parsed from frontmatter
//! - [`loader`]: concurrent fetch-and-parse of a whole source
//! - [`catalog`]: the immutable snapshot and its queries
//! - [`store`]: observable state (`catalog`, `loading`, `error`) across reloads
//!
//! # Example
//!
//! ```rust
//! use folio_catalog::{MemorySource, ProjectStore};
//!
//! # tokio_test::block_on(async {
//! let doc = "---\n\
//!     title: Weather\n\
//!     description: Forecasts\n\
//!     technologies: [Vue, Vite]\n\
//!     category: web\n\
//!     imageUrl: /img/weather.png\n\
//!     featured: true\n\
//!     date: 2024-06-01\n\
//!     ---\n\
//!     # Weather\n";
//!
//! let store = ProjectStore::new(MemorySource::new().with_document("weather.md", doc));
//! store.load_projects().await.unwrap();
//!
//! assert_eq!(store.project_by_slug("weather").unwrap().frontmatter.title, "Weather");
//! assert_eq!(store.all_technologies(), vec!["Vite", "Vue"]);
//! # });
//! ```

pub mod catalog;
pub mod loader;
pub mod project;
pub mod source;
pub mod store;

#[cfg(test)]
mod proptests;

// Re-export key types at crate root for convenience
pub use catalog::Catalog;
pub use loader::{load_catalog, LoadOptions, LoadStats};
pub use project::{parse_date, parse_project, Project, ProjectFrontmatter, ProjectStatus};
pub use source::{DirectorySource, MemorySource, SourceEntry, SourceProvider};
pub use store::{ProjectStore, StoreState, LOAD_FAILED_MESSAGE};
