//! Frontmatter extraction for Folio markdown documents.
//!
//! This crate turns raw markdown text into an open key/value map plus the
//! document body. It has no knowledge of projects: the catalog crate defines
//! the typed record and validates it from the generic map.
//!
//! # Example
//!
//! ```rust
//! use folio_content::{extract_frontmatter, FrontmatterValue};
//!
//! let content = "---\ntitle: \"Hello, World\"\nfeatured: true\n---\n\nBody";
//! let result = extract_frontmatter(content).unwrap();
//!
//! assert_eq!(result.get_str("title"), Some("Hello, World"));
//! assert_eq!(result.get("featured"), Some(&FrontmatterValue::Bool(true)));
//! assert_eq!(result.body(), "Body");
//! ```

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    extract_frontmatter, strip_frontmatter, FrontmatterMap, FrontmatterResult, FrontmatterValue,
};
