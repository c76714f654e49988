//! Markdown frontmatter extraction.
//!
//! - [`frontmatter`]: delimiter detection and line parsing
//! - [`value`]: syntax-driven coercion of individual values
//!
//! # Design Philosophy
//!
//! These utilities return generic types ([`FrontmatterMap`],
//! [`FrontmatterValue`]) rather than domain-specific structs. The catalog
//! crate defines the project record and validates it from the generic map.

pub mod frontmatter;
pub mod value;

// Re-export key types and functions
pub use frontmatter::{extract_frontmatter, strip_frontmatter, FrontmatterMap, FrontmatterResult};
pub use value::FrontmatterValue;
