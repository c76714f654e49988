//! Frontmatter extraction from markdown files.
//!
//! Frontmatter is metadata at the start of a markdown file, delimited by
//! `---` lines, written in a small YAML-like subset: one `key: value` pair
//! per line, with quoted strings, inline arrays, and boolean literals.
//!
//! ```markdown
//! ---
//! title: "Weather Dashboard"
//! technologies: ['Vue', 'TypeScript', Vite]
//! featured: true
//! date: 2024-06-01
//! ---
//!
//! # Weather Dashboard
//!
//! The body of the document starts here.
//! ```
//!
//! Nested maps, multi-line scalars, anchors, and tags are not supported.
//!
//! # Usage
//!
//! ```rust
//! use folio_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\nfeatured: true\n---\n\nBody\n";
//! let result = extract_frontmatter(content).unwrap();
//!
//! assert_eq!(result.get_str("title"), Some("Test"));
//! assert_eq!(result.get_bool("featured"), Some(true));
//! assert_eq!(result.body(), "Body");
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use folio_core::{Error, Result};
use regex::Regex;

use super::value::FrontmatterValue;

/// Opening delimiter line, the block (lazy), closing delimiter line, then the
/// rest of the document. Anchored at both ends of the input.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n(.*)\z").expect("Invalid frontmatter regex")
});

/// Parsed frontmatter key/value pairs, keyed by frontmatter key.
pub type FrontmatterMap = BTreeMap<String, FrontmatterValue>;

/// Result of frontmatter extraction.
///
/// Contains every key/value pair found in the block and the trimmed body
/// content after the closing delimiter.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontmatterResult<'a> {
    values: FrontmatterMap,
    body: &'a str,
}

impl<'a> FrontmatterResult<'a> {
    /// All parsed key/value pairs, including keys no schema knows about.
    pub fn values(&self) -> &FrontmatterMap {
        &self.values
    }

    /// Get the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.values.get(key)
    }

    /// Get a string field. `None` if missing or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Get a boolean field. `None` if missing or not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Get a list field. `None` if missing or not a list.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key)?.as_list()
    }

    /// Get the body content (everything after frontmatter, trimmed).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Split into the key/value map and the body.
    pub fn into_parts(self) -> (FrontmatterMap, &'a str) {
        (self.values, self.body)
    }
}

/// Extract frontmatter from markdown content.
///
/// The whole input must have the shape
/// `---\n<block>\n---\n<body>`; otherwise this fails with
/// [`Error::Format`]. There is no partial recovery.
///
/// Within the block:
///
/// - Each line is split on its first `:` into key and value; both are trimmed.
/// - Blank lines and lines without `:` are skipped.
/// - Values are coerced with [`FrontmatterValue::coerce`].
/// - A repeated key keeps its last value.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::extract_frontmatter;
///
/// let content = "---\ntechnologies: [Rust, 'tokio']\n---\n# Heading";
/// let result = extract_frontmatter(content).unwrap();
/// assert_eq!(
///     result.get_list("technologies"),
///     Some(&["Rust".to_string(), "tokio".to_string()][..])
/// );
/// assert_eq!(result.body(), "# Heading");
///
/// // Without frontmatter
/// assert!(extract_frontmatter("# Just Markdown").is_err());
/// ```
pub fn extract_frontmatter(content: &str) -> Result<FrontmatterResult<'_>> {
    let caps = FRONTMATTER_RE
        .captures(content)
        .ok_or_else(|| Error::format("Invalid markdown format - missing frontmatter"))?;

    let block = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str()).trim();

    Ok(FrontmatterResult {
        values: parse_block(block),
        body,
    })
}

/// Strip frontmatter from content, returning only the trimmed body.
///
/// Content without a well-formed frontmatter block is returned unchanged.
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::strip_frontmatter;
///
/// let content = "---\ntitle: Test\n---\n\n# Heading\n";
/// assert_eq!(strip_frontmatter(content), "# Heading");
/// assert_eq!(strip_frontmatter("# Just content"), "# Just content");
/// ```
pub fn strip_frontmatter(content: &str) -> &str {
    extract_frontmatter(content)
        .map(|r| r.body())
        .unwrap_or(content)
}

fn parse_block(block: &str) -> FrontmatterMap {
    let mut values = FrontmatterMap::new();

    for line in block.split('\n') {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, raw_value)) = line.split_once(':') else {
            log::trace!("Skipping frontmatter line without ':': {line:?}");
            continue;
        };

        values.insert(key.trim().to_string(), FrontmatterValue::coerce(raw_value));
    }

    values
}

// ============================================================================
// Tests
// ============================================================================
