//! Frontmatter scalar values.
//!
//! Frontmatter values come in three shapes, decided purely by syntax:
//!
//! | Raw text                 | Value                              |
//! |--------------------------|------------------------------------|
//! | `"text"` or `'text'`     | `String("text")`                   |
//! | `[a, 'b', "c"]`          | `List(["a", "b", "c"])`            |
//! | `true` / `false`         | `Bool(true)` / `Bool(false)`       |
//! | anything else            | `String(<raw text>)`               |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single coerced frontmatter value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    /// Boolean literal.
    Bool(bool),
    /// Inline array of strings.
    List(Vec<String>),
    /// Quoted or bare text.
    String(String),
}

impl FrontmatterValue {
    /// Coerce a raw value by its syntax.
    ///
    /// The input is trimmed first. Rules are tried in order: quoted string,
    /// inline array, boolean literal, bare text.
    ///
    /// Quotes are stripped without any escape processing. Array items have
    /// every quote character removed, wherever it appears. An empty array
    /// `[]` yields a single empty item.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_content::FrontmatterValue;
    ///
    /// assert_eq!(
    ///     FrontmatterValue::coerce("['Vue', \"TypeScript\", Vite]"),
    ///     FrontmatterValue::List(vec!["Vue".into(), "TypeScript".into(), "Vite".into()])
    /// );
    /// assert_eq!(FrontmatterValue::coerce("true"), FrontmatterValue::Bool(true));
    /// assert_eq!(
    ///     FrontmatterValue::coerce("\"Hello, World\""),
    ///     FrontmatterValue::String("Hello, World".into())
    /// );
    /// ```
    pub fn coerce(raw: &str) -> Self {
        let raw = raw.trim();

        if is_wrapped(raw, '"', '"') || is_wrapped(raw, '\'', '\'') {
            return FrontmatterValue::String(strip_outer(raw).to_string());
        }

        if is_wrapped(raw, '[', ']') {
            let items = strip_outer(raw)
                .split(',')
                .map(|item| item.trim().replace(['\'', '"'], ""))
                .collect();
            return FrontmatterValue::List(items);
        }

        match raw {
            "true" => FrontmatterValue::Bool(true),
            "false" => FrontmatterValue::Bool(false),
            _ => FrontmatterValue::String(raw.to_string()),
        }
    }

    /// Get the string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontmatterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FrontmatterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the items, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FrontmatterValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the value's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FrontmatterValue::Bool(_) => "boolean",
            FrontmatterValue::List(_) => "list",
            FrontmatterValue::String(_) => "string",
        }
    }
}

impl fmt::Display for FrontmatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontmatterValue::Bool(b) => write!(f, "{b}"),
            FrontmatterValue::List(items) => write!(f, "[{}]", items.join(", ")),
            FrontmatterValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for FrontmatterValue {
    fn from(s: &str) -> Self {
        FrontmatterValue::String(s.to_string())
    }
}

impl From<bool> for FrontmatterValue {
    fn from(b: bool) -> Self {
        FrontmatterValue::Bool(b)
    }
}

impl From<Vec<String>> for FrontmatterValue {
    fn from(items: Vec<String>) -> Self {
        FrontmatterValue::List(items)
    }
}

/// `starts_with(open) && ends_with(close)`. A lone quote character counts as
/// wrapped in itself.
fn is_wrapped(raw: &str, open: char, close: char) -> bool {
    raw.starts_with(open) && raw.ends_with(close)
}

/// Drop the first and last character. Only called on ASCII delimiters.
fn strip_outer(raw: &str) -> &str {
    if raw.len() < 2 {
        return "";
    }
    &raw[1..raw.len() - 1]
}
