//! Typed project records.
//!
//! [`ProjectFrontmatter`] is validated out of the open key/value map produced
//! by [`folio_content::extract_frontmatter`]. [`Project`] adds the identity
//! (file stem) and body of the document it came from.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use folio_content::{extract_frontmatter, FrontmatterMap, FrontmatterValue};
use folio_core::{Error, Result};
use serde::Serialize;

// ============================================================================
// ProjectStatus
// ============================================================================

/// Development status of a project.
///
/// Unknown values are kept verbatim in [`ProjectStatus::Other`] rather than
/// rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum ProjectStatus {
    /// `completed`
    Completed,
    /// `in-progress`
    InProgress,
    /// `planned`
    Planned,
    /// Any other text.
    Other(String),
}

impl ProjectStatus {
    /// Map frontmatter text onto a status.
    pub fn parse(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            "in-progress" => Self::InProgress,
            "planned" => Self::Planned,
            other => Self::Other(other.to_string()),
        }
    }

    /// The frontmatter spelling of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

// ============================================================================
// ProjectFrontmatter
// ============================================================================

/// Metadata block of a project document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFrontmatter {
    /// Project name.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Technologies in source order; duplicates are kept.
    pub technologies: Vec<String>,
    /// Single category.
    pub category: String,
    /// Cover image (`imageUrl`).
    pub image_url: String,
    /// Repository link (`githubUrl`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Deployed site (`liveUrl`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Whether the project is highlighted.
    pub featured: bool,
    /// Raw date text, parsed only when sorting.
    pub date: String,
    /// Development status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    /// Keys this schema does not know about, serialized under `extra` so
    /// they never shadow record fields such as `id` or `content`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, FrontmatterValue>,
}

impl ProjectFrontmatter {
    /// Parse [`ProjectFrontmatter::date`] into an instant.
    ///
    /// Returns `None` for dates that cannot be parsed.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }
}

impl TryFrom<FrontmatterMap> for ProjectFrontmatter {
    type Error = Error;

    /// Validate required keys and their shapes.
    ///
    /// Fails with [`Error::Schema`] naming the first offending key.
    fn try_from(mut values: FrontmatterMap) -> Result<Self> {
        let title = take_string(&mut values, "title")?;
        let description = take_string(&mut values, "description")?;
        let technologies = take_list(&mut values, "technologies")?;
        let category = take_string(&mut values, "category")?;
        let image_url = take_string(&mut values, "imageUrl")?;
        let github_url = take_optional_string(&mut values, "githubUrl")?;
        let live_url = take_optional_string(&mut values, "liveUrl")?;
        let featured = take_bool(&mut values, "featured")?;
        let date = take_string(&mut values, "date")?;
        let status = values.remove("status").map(|value| match value {
            FrontmatterValue::String(s) => ProjectStatus::parse(&s),
            other => ProjectStatus::Other(other.to_string()),
        });

        Ok(Self {
            title,
            description,
            technologies,
            category,
            image_url,
            github_url,
            live_url,
            featured,
            date,
            status,
            extra: values,
        })
    }
}

fn take_required(values: &mut FrontmatterMap, key: &str) -> Result<FrontmatterValue> {
    values
        .remove(key)
        .ok_or_else(|| Error::schema(key, "is required"))
}

fn mistyped(key: &str, expected: &str, found: &FrontmatterValue) -> Error {
    Error::schema(key, format!("must be a {expected}, found {}", found.kind()))
}

fn take_string(values: &mut FrontmatterMap, key: &str) -> Result<String> {
    match take_required(values, key)? {
        FrontmatterValue::String(s) => Ok(s),
        other => Err(mistyped(key, "string", &other)),
    }
}

fn take_optional_string(values: &mut FrontmatterMap, key: &str) -> Result<Option<String>> {
    match values.remove(key) {
        None => Ok(None),
        Some(FrontmatterValue::String(s)) => Ok(Some(s)),
        Some(other) => Err(mistyped(key, "string", &other)),
    }
}

fn take_bool(values: &mut FrontmatterMap, key: &str) -> Result<bool> {
    match take_required(values, key)? {
        FrontmatterValue::Bool(b) => Ok(b),
        other => Err(mistyped(key, "boolean", &other)),
    }
}

fn take_list(values: &mut FrontmatterMap, key: &str) -> Result<Vec<String>> {
    match take_required(values, key)? {
        FrontmatterValue::List(items) => Ok(items),
        other => Err(mistyped(key, "list", &other)),
    }
}

// ============================================================================
// Project
// ============================================================================

/// A catalog record: one parsed project document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Project {
    /// File stem of the source document.
    pub id: String,
    /// URL-facing identifier; same as `id`.
    pub slug: String,
    /// Parsed metadata.
    #[serde(flatten)]
    pub frontmatter: ProjectFrontmatter,
    /// Markdown body, trimmed.
    pub content: String,
}

impl Project {
    /// Build a project from a document's identifier and raw text.
    ///
    /// # Errors
    ///
    /// [`Error::Format`] when the frontmatter block is missing,
    /// [`Error::Schema`] when a required field is missing or mistyped.
    pub fn from_source(id: impl Into<String>, raw: &str) -> Result<Self> {
        let (frontmatter, content) = parse_project(raw)?;
        let id = id.into();
        Ok(Self {
            slug: id.clone(),
            id,
            frontmatter,
            content,
        })
    }

    /// Parsed date, see [`ProjectFrontmatter::timestamp`].
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.frontmatter.timestamp()
    }

    /// Whether `technologies` contains `tech` exactly.
    pub fn uses_technology(&self, tech: &str) -> bool {
        self.frontmatter.technologies.iter().any(|t| t == tech)
    }
}

/// Parse a project document into typed frontmatter and trimmed body.
///
/// # Example
///
/// ```rust
/// use folio_catalog::parse_project;
///
/// let raw = "---\n\
///     title: \"Hello, World\"\n\
///     description: Demo\n\
///     technologies: ['Vue', \"TypeScript\", Vite]\n\
///     category: web\n\
///     imageUrl: /img/hello.png\n\
///     featured: true\n\
///     date: 2024-06-01\n\
///     ---\n\
///     ## Hello\n";
///
/// let (fm, body) = parse_project(raw).unwrap();
/// assert_eq!(fm.title, "Hello, World");
/// assert_eq!(fm.technologies, ["Vue", "TypeScript", "Vite"]);
/// assert!(fm.featured);
/// assert_eq!(body, "# Hello");
/// ```
pub fn parse_project(raw: &str) -> Result<(ProjectFrontmatter, String)> {
    let (values, body) = extract_frontmatter(raw)?.into_parts();
    let frontmatter = ProjectFrontmatter::try_from(values)?;
    Ok((frontmatter, body.to_string()))
}

/// Parse a frontmatter date.
///
/// Accepts, all read as UTC:
///
/// - RFC 3339 (`2024-06-01T12:00:00Z`)
/// - a naive date-time (`2024-06-01T12:00:00` or `2024-06-01 12:00:00`)
/// - a calendar date (`2024-06-01`, `2024/06/01`, `June 1, 2024`, `Jun 1, 2024`)
/// - a reduced-precision date (`2024-06`, `2024`), taken as the first day of
///   the month or year
///
/// Dates without a time are placed at midnight.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| parse_reduced_date(raw))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM` or `YYYY`.
fn parse_reduced_date(raw: &str) -> Option<NaiveDate> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let (year, month) = match raw.split_once('-') {
        Some((year, month)) if month.len() <= 2 && all_digits(month) => {
            (year, month.parse().ok()?)
        }
        Some(_) => return None,
        None => (raw, 1),
    };
    if year.len() != 4 || !all_digits(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Sort newest first. Unparseable dates go last; ties keep their order.
pub fn sort_by_date_desc(projects: &mut [Project]) {
    projects.sort_by_cached_key(|p| Reverse(p.timestamp()));
}

// ============================================================================
// Tests
// ============================================================================
