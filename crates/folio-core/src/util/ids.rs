//! Identifier utilities.
//!
//! A project's identifier is the file name of its markdown document without
//! the extension. The stem is used verbatim: it doubles as the URL-facing
//! slug, so it is not case-folded or otherwise rewritten.

use std::path::Path;

/// Compute an ID from a file path's stem.
///
/// Returns `None` if the path has no file stem or the stem is not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use folio_core::util::ids::id_from_path;
///
/// assert_eq!(
///     id_from_path(Path::new("/src/content/projects/weather-app.md")),
///     Some("weather-app".to_string())
/// );
/// assert_eq!(id_from_path(Path::new("/")), None);
/// ```
pub fn id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
}
