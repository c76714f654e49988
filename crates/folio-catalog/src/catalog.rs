//! Immutable catalog snapshot and its queries.
//!
//! A [`Catalog`] is built once per load and never patched. All queries are
//! read-only and return results in catalog order (newest first).

use std::collections::BTreeSet;

use crate::project::{sort_by_date_desc, Project};

/// Projects sorted by date, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, sorting the projects by date descending.
    ///
    /// Projects whose date cannot be parsed go last. Equal dates keep the
    /// order they were given in.
    pub fn new(mut projects: Vec<Project>) -> Self {
        sort_by_date_desc(&mut projects);
        Self { projects }
    }

    /// All projects in catalog order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the catalog has no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Iterate over projects in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// Projects listing `tech` among their technologies (exact match).
    pub fn projects_by_technology(&self, tech: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.uses_technology(tech))
            .collect()
    }

    /// Projects in `category` (exact match).
    pub fn projects_by_category(&self, category: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.frontmatter.category == category)
            .collect()
    }

    /// Projects flagged as featured.
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.frontmatter.featured)
            .collect()
    }

    /// The first project whose slug is `slug`.
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    /// Every distinct technology, sorted ascending.
    pub fn all_technologies(&self) -> Vec<String> {
        self.projects
            .iter()
            .flat_map(|p| p.frontmatter.technologies.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every distinct category, sorted ascending.
    pub fn all_categories(&self) -> Vec<String> {
        self.projects
            .iter()
            .map(|p| p.frontmatter.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

impl FromIterator<Project> for Catalog {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
