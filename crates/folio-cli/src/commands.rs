//! Catalog query commands.
//!
//! Each `cmd_*` function renders its result as text or JSON and returns it;
//! [`run`] loads the catalog, dispatches, and prints.

use std::fmt::Write as _;
use std::sync::Arc;

use folio_catalog::{Catalog, Project, ProjectStore};

use crate::cli::{Cli, Command};
use crate::config::FolioConfig;
use crate::config_handlers::handle_config_command;
use crate::error::Result;

// ============================================================================
// Filtering
// ============================================================================

/// Filters for `folio list`; every set filter must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Exact technology name.
    pub technology: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
    /// Only featured projects.
    pub featured: bool,
}

impl ListFilter {
    /// Whether `project` passes every filter.
    pub fn matches(&self, project: &Project) -> bool {
        let fm = &project.frontmatter;
        self.technology
            .as_deref()
            .is_none_or(|tech| project.uses_technology(tech))
            && self
                .category
                .as_deref()
                .is_none_or(|category| fm.category == category)
            && (!self.featured || fm.featured)
    }

    /// Matching projects, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Project> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Load the catalog described by `config`.
pub async fn load_catalog(config: &FolioConfig) -> Result<Arc<Catalog>> {
    tracing::debug!(
        content_dir = %config.content_dir.display(),
        extension = %config.extension,
        "Loading catalog"
    );
    let store = ProjectStore::with_options(config.source(), config.load_options());
    let stats = store.load_projects().await?;
    tracing::debug!(
        discovered = stats.discovered,
        loaded = stats.loaded,
        skipped = stats.skipped,
        "Catalog loaded"
    );
    Ok(store.catalog())
}

/// Render the filtered project list.
pub fn cmd_list(catalog: &Catalog, filter: &ListFilter, json: bool) -> Result<String> {
    let projects = filter.apply(catalog);
    if json {
        return to_json(&projects);
    }
    if projects.is_empty() {
        return Ok("No projects found.\n".to_string());
    }

    let slug_width = projects.iter().map(|p| p.slug.len()).max().unwrap_or(0);
    let mut out = String::new();
    for project in projects {
        let fm = &project.frontmatter;
        let marker = if fm.featured { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:<10}  {:<slug_width$}  {}{marker}",
            fm.date, project.slug, fm.title
        );
    }
    Ok(out)
}

/// Render one project, body included.
pub fn cmd_show(catalog: &Catalog, slug: &str, json: bool) -> Result<String> {
    let project = catalog
        .project_by_slug(slug)
        .ok_or_else(|| folio_core::Error::not_found(slug, "Project"))?;
    if json {
        return to_json(project);
    }

    let fm = &project.frontmatter;
    let mut out = String::new();
    let _ = writeln!(out, "{}", fm.title);
    let _ = writeln!(out, "{}", "=".repeat(fm.title.chars().count()));
    let _ = writeln!(out, "slug:         {}", project.slug);
    let _ = writeln!(out, "date:         {}", fm.date);
    let _ = writeln!(out, "category:     {}", fm.category);
    let _ = writeln!(out, "technologies: {}", fm.technologies.join(", "));
    let _ = writeln!(out, "featured:     {}", if fm.featured { "yes" } else { "no" });
    if let Some(status) = &fm.status {
        let _ = writeln!(out, "status:       {status}");
    }
    let _ = writeln!(out, "image:        {}", fm.image_url);
    if let Some(url) = &fm.github_url {
        let _ = writeln!(out, "github:       {url}");
    }
    if let Some(url) = &fm.live_url {
        let _ = writeln!(out, "live:         {url}");
    }
    let _ = writeln!(out, "\n{}", fm.description);
    if !project.content.is_empty() {
        let _ = writeln!(out, "\n{}", project.content);
    }
    Ok(out)
}

/// Render every distinct technology.
pub fn cmd_technologies(catalog: &Catalog, json: bool) -> Result<String> {
    render_names(&catalog.all_technologies(), json)
}

/// Render every distinct category.
pub fn cmd_categories(catalog: &Catalog, json: bool) -> Result<String> {
    render_names(&catalog.all_categories(), json)
}

fn render_names(names: &[String], json: bool) -> Result<String> {
    if json {
        return to_json(&names);
    }
    Ok(names.iter().map(|n| format!("{n}\n")).collect())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        content_dir,
        json,
        command,
        ..
    } = cli;
    let config_path = config_path.as_deref();

    let output = match command {
        Command::Config { action } => {
            handle_config_command(config_path, content_dir, action)?;
            return Ok(());
        }
        Command::List {
            technology,
            category,
            featured,
        } => {
            let filter = ListFilter {
                technology,
                category,
                featured,
            };
            let catalog = open_catalog(config_path, content_dir).await?;
            cmd_list(&catalog, &filter, json)?
        }
        Command::Show { slug } => {
            let catalog = open_catalog(config_path, content_dir).await?;
            cmd_show(&catalog, &slug, json)?
        }
        Command::Technologies => {
            let catalog = open_catalog(config_path, content_dir).await?;
            cmd_technologies(&catalog, json)?
        }
        Command::Categories => {
            let catalog = open_catalog(config_path, content_dir).await?;
            cmd_categories(&catalog, json)?
        }
    };
    print!("{output}");
    Ok(())
}

async fn open_catalog(
    config_path: Option<&str>,
    content_dir: Option<std::path::PathBuf>,
) -> Result<Arc<Catalog>> {
    let config = FolioConfig::load(config_path)?.with_content_dir(content_dir);
    load_catalog(&config).await
}

// ============================================================================
// Tests
// ============================================================================
