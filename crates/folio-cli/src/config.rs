//! Folio configuration.
//!
//! Settings live in a TOML file resolved from `--config`, the
//! `FOLIO_CONFIG` environment variable (handled by clap), or
//! `<config_dir>/folio/config.toml`. A missing default file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_catalog::{DirectorySource, LoadOptions};
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Name used for the config directory and in user-facing hints.
pub const PROJECT_NAME: &str = "folio";

/// Settings for loading the project catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Directory holding the project documents.
    pub content_dir: PathBuf,
    /// File extension of project documents, without the dot.
    pub extension: String,
    /// Documents fetched at once.
    pub max_concurrency: usize,
    /// Per-call source timeout in seconds; 0 disables it.
    pub fetch_timeout_secs: u64,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content/projects"),
            extension: "md".to_string(),
            max_concurrency: folio_catalog::loader::DEFAULT_MAX_CONCURRENCY,
            fetch_timeout_secs: folio_catalog::loader::DEFAULT_FETCH_TIMEOUT.as_secs(),
        }
    }
}

impl FolioConfig {
    /// Standard config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path if given, else the standard location.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        explicit
            .map(PathBuf::from)
            .or_else(Self::default_config_path)
    }

    /// Load the configuration.
    ///
    /// An explicitly named file must exist; a missing default file yields
    /// [`FolioConfig::default`].
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if explicit.is_some() => Err(Error::config(format!(
                "Config file does not exist at {}",
                path.display()
            ))),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace the content directory when `dir` is given.
    pub fn with_content_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.content_dir = dir;
        }
        self
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Loader tuning derived from these settings.
    pub fn load_options(&self) -> LoadOptions {
        let options = LoadOptions::default().with_max_concurrency(self.max_concurrency);
        match self.fetch_timeout_secs {
            0 => options.without_timeout(),
            secs => options.with_fetch_timeout(Duration::from_secs(secs)),
        }
    }

    /// Directory source over the configured content directory.
    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.content_dir).with_extensions(&[self.extension.as_str()])
    }
}

// ============================================================================
// Tests
// ============================================================================
