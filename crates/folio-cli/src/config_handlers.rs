//! Handler functions for `folio config` subcommands.

use std::path::PathBuf;

use folio_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::{FolioConfig, PROJECT_NAME};

/// Dispatch a config subcommand.
///
/// `show` and `get` report the effective configuration: the file at
/// `config_path` (or defaults) with `content_dir` applied on top.
pub fn handle_config_command(
    config_path: Option<&str>,
    content_dir: Option<PathBuf>,
    action: ConfigAction,
) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => {
            let config = FolioConfig::load(config_path)?.with_content_dir(content_dir);
            cmd_config_show(&config)
        }
        ConfigAction::Get { key } => {
            let config = FolioConfig::load(config_path)?.with_content_dir(content_dir);
            cmd_config_get(&config, &key)
        }
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = FolioConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Print the effective configuration.
pub fn cmd_config_show(config: &FolioConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Print one configuration value.
pub fn cmd_config_get(config: &FolioConfig, key: &str) -> Result<()> {
    println!("{}", config_value(config, key)?);
    Ok(())
}

/// Look up a configuration value by key, formatted for display.
pub fn config_value(config: &FolioConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    match value.get(key) {
        Some(toml::Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(Error::config(format!(
            "Key '{key}' not found in configuration"
        ))),
    }
}

/// Create a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => FolioConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = FolioConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
