//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Folio - browse a portfolio of markdown project documents
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Browse a portfolio of markdown project documents", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = CONFIG_ENV_VAR, global = true)]
    pub config: Option<String>,

    /// Directory of project documents (overrides the configuration)
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List projects, newest first
    List {
        /// Only projects using this technology (exact match)
        #[arg(short, long)]
        technology: Option<String>,

        /// Only projects in this category (exact match)
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Only featured projects
        #[arg(short, long)]
        featured: bool,
    },

    /// Show one project by slug
    Show {
        /// Project slug (file name without extension)
        slug: String,
    },

    /// List every technology in use
    Technologies,

    /// List every category in use
    Categories,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Get a configuration value by key
    Get {
        /// Key such as `content_dir`
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Target file (defaults to the standard location)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
