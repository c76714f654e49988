//! # folio-cli
//!
//! Command-line browser for a Folio project catalog.
//!
//! The `folio` binary loads every project document from a content
//! directory and answers catalog queries:
//! - `folio list` with technology, category, and featured filters
//! - `folio show <slug>` for one project including its body
//! - `folio technologies` / `folio categories`
//! - `folio config path|show|get|init`
//!
//! Every query command accepts `--json`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use cli::{Cli, Command, ConfigAction, CONFIG_ENV_VAR};
pub use commands::{run, ListFilter};
pub use config::FolioConfig;
pub use error::{Error, Result};
