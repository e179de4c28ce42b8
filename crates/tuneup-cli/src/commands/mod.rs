//! Command handlers.
//!
//! Each submodule implements one subcommand: translate CLI arguments into
//! core service calls and display results.  No business logic lives here.

pub mod classify;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod quote;

use serde::Serialize;
use tuneup_adapters::{InMemoryTables, table_loader};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Build the table store every command runs against.
///
/// A `tables.file` path in the config wins; otherwise the adapters' own
/// discovery order applies (env var, CWD, exe dir, built-in defaults).
pub(crate) fn table_store(config: &AppConfig) -> CliResult<InMemoryTables> {
    let store = match &config.tables.file {
        Some(path) => {
            let tables = table_loader::load_from_path(path)
                .map_err(tuneup_core::error::TuneupError::Domain)?;
            InMemoryTables::with_tables(tables)?
        }
        None => InMemoryTables::with_builtin()?,
    };
    Ok(store)
}

/// Serialise a report for `--output-format json`.
pub(crate) fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::IoError {
        message: format!("failed to serialise output: {e}"),
        source: std::io::Error::other(e),
    })
}
