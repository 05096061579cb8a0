//! Error type shared across the tool.
//!
//! Every failure is fatal: this is an operator-run maintenance command, so
//! errors are surfaced immediately instead of retried or masked. `main`
//! maps any `Err` to a logged message and exit code 1.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No API token could be resolved from the environment or ~/.transifexrc.
    #[error("please define the TRANSIFEX_API_TOKEN env var")]
    MissingToken,

    /// A `--resources` filter named catalogs that do not exist locally.
    #[error(
        "you have specified some unknown resources. \
         Available resource names are: {available}"
    )]
    UnknownResources { available: String },

    /// An external command could not be spawned at all.
    #[error("failed to run {command}: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command ran but exited unsuccessfully.
    #[error("{command} failed: {detail}")]
    CommandFailed { command: String, detail: String },

    /// Transport-level failure or non-2xx response from the Transifex API.
    #[error("transifex API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a last-update timestamp in an unexpected format.
    #[error("cannot parse timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// One or more fetched catalogs failed to compile with msgfmt.
    #[error("errors while compiling {} po file(s)", failures.len())]
    PoCompilation { failures: Vec<(String, String)> },

    /// Filesystem access failed while enumerating locale directories.
    #[error("cannot read {path}: {source}")]
    LocaleDirAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
