//! CLI argument parsing and command dispatch

pub mod args;

// Re-export types for convenient access
pub use args::{Cli, Command, CommonArgs};

use std::path::Path;

use crate::commands;
use crate::error::Error;

/// Execute a parsed subcommand against the checkout rooted at `base`.
///
/// Dispatch is an exhaustive match: every subcommand maps statically to its
/// handler, and each invocation is independent and stateless.
pub fn run(command: Command, base: &Path) -> Result<(), Error> {
    match command {
        Command::UpdateCatalogs { common } => commands::update_catalogs(
            base,
            common.resources.as_deref(),
            common.languages.as_deref(),
        ),
        Command::LangStats { common } => commands::lang_stats(
            base,
            common.resources.as_deref(),
            common.languages.as_deref(),
        ),
        Command::Fetch { common } => commands::fetch(
            base,
            common.resources.as_deref(),
            common.languages.as_deref(),
        ),
        Command::FetchSince {
            verbose,
            date_since,
            date_skip,
            dry_run,
        } => commands::fetch_since(base, date_since, date_skip, verbose, dry_run),
    }
}
