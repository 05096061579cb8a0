//! Clap argument definitions for the translation maintenance tool.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "manage-translations")]
#[command(about = "Utility commands to manage Django translations. Run from the git root.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by the catalog-oriented subcommands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Limit the operation to these language codes (repeat or comma separate)
    #[arg(short, long = "languages", value_name = "LANG", value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Limit the operation to these resource names (repeat or comma separate)
    #[arg(short, long = "resources", value_name = "NAME", value_delimiter = ',')]
    pub resources: Option<Vec<String>>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Update English django.po files with new/updated translatable strings
    #[command(name = "update_catalogs")]
    UpdateCatalogs {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the translation statistics for each catalog/language combination
    #[command(name = "lang_stats")]
    LangStats {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Fetch translations from Transifex, wrap long lines, generate mo files
    #[command(name = "fetch")]
    Fetch {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Fetch translations from Transifex modified since a given date (for
    /// all languages and all resources)
    #[command(name = "fetch_since")]
    FetchSince {
        /// Log every comparison and a summary of unchanged resources
        #[arg(short, long)]
        verbose: bool,

        /// Fetch new translations since this date (ISO format YYYY-MM-DD)
        #[arg(short = 's', long = "since", value_name = "YYYY-MM-DD")]
        date_since: NaiveDate,

        /// Skip changes from this date (ISO format YYYY-MM-DD)
        #[arg(long = "skip", value_name = "YYYY-MM-DD")]
        date_skip: Option<NaiveDate>,

        /// Report what would be fetched without pulling anything
        #[arg(long)]
        dry_run: bool,
    },
}
