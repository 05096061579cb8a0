//! Transifex REST API access and the translation-update scanner.

pub mod client;

pub use client::{LanguageStat, Resource, TransifexClient, PROJECT_ID};

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::error::Error;

/// Timestamp format used by the API: ISO-8601 UTC with a literal `Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Per-resource language buckets built by one scan. Never persisted; the
/// maps are ordered so output is deterministic.
#[derive(Debug, Default)]
pub struct UpdateScan {
    pub changed: BTreeMap<String, Vec<String>>,
    pub unchanged: BTreeMap<String, Vec<String>>,
}

/// Decide whether a translation update falls inside the fetch window.
///
/// Changed means strictly after the cutoff and not on the skip date. The
/// skip date exists to exclude a known noisy bulk-update day.
fn is_changed(last_update: NaiveDateTime, since: NaiveDateTime, skip: Option<NaiveDate>) -> bool {
    last_update > since && skip.is_none_or(|day| last_update.date() != day)
}

/// Classify a raw `last_translation_update` value against the window.
///
/// A missing timestamp means the language was never translated, which is
/// always unchanged regardless of the window.
pub fn classify_update(
    last_update: Option<&str>,
    since: NaiveDateTime,
    skip: Option<NaiveDate>,
) -> Result<bool, Error> {
    match last_update {
        None => Ok(false),
        Some(raw) => {
            let parsed = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map_err(
                |source| Error::Timestamp {
                    value: raw.to_string(),
                    source,
                },
            )?;
            Ok(is_changed(parsed, since, skip))
        }
    }
}

/// Scan every resource of the project and bucket each language as changed
/// or unchanged relative to the cutoff/skip window.
pub fn list_resources_with_updates(
    client: &TransifexClient,
    date_since: NaiveDateTime,
    date_skip: Option<NaiveDate>,
    verbose: bool,
) -> Result<UpdateScan, Error> {
    let mut scan = UpdateScan::default();

    for resource in client.resources()? {
        for stat in client.language_stats(&resource.id)? {
            if verbose {
                info!(
                    "CHECKING {} for lang={} updated on {:?}",
                    resource.name, stat.language, stat.last_update
                );
            }
            if classify_update(stat.last_update.as_deref(), date_since, date_skip)? {
                if verbose {
                    info!("=> CHANGED {} lang={}", resource.name, stat.language);
                }
                scan.changed
                    .entry(resource.name.clone())
                    .or_default()
                    .push(stat.language);
            } else {
                scan.unchanged
                    .entry(resource.name.clone())
                    .or_default()
                    .push(stat.language);
            }
        }
    }

    if verbose {
        let unchanged: String = scan
            .unchanged
            .iter()
            .map(|(resource, langs)| {
                let mut langs = langs.clone();
                langs.sort();
                format!("\n * resource {resource} languages {}", langs.join(" "))
            })
            .collect();
        info!("== SUMMARY for unchanged resources =={unchanged}");
    }

    Ok(scan)
}
