//! `fetch` and `fetch_since`: pull translated catalogs from Transifex and
//! post-process them.

use std::ffi::OsStr;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::catalogs::{
    list_languages, local_lang, local_resource_name, resolve_locale_dirs, tx_resource_for_name,
};
use crate::commands::{run_checked, run_command};
use crate::credentials::resolve_api_token;
use crate::error::Error;
use crate::transifex::{list_resources_with_updates, TransifexClient};

/// Fetch translations from Transifex, wrap long lines and generate mo files.
///
/// Without a language filter this pulls every language above the minimum
/// completion threshold and post-processes whatever locale directories exist
/// afterwards; with a filter it pulls exactly the requested languages.
/// Compilation failures are collected so one broken catalog does not hide
/// the state of the others, then reported together as a single error.
pub fn fetch(
    base: &Path,
    resources: Option<&[String]>,
    languages: Option<&[String]>,
) -> Result<(), Error> {
    let locale_dirs = resolve_locale_dirs(base, resources, true)?;
    let mut errors: Vec<(String, String)> = Vec::new();

    for dir in &locale_dirs {
        let tx_resource = tx_resource_for_name(&dir.name);

        let target_langs = match languages {
            None => {
                run_checked(
                    "tx",
                    &[
                        "pull",
                        "-r",
                        tx_resource.as_str(),
                        "-a",
                        "-f",
                        "--minimum-perc=5",
                    ],
                    Some(base),
                )?;
                list_languages(dir, true)?
            }
            Some(langs) => {
                for lang in langs {
                    run_checked(
                        "tx",
                        &["pull", "-r", tx_resource.as_str(), "-f", "-l", lang.as_str()],
                        Some(base),
                    )?;
                }
                langs.to_vec()
            }
        };

        for lang in target_langs.iter().map(|l| local_lang(l)) {
            let po_path = dir.po_path(lang);
            if !po_path.exists() {
                info!("No {lang} translation for resource {}", dir.name);
                continue;
            }

            // Wrap long lines, then compile the mo file.
            let msgcat_args = [
                OsStr::new("--no-location"),
                OsStr::new("-o"),
                po_path.as_os_str(),
                po_path.as_os_str(),
            ];
            run_checked("msgcat", &msgcat_args, None)?;

            let mo_path = po_path.with_extension("mo");
            let msgfmt_args = [
                OsStr::new("-c"),
                OsStr::new("-o"),
                mo_path.as_os_str(),
                po_path.as_os_str(),
            ];
            let output = run_command("msgfmt", &msgfmt_args, None, &[])?;
            if !output.status.success() {
                errors.push((dir.name.clone(), lang.to_string()));
            }
        }
    }

    if !errors.is_empty() {
        warn!("Errors while compiling these po files:");
        for (resource, lang) in &errors {
            warn!("{resource} for the language {lang}");
        }
        return Err(Error::PoCompilation { failures: errors });
    }
    Ok(())
}

/// Fetch translations modified since a given date, for all resources and
/// languages with updates inside the window.
pub fn fetch_since(
    base: &Path,
    date_since: NaiveDate,
    date_skip: Option<NaiveDate>,
    verbose: bool,
    dry_run: bool,
) -> Result<(), Error> {
    let token = resolve_api_token()?;
    let client = TransifexClient::new(token)?;
    let since = date_since.and_time(NaiveTime::MIN);

    let scan = list_resources_with_updates(&client, since, date_skip, verbose)?;
    if scan.changed.is_empty() {
        if verbose {
            info!("== No resources with changes ==");
        }
        return Ok(());
    }
    if verbose {
        info!("== SUMMARY for changed resources ==");
    }

    for (tx_name, langs) in &scan.changed {
        let mut langs = langs.clone();
        langs.sort();
        if verbose || dry_run {
            info!(" * resource {tx_name} languages {}", langs.join(" "));
        }
        if !dry_run {
            let resource = local_resource_name(tx_name);
            fetch(base, Some(std::slice::from_ref(&resource)), Some(&langs))?;
        }
    }
    Ok(())
}
