//! `update_catalogs`: regenerate the English source catalogs and report how
//! many strings changed.

use std::ffi::OsStr;
use std::path::Path;

use tracing::{info, warn};

use crate::catalogs::{resolve_locale_dirs, LocaleDir};
use crate::commands::run_checked;
use crate::error::Error;

/// Update the `en` catalogs for core and contrib apps, then log a
/// diff-derived estimate of the number of changed/added strings per catalog.
pub fn update_catalogs(
    base: &Path,
    resources: Option<&[String]>,
    _languages: Option<&[String]>,
) -> Result<(), Error> {
    if resources.is_some() {
        warn!("`update_catalogs` will always process all resources.");
    }
    let contrib_dirs = resolve_locale_dirs(base, None, false)?;
    let django_dir = base.join("django");

    info!("Updating en catalogs for Django and contrib apps...");
    run_checked("django-admin", &["makemessages", "--locale=en"], Some(&django_dir))?;
    info!("Updating en JS catalog for Django...");
    run_checked(
        "django-admin",
        &["makemessages", "--locale=en", "--domain=djangojs"],
        Some(&django_dir),
    )?;

    let core = LocaleDir {
        name: "core".to_string(),
        path: django_dir.join("conf").join("locale"),
    };
    check_diff(&core)?;
    for dir in &contrib_dirs {
        check_diff(dir)?;
    }
    Ok(())
}

/// Log the approximate number of changed/added strings in the `en` catalog.
///
/// Counts `msgid` markers in an unconditional zero-context diff against the
/// working tree. The count is meaningless if the diff could not be produced,
/// so any diff failure is fatal.
fn check_diff(dir: &LocaleDir) -> Result<(), Error> {
    let po_path = dir.po_path("en");
    let args = [
        OsStr::new("diff"),
        OsStr::new("-U0"),
        po_path.as_os_str(),
    ];
    let output = run_checked("git", &args, None)?;
    let num_changes = count_msgid_markers(&String::from_utf8_lossy(&output.stdout));
    info!("{num_changes} changed/added messages in '{}' catalog.", dir.name);
    Ok(())
}

/// Number of `msgid` markers in a diff, a cheap proxy for changed strings.
fn count_msgid_markers(diff: &str) -> usize {
    diff.matches("msgid").count()
}
