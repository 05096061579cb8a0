//! End-to-end tests for the manage-translations binary.
//!
//! These exercise the argument surface and the failure paths that need no
//! external tools: usage output, resource-name validation and credential
//! resolution. Paths that shell out to django-admin/git/msgfmt/tx are
//! covered by unit tests on their pure pieces instead.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn manage_translations() -> Command {
    Command::cargo_bin("manage-translations").unwrap()
}

/// A minimal Django checkout: core locale dir plus two contrib apps, one of
/// which (admin) also ships a JS catalog.
fn fake_checkout() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for dir in [
        "django/conf/locale",
        "django/contrib/admin/locale",
        "django/contrib/auth/locale",
        "django/contrib/staticfiles",
    ] {
        std::fs::create_dir_all(tmp.path().join(dir)).unwrap();
    }
    tmp
}

#[test]
fn test_no_subcommand_prints_help_and_exits_nonzero() {
    manage_translations()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("update_catalogs"))
        .stdout(predicate::str::contains("fetch_since"));
}

#[test]
fn test_help_flag_succeeds() {
    manage_translations()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lang_stats"));
}

#[test]
fn test_unknown_resource_fails_and_lists_available_names() {
    let tmp = fake_checkout();
    manage_translations()
        .current_dir(tmp.path())
        .args(["lang_stats", "--resources", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Available resource names are: core, admin, admin-js, auth",
        ));
}

#[test]
fn test_lang_stats_reports_each_catalog() {
    // No msgfmt involved: the locale trees have no language subdirectories,
    // so the command just prints one header per catalog.
    let tmp = fake_checkout();
    manage_translations()
        .current_dir(tmp.path())
        .arg("lang_stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Showing translations stats for 'core':",
        ))
        .stdout(predicate::str::contains(
            "Showing translations stats for 'admin-js':",
        ));
}

#[test]
fn test_fetch_since_without_token_fails() {
    let tmp = fake_checkout();
    // Point HOME at an empty directory so no ~/.transifexrc is found.
    let empty_home = TempDir::new().unwrap();
    manage_translations()
        .current_dir(tmp.path())
        .env_remove("TRANSIFEX_API_TOKEN")
        .env("HOME", empty_home.path())
        .args(["fetch_since", "--since", "2024-09-25", "--dry-run"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TRANSIFEX_API_TOKEN"));
}

#[test]
fn test_fetch_since_requires_since_date() {
    manage_translations()
        .arg("fetch_since")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--since"));
}
