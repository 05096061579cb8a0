//! Local catalog enumeration and naming conventions.
//!
//! A "catalog" is one locale tree on disk: the core catalog under
//! `django/conf/locale` or a contrib app's catalog under
//! `django/contrib/<app>/locale`. Apps that ship JavaScript-translatable
//! strings get a second `-js` entry pointing at the same tree, with the
//! catalog file named `djangojs.po` instead of `django.po`.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Contrib apps that ship a JavaScript catalog in addition to the Python one.
pub const HAVE_JS: &[&str] = &["admin"];

/// Language codes whose Transifex spelling differs from the on-disk locale
/// directory name.
pub const LANG_OVERRIDES: &[(&str, &str)] = &[("zh_CN", "zh_Hans"), ("zh_TW", "zh_Hant")];

/// One locale directory entry: catalog name plus the absolute path of its
/// locale tree. Immutable once enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDir {
    pub name: String,
    pub path: PathBuf,
}

impl LocaleDir {
    fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        LocaleDir {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Path of this catalog's `.po` file for the given language.
    ///
    /// `-js` catalogs use the `djangojs` domain, everything else `django`.
    pub fn po_path(&self, lang: &str) -> PathBuf {
        let domain = if self.name.ends_with("-js") {
            "djangojs"
        } else {
            "django"
        };
        self.path
            .join(lang)
            .join("LC_MESSAGES")
            .join(format!("{domain}.po"))
    }
}

/// Map a remote language code to the locale directory name used on disk.
pub fn local_lang(lang: &str) -> &str {
    LANG_OVERRIDES
        .iter()
        .find(|(remote, _)| *remote == lang)
        .map(|(_, local)| *local)
        .unwrap_or(lang)
}

/// The Transifex resource name for a local catalog name.
pub fn tx_resource_for_name(name: &str) -> String {
    if name == "core" {
        "django.core".to_string()
    } else {
        format!("django.contrib-{name}")
    }
}

/// The local catalog name for a Transifex resource name (inverse of
/// [`tx_resource_for_name`]).
pub fn local_resource_name(tx_name: &str) -> String {
    let stripped = tx_name.strip_prefix("django.").unwrap_or(tx_name);
    if stripped == "core" {
        "core".to_string()
    } else {
        stripped
            .strip_prefix("contrib-")
            .unwrap_or(stripped)
            .to_string()
    }
}

/// Enumerate all locale directories under `base` (a Django checkout root).
///
/// Returns one entry per contrib app with a `locale/` subtree, plus an extra
/// `-js` entry for apps in [`HAVE_JS`], with the core catalog first when
/// `include_core` is set. A `resources` allow-list filters the result; any
/// requested name with no match is an error listing the valid names, so a
/// typo in `--resources` cannot silently select nothing.
pub fn resolve_locale_dirs(
    base: &Path,
    resources: Option<&[String]>,
    include_core: bool,
) -> Result<Vec<LocaleDir>, Error> {
    let contrib_dir = base.join("django").join("contrib");
    let mut dirs = Vec::new();

    let entries = std::fs::read_dir(&contrib_dir).map_err(|source| Error::LocaleDirAccess {
        path: contrib_dir.clone(),
        source,
    })?;
    let mut app_names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    app_names.sort();

    for app in app_names {
        let locale_path = contrib_dir.join(&app).join("locale");
        if locale_path.is_dir() {
            dirs.push(LocaleDir::new(app.clone(), &locale_path));
            if HAVE_JS.contains(&app.as_str()) {
                dirs.push(LocaleDir::new(format!("{app}-js"), &locale_path));
            }
        }
    }

    if include_core {
        dirs.insert(
            0,
            LocaleDir::new("core", base.join("django").join("conf").join("locale")),
        );
    }

    if let Some(wanted) = resources {
        let available: Vec<&str> = dirs.iter().map(|d| d.name.as_str()).collect();
        let filtered: Vec<LocaleDir> = dirs
            .iter()
            .filter(|d| wanted.iter().any(|w| w == &d.name))
            .cloned()
            .collect();
        if wanted.len() > filtered.len() {
            return Err(Error::UnknownResources {
                available: available.join(", "),
            });
        }
        dirs = filtered;
    }

    Ok(dirs)
}

/// Sorted language subdirectories of a locale tree, skipping private entries
/// (names starting with `_`) and, optionally, the English source catalog.
pub fn list_languages(dir: &LocaleDir, skip_en: bool) -> Result<Vec<String>, Error> {
    let entries = std::fs::read_dir(&dir.path).map_err(|source| Error::LocaleDirAccess {
        path: dir.path.clone(),
        source,
    })?;
    let mut langs: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('_'))
        .filter(|name| !(skip_en && name == "en"))
        .collect();
    langs.sort();
    Ok(langs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Build a fake checkout: contrib apps (with or without locale trees)
    /// plus the core locale directory.
    fn fake_checkout(apps_with_locale: &[&str], apps_without: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for app in apps_with_locale {
            fs::create_dir_all(tmp.path().join("django/contrib").join(app).join("locale"))
                .unwrap();
        }
        for app in apps_without {
            fs::create_dir_all(tmp.path().join("django/contrib").join(app)).unwrap();
        }
        fs::create_dir_all(tmp.path().join("django/conf/locale")).unwrap();
        tmp
    }

    #[test]
    fn test_resolver_one_entry_per_app_with_locale() {
        let tmp = fake_checkout(&["auth", "flatpages"], &["staticfiles"]);
        let dirs = resolve_locale_dirs(tmp.path(), None, false).unwrap();
        let names: Vec<&str> = dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["auth", "flatpages"]);
    }

    #[test]
    fn test_resolver_adds_js_entry_for_admin() {
        let tmp = fake_checkout(&["admin", "auth"], &[]);
        let dirs = resolve_locale_dirs(tmp.path(), None, false).unwrap();
        let names: Vec<&str> = dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["admin", "admin-js", "auth"]);
        // Both admin entries point at the same locale tree.
        assert_eq!(dirs[0].path, dirs[1].path);
    }

    #[test]
    fn test_resolver_core_comes_first() {
        let tmp = fake_checkout(&["auth"], &[]);
        let dirs = resolve_locale_dirs(tmp.path(), None, true).unwrap();
        assert_eq!(dirs[0].name, "core");
        assert_eq!(dirs[0].path, tmp.path().join("django/conf/locale"));
        assert_eq!(dirs[1].name, "auth");
    }

    #[test]
    fn test_resolver_filters_by_resources() {
        let tmp = fake_checkout(&["admin", "auth", "flatpages"], &[]);
        let wanted = vec!["auth".to_string(), "admin-js".to_string()];
        let dirs = resolve_locale_dirs(tmp.path(), Some(&wanted), true).unwrap();
        let names: Vec<&str> = dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["admin-js", "auth"]);
    }

    #[test]
    fn test_resolver_unknown_resource_lists_available_names() {
        let tmp = fake_checkout(&["auth"], &[]);
        let wanted = vec!["bogus".to_string()];
        let err = resolve_locale_dirs(tmp.path(), Some(&wanted), true).unwrap_err();
        match err {
            Error::UnknownResources { available } => {
                assert_eq!(available, "core, auth");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_po_path_plain_and_js() {
        let auth = LocaleDir::new("auth", "/src/django/contrib/auth/locale");
        assert_eq!(
            auth.po_path("de"),
            PathBuf::from("/src/django/contrib/auth/locale/de/LC_MESSAGES/django.po")
        );
        let admin_js = LocaleDir::new("admin-js", "/src/django/contrib/admin/locale");
        assert_eq!(
            admin_js.po_path("de"),
            PathBuf::from("/src/django/contrib/admin/locale/de/LC_MESSAGES/djangojs.po")
        );
    }

    #[test]
    fn test_lang_overrides() {
        assert_eq!(local_lang("zh_CN"), "zh_Hans");
        assert_eq!(local_lang("zh_TW"), "zh_Hant");
        assert_eq!(local_lang("de"), "de");
    }

    #[test]
    fn test_tx_resource_names() {
        assert_eq!(tx_resource_for_name("core"), "django.core");
        assert_eq!(tx_resource_for_name("admin"), "django.contrib-admin");
        assert_eq!(local_resource_name("django.core"), "core");
        assert_eq!(local_resource_name("django.contrib-admin"), "admin");
    }

    #[test]
    fn test_list_languages_skips_private_and_en() {
        let tmp = TempDir::new().unwrap();
        let locale = tmp.path().join("locale");
        for lang in ["de", "en", "fr", "__pycache__"] {
            fs::create_dir_all(locale.join(lang)).unwrap();
        }
        let dir = LocaleDir::new("auth", &locale);
        assert_eq!(list_languages(&dir, true).unwrap(), vec!["de", "fr"]);
        assert_eq!(list_languages(&dir, false).unwrap(), vec!["de", "en", "fr"]);
    }
}
