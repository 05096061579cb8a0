//! `lang_stats`: per-catalog, per-language completion statistics.

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::catalogs::{list_languages, resolve_locale_dirs};
use crate::commands::run_command;
use crate::error::Error;

/// Print translation statistics of the committed catalogs.
///
/// For every locale directory (optionally narrowed by `--resources` and
/// `--languages`), runs `msgfmt -vc` per language and prints the statistics
/// line it reports. A catalog that fails validation is reported for that
/// language and the run continues; only a resolver or spawn failure aborts.
pub fn lang_stats(
    base: &Path,
    resources: Option<&[String]>,
    languages: Option<&[String]>,
) -> Result<(), Error> {
    let locale_dirs = resolve_locale_dirs(base, resources, true)?;
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for dir in &locale_dirs {
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "\nShowing translations stats for '{}':", dir.name)?;
        stdout.reset()?;

        for lang in list_languages(dir, false)? {
            if let Some(filter) = languages {
                if !filter.iter().any(|l| l == &lang) {
                    continue;
                }
            }
            let po_path = dir.po_path(&lang);
            let args = [
                OsStr::new("-vc"),
                OsStr::new("-o"),
                OsStr::new("/dev/null"),
                po_path.as_os_str(),
            ];
            // msgfmt writes its statistics to stderr; LANG=C keeps the
            // output parse-stable regardless of the operator's locale.
            let output = run_command("msgfmt", &args, None, &[("LANG", "C")])?;
            let stderr = String::from_utf8_lossy(&output.stderr);
            if output.status.success() {
                writeln!(stdout, "{lang}: {}", stderr.trim())?;
            } else {
                writeln!(
                    stdout,
                    "Errors happened when checking {lang} translation for {}:\n{stderr}",
                    dir.name
                )?;
            }
        }
    }
    Ok(())
}
