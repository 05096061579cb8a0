//! The four maintenance operations and the subprocess plumbing they share.

mod fetch;
mod stats;
mod update;

pub use fetch::{fetch, fetch_since};
pub use stats::lang_stats;
pub use update::update_catalogs;

use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use crate::error::Error;

/// Run an external command, capturing its output.
///
/// Spawn failures (tool not installed) are reported as errors; a non-zero
/// exit status is left for the caller to interpret.
fn run_command<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    cwd: Option<&Path>,
    envs: &[(&str, &str)],
) -> Result<Output, Error> {
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().map_err(|source| Error::CommandSpawn {
        command: display_command(program, args),
        source,
    })
}

/// Run an external command and treat a non-zero exit as fatal, with the
/// captured stderr as the error detail.
fn run_checked<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    cwd: Option<&Path>,
) -> Result<Output, Error> {
    let output = run_command(program, args, cwd, &[])?;
    if !output.status.success() {
        return Err(Error::CommandFailed {
            command: display_command(program, args),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}

fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(
        args.iter()
            .map(|arg| arg.as_ref().to_string_lossy().into_owned()),
    );
    parts.join(" ")
}
