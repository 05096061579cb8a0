//! Transifex API token resolution.
//!
//! Providers are tried in order, first success wins: the
//! `TRANSIFEX_API_TOKEN` environment variable, then the token stored under
//! the `[https://www.transifex.com]` section of `~/.transifexrc` (the file
//! written by the Transifex CLI).

use std::path::Path;

use crate::error::Error;

const TOKEN_ENV_VAR: &str = "TRANSIFEX_API_TOKEN";
const TRANSIFEXRC_SECTION: &str = "https://www.transifex.com";

/// Resolve the API token or fail with [`Error::MissingToken`].
pub fn resolve_api_token() -> Result<String, Error> {
    let providers: &[fn() -> Option<String>] = &[token_from_env, token_from_transifexrc];
    providers
        .iter()
        .find_map(|provider| provider())
        .ok_or(Error::MissingToken)
}

fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|token| !token.is_empty())
}

fn token_from_transifexrc() -> Option<String> {
    token_from_rc_path(&dirs::home_dir()?.join(".transifexrc"))
}

fn token_from_rc_path(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    token_from_ini(&contents, TRANSIFEXRC_SECTION)
}

/// Pull `token` out of the named section of an INI-style file.
///
/// `.transifexrc` section headers contain `:` and `/` so the file is not
/// TOML; a line scan tracking the current section is all the parsing the
/// format needs.
fn token_from_ini(contents: &str, section: &str) -> Option<String> {
    let mut in_section = false;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_section = header.trim() == section;
            continue;
        }
        if in_section {
            if let Some((key, value)) = line.split_once('=') {
                if key.trim() == "token" {
                    let value = value.trim();
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const RC_CONTENTS: &str = "\
[https://www.transifex.com]
rest_hostname = https://rest.api.transifex.com
token         = 1/abcdef0123456789
";

    #[test]
    fn test_token_from_ini_named_section() {
        assert_eq!(
            token_from_ini(RC_CONTENTS, "https://www.transifex.com"),
            Some("1/abcdef0123456789".to_string())
        );
    }

    #[test]
    fn test_token_from_ini_wrong_section() {
        let contents = "[https://example.com]\ntoken = nope\n";
        assert_eq!(token_from_ini(contents, "https://www.transifex.com"), None);
    }

    #[test]
    fn test_token_from_ini_ignores_comments_and_blanks() {
        let contents = "\
# transifex credentials
[https://www.transifex.com]

; legacy key
api_hostname = https://api.transifex.com
token = tok123
";
        assert_eq!(
            token_from_ini(contents, "https://www.transifex.com"),
            Some("tok123".to_string())
        );
    }

    #[test]
    fn test_token_from_ini_empty_value_is_not_a_token() {
        let contents = "[https://www.transifex.com]\ntoken =\n";
        assert_eq!(token_from_ini(contents, "https://www.transifex.com"), None);
    }

    #[test]
    fn test_token_from_rc_path() {
        let tmp = TempDir::new().unwrap();
        let rc = tmp.path().join(".transifexrc");
        fs::write(&rc, RC_CONTENTS).unwrap();
        assert_eq!(
            token_from_rc_path(&rc),
            Some("1/abcdef0123456789".to_string())
        );
        assert_eq!(token_from_rc_path(&tmp.path().join("missing")), None);
    }
}
