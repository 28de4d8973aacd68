use camino::{Utf8Path, Utf8PathBuf};
use catalogfix_types::issue::{Issue, MetaEntry};
use fs_err as fs;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InputLoadError {
    #[error("io error reading {path}: {message}")]
    Io { path: Utf8PathBuf, message: String },

    #[error("json parse error in {path}: {message}")]
    Json { path: Utf8PathBuf, message: String },

    #[error("toml parse error in {path}: {message}")]
    Toml { path: Utf8PathBuf, message: String },
}

#[derive(Deserialize)]
struct IssueEnvelope {
    issues: Vec<Issue>,
}

#[derive(Deserialize)]
struct FixLogEnvelope {
    fixes: Vec<Option<String>>,
}

/// `[[meta]]` tables. Any other top-level key is rejected so a misspelled table does not load
/// as an empty registry.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct MetaEnvelope {
    #[serde(default)]
    meta: Vec<MetaEntry>,
}

/// Load the validation engine's issue list from a JSON file.
pub fn load_issues(path: &Utf8Path) -> Result<Vec<Issue>, InputLoadError> {
    let contents = read(path)?;
    let issues = if is_json_array(&contents) {
        parse_json::<Vec<Issue>>(path, &contents)?
    } else {
        parse_json::<IssueEnvelope>(path, &contents)?.issues
    };
    debug!(path = %path, issues = issues.len(), "loaded issues");
    Ok(issues)
}

/// Load applied-fix messages.
///
/// `.json` files hold an array of strings (`null` entries become empty messages). Anything else
/// is plain text with one message per non-blank line.
pub fn load_fix_log(path: &Utf8Path) -> Result<Vec<String>, InputLoadError> {
    let contents = read(path)?;
    let fixes: Vec<String> = if has_extension(path, "json") {
        let entries = if is_json_array(&contents) {
            parse_json::<Vec<Option<String>>>(path, &contents)?
        } else {
            parse_json::<FixLogEnvelope>(path, &contents)?.fixes
        };
        entries.into_iter().map(Option::unwrap_or_default).collect()
    } else {
        contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    };
    debug!(path = %path, fixes = fixes.len(), "loaded fix log");
    Ok(fixes)
}

/// Load issue-meta registry records from `[[meta]]` tables (`.toml`) or a JSON array.
pub fn load_meta_entries(path: &Utf8Path) -> Result<Vec<MetaEntry>, InputLoadError> {
    let contents = read(path)?;
    let entries = if has_extension(path, "toml") {
        toml::from_str::<MetaEnvelope>(&contents)
            .map_err(|e| InputLoadError::Toml {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .meta
    } else if is_json_array(&contents) {
        parse_json::<Vec<MetaEntry>>(path, &contents)?
    } else {
        parse_json::<MetaEnvelope>(path, &contents)?.meta
    };
    debug!(path = %path, entries = entries.len(), "loaded issue meta");
    Ok(entries)
}

fn read(path: &Utf8Path) -> Result<String, InputLoadError> {
    fs::read_to_string(path).map_err(|e| InputLoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn parse_json<T: for<'de> Deserialize<'de>>(
    path: &Utf8Path,
    contents: &str,
) -> Result<T, InputLoadError> {
    serde_json::from_str(contents).map_err(|e| InputLoadError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Decides between the bare-list and wrapper shapes before parsing, so serde reports the
/// position of the offending record instead of a generic shape mismatch.
fn is_json_array(contents: &str) -> bool {
    contents.trim_start().starts_with('[')
}

fn has_extension(path: &Utf8Path, ext: &str) -> bool {
    path.extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
