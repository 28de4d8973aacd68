//! Unit tests for input loaders.

use camino::Utf8PathBuf;
use catalogfix_inputs::{InputLoadError, load_fix_log, load_issues, load_meta_entries};
use catalogfix_types::issue::Severity;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

fn write_file(temp: &TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(temp.path().join(name)).unwrap();
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_issues_bare_array() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issues.json",
        r#"[
            { "code": "price_missing", "message": "Price is empty", "severity": "error", "rowIndex": 2 },
            { "code": "tag_dup", "severity": "warning", "row_index": 5 }
        ]"#,
    );

    let issues = load_issues(&path).unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].row_index, 2);
    assert_eq!(issues[1].severity, Severity::Warning);
    assert_eq!(issues[1].message, "");
}

#[test]
fn test_issues_wrapped_object() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issues.json",
        r#"{ "issues": [{ "code": "header_missing", "severity": "error" }], "extra": true }"#,
    );

    let issues = load_issues(&path).unwrap();
    assert_eq!(issues.len(), 1);
    assert!(issues[0].is_file_level());
}

#[test]
fn test_issues_invalid_json() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "issues.json", "{ not valid json }}}");

    let err = load_issues(&path).unwrap_err();
    assert!(matches!(err, InputLoadError::Json { .. }));
}

#[test]
fn test_issues_unknown_severity_rejected() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issues.json",
        r#"[{ "code": "x", "message": "m", "severity": "fatal", "rowIndex": 1 }]"#,
    );

    let err = load_issues(&path).unwrap_err();
    assert!(matches!(err, InputLoadError::Json { .. }));
    let message = err.to_string();
    assert!(message.contains("fatal"), "{message}");
    assert!(message.contains("line 1"), "{message}");
}

#[test]
fn test_issues_wrapped_object_reports_bad_record() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issues.json",
        r#"{ "issues": [{ "code": "x", "severity": "fatal" }] }"#,
    );

    let err = load_issues(&path).unwrap_err();
    assert!(err.to_string().contains("fatal"), "{err}");
}

#[test]
fn test_issues_null_message_and_row_index_degrade() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issues.json",
        r#"[{ "code": "x", "message": null, "severity": "error", "rowIndex": null }]"#,
    );

    let issues = load_issues(&path).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "");
    assert!(issues[0].is_file_level());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = create_temp_dir();
    let path = Utf8PathBuf::from_path_buf(temp.path().join("absent.json")).unwrap();

    let err = load_issues(&path).unwrap_err();
    assert!(matches!(err, InputLoadError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_fix_log_json_with_nulls() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "fixes.json", r#"["Trimmed SKU", null, "Price rounded"]"#);

    let fixes = load_fix_log(&path).unwrap();
    assert_eq!(fixes, vec!["Trimmed SKU", "", "Price rounded"]);
}

#[test]
fn test_fix_log_json_wrapped() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "fixes.json", r#"{ "fixes": ["a", "b"] }"#);

    assert_eq!(load_fix_log(&path).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_fix_log_plain_text_skips_blank_lines() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "fixes.log",
        "Trimmed SKU\r\n\n   \nStatus set to draft\n",
    );

    assert_eq!(
        load_fix_log(&path).unwrap(),
        vec!["Trimmed SKU", "Status set to draft"]
    );
}

#[test]
fn test_meta_entries_toml() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issue-meta.toml",
        r#"
[[meta]]
code = "price_missing"
title = "Missing price"
blocking = true
auto_fixable = true

[[meta]]
format = "shopify"
code = "handle_invalid"
blocking = false
"#,
    );

    let entries = load_meta_entries(&path).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].format, None);
    assert_eq!(entries[0].meta.title.as_deref(), Some("Missing price"));
    assert_eq!(entries[0].meta.auto_fixable, Some(true));
    assert_eq!(entries[1].format.as_deref(), Some("shopify"));
    assert_eq!(entries[1].meta.blocking, Some(false));
}

#[test]
fn test_meta_entries_empty_toml() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "issue-meta.toml", "");

    assert!(load_meta_entries(&path).unwrap().is_empty());
}

#[test]
fn test_meta_entries_invalid_toml() {
    let temp = create_temp_dir();
    let path = write_file(&temp, "issue-meta.toml", "[[meta]\ncode = ");

    assert!(matches!(
        load_meta_entries(&path),
        Err(InputLoadError::Toml { .. })
    ));
}

#[test]
fn test_meta_entries_misspelled_table_rejected() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issue-meta.toml",
        "[[metas]]\ncode = \"price_missing\"\nblocking = false\n",
    );

    let err = load_meta_entries(&path).unwrap_err();
    assert!(matches!(err, InputLoadError::Toml { .. }));
    assert!(err.to_string().contains("metas"), "{err}");
}

#[test]
fn test_meta_entries_json_object_with_unknown_key_rejected() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issue-meta.json",
        r#"{ "entries": [{ "code": "price_missing", "blocking": false }] }"#,
    );

    let err = load_meta_entries(&path).unwrap_err();
    assert!(matches!(err, InputLoadError::Json { .. }));
    assert!(err.to_string().contains("entries"), "{err}");
}

#[test]
fn test_meta_entries_json_wrapped() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issue-meta.json",
        r#"{ "meta": [{ "code": "price_missing", "blocking": false }] }"#,
    );

    let entries = load_meta_entries(&path).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].meta.blocking, Some(false));
}

#[test]
fn test_meta_entries_json_array() {
    let temp = create_temp_dir();
    let path = write_file(
        &temp,
        "issue-meta.json",
        r#"[{ "formatId": "woo", "code": "sku_missing", "autoFixable": true }]"#,
    );

    let entries = load_meta_entries(&path).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].format.as_deref(), Some("woo"));
    assert_eq!(entries[0].meta.auto_fixable, Some(true));
    assert_eq!(entries[0].meta.blocking, None);
}
