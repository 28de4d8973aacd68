use catalogfix_types::issue::{FILE_LEVEL_ROW, Issue, Severity};
use catalogfix_types::readiness::{BlockingGroup, ReadinessSummary};

#[test]
fn issue_defaults_when_fields_missing() {
    let issue: Issue = serde_json::from_str("{}").expect("parse empty issue");
    assert_eq!(issue.code, None);
    assert_eq!(issue.message, "");
    assert_eq!(issue.severity, Severity::Info);
    assert_eq!(issue.row_index, FILE_LEVEL_ROW);
    assert!(issue.is_file_level());
}

#[test]
fn issue_null_fields_fall_back_to_defaults() {
    let issue: Issue = serde_json::from_str(
        r#"{ "code": "x", "message": null, "severity": null, "rowIndex": null }"#,
    )
    .expect("parse issue with nulls");
    assert_eq!(issue.code.as_deref(), Some("x"));
    assert_eq!(issue.message, "");
    assert_eq!(issue.severity, Severity::Info);
    assert_eq!(issue.row_index, FILE_LEVEL_ROW);
}

#[test]
fn issue_non_null_row_index_is_kept() {
    let issue: Issue =
        serde_json::from_str(r#"{ "row_index": 4, "severity": "warn" }"#).expect("parse issue");
    assert_eq!(issue.row_index, 4);
    assert_eq!(issue.severity, Severity::Warning);
}

#[test]
fn blocking_group_new_starts_empty() {
    let group = BlockingGroup::new("code", "Title");
    assert_eq!(group.count, 0);
    assert_eq!(group.auto_fixable_count, 0);
    assert_eq!(group.first_row_index, FILE_LEVEL_ROW);
}

#[test]
fn empty_summary_is_export_ready() {
    let summary = ReadinessSummary::default();
    assert!(summary.is_export_ready());
    assert_eq!(summary.manual_blocking_errors(), 0);
    assert!(summary.blocking_groups.is_empty());
}

#[test]
fn manual_blocking_errors_excludes_auto_fixable() {
    let summary = ReadinessSummary {
        blocking_errors: 5,
        auto_fixable_blocking_errors: 3,
        blocking_groups: vec![],
    };
    assert!(!summary.is_export_ready());
    assert_eq!(summary.manual_blocking_errors(), 2);
}
