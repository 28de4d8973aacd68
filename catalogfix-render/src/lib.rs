//! Rendering helpers for human-readable artifacts: the auto-fix log (plain text) and the
//! readiness summary (markdown).

use catalogfix_domain::group_fixes;
use catalogfix_types::readiness::ReadinessSummary;
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

/// Label used when the file name or format id is not known.
const UNKNOWN: &str = "unknown";

/// Context printed in the fix log header.
#[derive(Debug, Clone, Default)]
pub struct FixLogMeta {
    pub file_name: Option<String>,
    pub format_id: Option<String>,
}

/// Render the auto-fix log for `fixes`.
///
/// `generated_at` is the only input that is not derived from `fixes`; pass a fixed value to get
/// byte-identical output.
pub fn render_fix_log<S: AsRef<str>>(
    fixes: &[S],
    meta: &FixLogMeta,
    generated_at: DateTime<Utc>,
) -> String {
    let groups = group_fixes(fixes);

    let mut out = String::new();
    out.push_str("=== Auto Fix Log ===\n");
    out.push_str(&format!(
        "Date:     {}\n",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    out.push_str(&format!(
        "File:     {}\n",
        meta.file_name.as_deref().unwrap_or(UNKNOWN)
    ));
    out.push_str(&format!(
        "Format:   {}\n",
        meta.format_id.as_deref().unwrap_or(UNKNOWN)
    ));
    out.push_str(&format!("Actions:  {}\n", fixes.len()));
    out.push('\n');

    out.push_str("--- Summary by type ---\n");
    for group in &groups {
        out.push_str(&format!("{:>4}×  {}\n", group.count, group.category));
    }
    out.push('\n');

    out.push_str("--- Full action list ---\n");
    for (i, fix) in fixes.iter().enumerate() {
        out.push_str(&format!("{:>5}.  {}\n", i + 1, fix.as_ref()));
    }

    debug!(actions = fixes.len(), groups = groups.len(), "rendered fix log");
    out
}

/// [`render_fix_log`] stamped with the current time.
pub fn render_fix_log_now<S: AsRef<str>>(fixes: &[S], meta: &FixLogMeta) -> String {
    render_fix_log(fixes, meta, Utc::now())
}

pub fn render_readiness_md(summary: &ReadinessSummary) -> String {
    let mut out = String::new();
    out.push_str("# catalogfix readiness\n\n");
    out.push_str(&format!(
        "- Export ready: {}\n",
        if summary.is_export_ready() { "yes" } else { "no" }
    ));
    out.push_str(&format!("- Blocking errors: {}\n", summary.blocking_errors));
    out.push_str(&format!(
        "- Auto-fixable: {}\n",
        summary.auto_fixable_blocking_errors
    ));
    out.push_str(&format!(
        "- Needs manual fix: {}\n\n",
        summary.manual_blocking_errors()
    ));

    out.push_str("## Blocking issues\n\n");
    if summary.blocking_groups.is_empty() {
        out.push_str("_No blocking issues._\n");
        return out;
    }

    for group in &summary.blocking_groups {
        let first_row = if group.first_row_index >= 0 {
            // Rows are zero-based internally; people count from one.
            format!("row {}", group.first_row_index + 1)
        } else {
            "file-level".to_string()
        };
        out.push_str(&format!(
            "- **{}** (`{}`): {} × first at {}, {} auto-fixable\n",
            group.title, group.code, group.count, first_row, group.auto_fixable_count
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogfix_types::readiness::BlockingGroup;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn fix_log_layout() {
        let fixes = [
            "Trimmed leading whitespace in SKU",
            "Price rounded to 2 decimals",
            "Trimmed title",
        ];
        let meta = FixLogMeta {
            file_name: Some("products.csv".to_string()),
            format_id: Some("shopify".to_string()),
        };

        let expected = "\
=== Auto Fix Log ===
Date:     2024-05-01T12:30:00.000Z
File:     products.csv
Format:   shopify
Actions:  3

--- Summary by type ---
   2×  Whitespace cleanup
   1×  Price fields

--- Full action list ---
    1.  Trimmed leading whitespace in SKU
    2.  Price rounded to 2 decimals
    3.  Trimmed title
";
        assert_eq!(render_fix_log(&fixes, &meta, fixed_time()), expected);
    }

    #[test]
    fn fix_log_lists_actions_in_input_order() {
        let out = render_fix_log(&["a", "b", "a"], &FixLogMeta::default(), fixed_time());
        assert!(out.contains("File:     unknown\n"));
        assert!(out.contains("Format:   unknown\n"));
        assert!(out.contains("   3×  Other normalisation\n"));
        assert!(out.contains("    1.  a\n    2.  b\n    3.  a\n"));
    }

    #[test]
    fn fix_log_with_no_fixes_keeps_sections() {
        let fixes: [&str; 0] = [];
        let out = render_fix_log(&fixes, &FixLogMeta::default(), fixed_time());
        assert!(out.contains("Actions:  0\n"));
        assert!(out.ends_with("--- Summary by type ---\n\n--- Full action list ---\n"));
    }

    #[test]
    fn fix_log_is_deterministic_for_fixed_time() {
        let fixes = ["Status set to draft", "Handle rebuilt"];
        let meta = FixLogMeta::default();
        assert_eq!(
            render_fix_log(&fixes, &meta, fixed_time()),
            render_fix_log(&fixes, &meta, fixed_time())
        );
    }

    #[test]
    fn readiness_md_when_ready() {
        let out = render_readiness_md(&ReadinessSummary::default());
        assert!(out.contains("- Export ready: yes\n"));
        assert!(out.ends_with("_No blocking issues._\n"));
    }

    #[test]
    fn readiness_md_lists_groups() {
        let summary = ReadinessSummary {
            blocking_errors: 3,
            auto_fixable_blocking_errors: 1,
            blocking_groups: vec![
                BlockingGroup {
                    code: "price_missing".to_string(),
                    title: "Missing price".to_string(),
                    count: 2,
                    first_row_index: 4,
                    auto_fixable_count: 1,
                },
                BlockingGroup {
                    code: "header_missing".to_string(),
                    title: "header_missing".to_string(),
                    count: 1,
                    first_row_index: -1,
                    auto_fixable_count: 0,
                },
            ],
        };

        let out = render_readiness_md(&summary);
        assert!(out.contains("- Export ready: no\n"));
        assert!(out.contains("- Needs manual fix: 2\n"));
        assert!(out.contains(
            "- **Missing price** (`price_missing`): 2 × first at row 5, 1 auto-fixable\n"
        ));
        assert!(out.contains(
            "- **header_missing** (`header_missing`): 1 × first at file-level, 0 auto-fixable\n"
        ));
    }
}
