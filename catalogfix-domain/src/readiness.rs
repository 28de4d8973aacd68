use crate::ports::IssueMetaRegistry;
use catalogfix_types::issue::{FILE_LEVEL_ROW, Issue, IssueMeta, Severity};
use catalogfix_types::readiness::{BlockingGroup, ReadinessSummary};
use std::collections::HashMap;
use tracing::debug;

/// Group key used for issues that carry no code.
pub const UNKNOWN_CODE: &str = "unknown";

/// Counts blocking errors and groups them by issue code.
///
/// Default policy lives here, not in the registry:
/// - an error blocks unless its metadata says `blocking = false`;
/// - it is auto-fixable only if metadata says so *and* it is row-scoped;
/// - the group title falls back to the issue message (code-less issues) or the code.
pub struct ReadinessAnalyzer<'a> {
    registry: &'a dyn IssueMetaRegistry,
}

impl<'a> ReadinessAnalyzer<'a> {
    pub fn new(registry: &'a dyn IssueMetaRegistry) -> Self {
        Self { registry }
    }

    pub fn analyze(&self, issues: &[Issue], format_id: Option<&str>) -> ReadinessSummary {
        let mut summary = ReadinessSummary::default();
        let mut groups: Vec<BlockingGroup> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for issue in issues {
            if issue.severity != Severity::Error {
                continue;
            }

            let code = issue_code(issue);
            let meta = code
                .and_then(|c| self.registry.lookup(format_id, c))
                .unwrap_or_default();
            if !meta.blocking.unwrap_or(true) {
                continue;
            }

            let auto_fixable = meta.auto_fixable == Some(true) && !issue.is_file_level();
            summary.blocking_errors += 1;
            if auto_fixable {
                summary.auto_fixable_blocking_errors += 1;
            }

            let key = code.unwrap_or(UNKNOWN_CODE);
            let slot = *slots.entry(key).or_insert_with(|| {
                groups.push(BlockingGroup::new(key, group_title(&meta, key, issue)));
                groups.len() - 1
            });

            let group = &mut groups[slot];
            group.count += 1;
            if auto_fixable {
                group.auto_fixable_count += 1;
            }
            if group.first_row_index == FILE_LEVEL_ROW && !issue.is_file_level() {
                group.first_row_index = issue.row_index;
            }
        }

        // Count only; equal counts keep first-seen order.
        groups.sort_by(|a, b| b.count.cmp(&a.count));
        summary.blocking_groups = groups;

        debug!(
            issues = issues.len(),
            blocking = summary.blocking_errors,
            auto_fixable = summary.auto_fixable_blocking_errors,
            groups = summary.blocking_groups.len(),
            "analyzed export readiness"
        );
        summary
    }
}

fn issue_code(issue: &Issue) -> Option<&str> {
    issue.code.as_deref().filter(|c| !c.is_empty())
}

fn group_title(meta: &IssueMeta, key: &str, issue: &Issue) -> String {
    match &meta.title {
        Some(title) => title.clone(),
        None if key == UNKNOWN_CODE => issue.message.clone(),
        None => key.to_string(),
    }
}
