use crate::issue::FILE_LEVEL_ROW;
use serde::{Deserialize, Serialize};

/// Blocking errors that share an issue code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingGroup {
    pub code: String,
    pub title: String,
    pub count: u64,

    /// Row of the first row-scoped occurrence, or `-1` if every occurrence is file-level.
    pub first_row_index: i64,

    pub auto_fixable_count: u64,
}

impl BlockingGroup {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            count: 0,
            first_row_index: FILE_LEVEL_ROW,
            auto_fixable_count: 0,
        }
    }
}

/// Export-readiness counters derived from an issue list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessSummary {
    pub blocking_errors: u64,
    pub auto_fixable_blocking_errors: u64,

    #[serde(default)]
    pub blocking_groups: Vec<BlockingGroup>,
}

impl ReadinessSummary {
    pub fn is_export_ready(&self) -> bool {
        self.blocking_errors == 0
    }

    /// Blocking errors that the auto-fix engine cannot resolve.
    pub fn manual_blocking_errors(&self) -> u64 {
        self.blocking_errors
            .saturating_sub(self.auto_fixable_blocking_errors)
    }
}
