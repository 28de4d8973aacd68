use crate::readiness::ReadinessSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-disk readiness artifact consumed by export gates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub schema: String,
    pub tool: ToolInfo,
    pub generated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_id: Option<String>,

    /// Number of issues read from the input, before any filtering.
    #[serde(default)]
    pub issues_total: u64,

    pub export_ready: bool,
    pub summary: ReadinessSummary,
}

impl ReadinessReport {
    pub fn new(
        tool: ToolInfo,
        generated_at: DateTime<Utc>,
        format_id: Option<String>,
        issues_total: u64,
        summary: ReadinessSummary,
    ) -> Self {
        Self {
            schema: crate::schema::CATALOGFIX_READINESS_V1.to_string(),
            tool,
            generated_at,
            format_id,
            issues_total,
            export_ready: summary.is_export_ready(),
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
