use serde::{Deserialize, Deserializer, Serialize};

/// Row index used for issues that are not attributable to a single row.
pub const FILE_LEVEL_ROW: i64 = -1;

/// A single problem reported by the validation engine.
///
/// Issues are produced externally and read "as found": every field has a default so a
/// partially filled record still deserializes. An explicit `null` is treated like an absent field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: Severity,

    /// Zero-based data row, or [`FILE_LEVEL_ROW`] for file-level issues.
    #[serde(
        default = "file_level_row",
        alias = "rowIndex",
        deserialize_with = "null_as_file_level_row"
    )]
    pub row_index: i64,
}

fn file_level_row() -> i64 {
    FILE_LEVEL_ROW
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_file_level_row<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(FILE_LEVEL_ROW))
}

impl Issue {
    pub fn new(code: impl Into<String>, severity: Severity, row_index: i64) -> Self {
        Self {
            code: Some(code.into()),
            message: String::new(),
            severity,
            row_index,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_file_level(&self) -> bool {
        self.row_index < 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    #[serde(alias = "warn")]
    Warning,
    #[default]
    Info,
}

/// Registry metadata for one issue code.
///
/// Every field is optional; the analyzer decides what an absent value means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking: Option<bool>,

    #[serde(
        default,
        alias = "autoFixable",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_fixable: Option<bool>,
}

/// A registry record as stored on disk: the lookup key plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    /// Export format the record applies to. `None` applies to every format.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "formatId")]
    pub format: Option<String>,

    pub code: String,

    #[serde(flatten)]
    pub meta: IssueMeta,
}
