use catalogfix_types::issue::{IssueMeta, MetaEntry};
use std::collections::HashMap;

/// Read-only issue metadata lookup.
///
/// The analyzer receives this as a capability so tests can substitute fakes. Implementations
/// return `None` for unknown keys and never apply defaults themselves.
pub trait IssueMetaRegistry {
    fn lookup(&self, format_id: Option<&str>, code: &str) -> Option<IssueMeta>;
}

impl<F> IssueMetaRegistry for F
where
    F: Fn(Option<&str>, &str) -> Option<IssueMeta>,
{
    fn lookup(&self, format_id: Option<&str>, code: &str) -> Option<IssueMeta> {
        self(format_id, code)
    }
}

/// In-memory `IssueMetaRegistry` built from registry records.
///
/// A format-specific record wins over a record that applies to every format.
#[derive(Debug, Clone, Default)]
pub struct MetaTable {
    /// format id -> code -> meta
    by_format: HashMap<String, HashMap<String, IssueMeta>>,
    /// Records without a format id, keyed by code.
    any_format: HashMap<String, IssueMeta>,
}

impl MetaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = MetaEntry>) -> Self {
        let mut table = Self::new();
        table.extend(entries);
        table
    }

    /// Later records replace earlier ones with the same key.
    pub fn insert(&mut self, entry: MetaEntry) {
        let codes = match entry.format {
            Some(format) => self.by_format.entry(format).or_default(),
            None => &mut self.any_format,
        };
        codes.insert(entry.code, entry.meta);
    }

    pub fn len(&self) -> usize {
        self.any_format.len() + self.by_format.values().map(HashMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<MetaEntry> for MetaTable {
    fn extend<I: IntoIterator<Item = MetaEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl IssueMetaRegistry for MetaTable {
    fn lookup(&self, format_id: Option<&str>, code: &str) -> Option<IssueMeta> {
        format_id
            .and_then(|format| self.by_format.get(format))
            .and_then(|codes| codes.get(code))
            .or_else(|| self.any_format.get(code))
            .cloned()
    }
}
