use crate::classify::classify;
use catalogfix_types::fix::{FixCategory, FixGroup};
use std::collections::HashMap;
use tracing::debug;

/// Aggregate fix messages into per-category groups.
///
/// Groups are ordered by count (descending), then by label (ascending). Each group keeps the
/// first message that was classified into it as its sample.
pub fn group_fixes<S: AsRef<str>>(fixes: &[S]) -> Vec<FixGroup> {
    let mut groups: Vec<FixGroup> = Vec::new();
    let mut slots: HashMap<FixCategory, usize> = HashMap::new();

    for fix in fixes {
        let message = fix.as_ref();
        let category = classify(message);
        match slots.get(&category) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                slots.insert(category, groups.len());
                groups.push(FixGroup {
                    category,
                    count: 1,
                    sample: message.to_string(),
                });
            }
        }
    }

    groups.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });

    debug!(fixes = fixes.len(), groups = groups.len(), "grouped fix messages");
    groups
}
