//! Domain logic: classify applied fixes and decide whether an export may proceed.
//!
//! This crate owns *what* is counted and how it is grouped. It never decides how a row is
//! fixed; that belongs to the external auto-fix engine.

mod classify;
mod group;
mod ports;
mod readiness;

pub use classify::{ClassificationRule, classification_rules, classify, classify_opt};
pub use group::group_fixes;
pub use ports::{IssueMetaRegistry, MetaTable};
pub use readiness::{ReadinessAnalyzer, UNKNOWN_CODE};
