//! Shared DTOs (schemas-as-code) for the catalogfix workspace.
//!
//! # Design constraints
//! - Issues and registry records come from external producers; reading them is tolerant.
//! - Summaries and reports are serialized to disk and consumed by other tools.
//! - Prefer adding optional fields over changing semantics.

pub mod fix;
pub mod issue;
pub mod readiness;
pub mod report;

/// Schema identifiers.
pub mod schema {
    pub const CATALOGFIX_READINESS_V1: &str = "catalogfix.readiness.v1";
}
