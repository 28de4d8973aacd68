//! Input ingestion utilities.
//!
//! catalogfix consumes files produced by other components: the validation engine's issue list,
//! the auto-fix engine's action log and the issue-meta registry. Loading is tolerant about
//! missing optional fields and unknown extra fields; structural validation belongs to the
//! producers.

mod load;

pub use load::{InputLoadError, load_fix_log, load_issues, load_meta_entries};
