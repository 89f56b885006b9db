//! relate-resolve: Identity resolution engine for the relate CRM
//!
//! This library provides pure Rust implementations of:
//! - Email, phone, and name canonicalization
//! - Exact and fuzzy duplicate contact detection
//! - Deterministic merging of duplicate clusters into one canonical
//!   contact
//!
//! The engine exposes two operations: [`DuplicateDetector::find_duplicates`]
//! scans an existing contact set for records matching a candidate, and
//! [`MergeEngine::merge_contacts`] consolidates a reviewed duplicate
//! cluster through a [`ContactStore`](relate_domain::ContactStore).
//!
//! Detection is fail-open (a failed scan logs and yields no matches,
//! never blocking contact creation); merge failures are surfaced as
//! structured results so review flows can react. That asymmetry is a
//! contract, not an accident.

pub mod deduplication;
pub mod error;
pub mod merge;

// Re-export main types for convenience
pub use deduplication::{
    DetectorConfig, DuplicateDetector, DuplicateMatch, MatchKind, MatchedField,
};
pub use error::MergeError;
pub use merge::{MergeEngine, MergeResult};
