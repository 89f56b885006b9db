//! Duplicate detection for contact records
//!
//! This module provides canonicalization, matching, and scan
//! orchestration to identify potential duplicate contacts.

mod detection;
mod matching;
mod normalization;

pub use detection::{DetectorConfig, DuplicateDetector};
pub use matching::{
    exact_matches, fuzzy_match, name_similarity, DuplicateMatch, MatchKind, MatchedField,
};
pub use normalization::{normalize_email, normalize_name, normalize_phone};
