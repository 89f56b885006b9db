//! Exact and fuzzy matchers over normalized contact fields

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strsim::normalized_levenshtein;

use super::normalization::{normalize_email, normalize_name, normalize_phone};
use relate_domain::Contact;

/// How a pair of contacts was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// Equality over a normalized identifier (email or phone)
    Exact,
    /// Name similarity above the configured threshold
    Fuzzy,
}

/// The field a match was made on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Email,
    Phone,
    Name,
}

/// A potential duplicate pairing of a candidate against an existing
/// contact
///
/// Created transiently during a scan; never persisted. Exact matches
/// always carry confidence 1.0, fuzzy matches carry the similarity
/// ratio. A pair matching on both email and phone yields two matches;
/// collapsing those into one review cluster is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateMatch {
    pub kind: MatchKind,
    pub field: MatchedField,
    /// Confidence in [0.0, 1.0]; exactly 1.0 for exact matches
    pub confidence: f64,
    pub candidate: Contact,
    pub existing: Contact,
}

/// Compare a candidate against an existing contact on normalized
/// identifiers
///
/// Returns one match per field whose normalized values are equal and
/// non-empty: email first, then phone.
pub fn exact_matches(
    candidate: &Contact,
    existing: &Contact,
    aliases: &HashMap<String, String>,
) -> Vec<DuplicateMatch> {
    let mut matches = Vec::new();

    let email_a = normalize_email(&candidate.email, aliases);
    let email_b = normalize_email(&existing.email, aliases);
    if !email_a.is_empty() && email_a == email_b {
        matches.push(DuplicateMatch {
            kind: MatchKind::Exact,
            field: MatchedField::Email,
            confidence: 1.0,
            candidate: candidate.clone(),
            existing: existing.clone(),
        });
    }

    let phone_a = normalize_phone(candidate.phone.as_deref().unwrap_or(""));
    let phone_b = normalize_phone(existing.phone.as_deref().unwrap_or(""));
    if !phone_a.is_empty() && phone_a == phone_b {
        matches.push(DuplicateMatch {
            kind: MatchKind::Exact,
            field: MatchedField::Phone,
            confidence: 1.0,
            candidate: candidate.clone(),
            existing: existing.clone(),
        });
    }

    matches
}

/// Compare a candidate against an existing contact by name similarity
///
/// Produces a fuzzy match when the similarity of the normalized full
/// names meets `threshold`.
pub fn fuzzy_match(
    candidate: &Contact,
    existing: &Contact,
    threshold: f64,
) -> Option<DuplicateMatch> {
    let similarity = name_similarity(&candidate.full_name(), &existing.full_name());
    if similarity < threshold {
        return None;
    }

    Some(DuplicateMatch {
        kind: MatchKind::Fuzzy,
        field: MatchedField::Name,
        confidence: similarity,
        candidate: candidate.clone(),
        existing: existing.clone(),
    })
}

/// Levenshtein similarity of two names after canonicalization
///
/// `1 - distance / max(len_a, len_b)`, defined as 1.0 when both names
/// normalize to the empty string.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&normalize_name(a), &normalize_name(b))
}
