//! Duplicate scan orchestration
//!
//! Runs the exact matcher over the existing contact set and falls back
//! to fuzzy name matching only when no exact match was found.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::matching::{exact_matches, fuzzy_match, DuplicateMatch};
use relate_domain::Contact;

/// Configuration for duplicate detection
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Minimum name similarity for a fuzzy match (0.0 - 1.0)
    pub threshold: f64,
    /// Email domain aliases applied during normalization
    /// (key: alias, value: canonical domain)
    pub domain_aliases: HashMap<String, String>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        let domain_aliases = [
            ("googlemail.com", "gmail.com"),
            ("hotmail.com", "outlook.com"),
            ("live.com", "outlook.com"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            threshold: 0.85,
            domain_aliases,
        }
    }
}

/// Service scanning an existing contact set for duplicates of a
/// candidate
///
/// Carries its configuration as a field rather than module-global
/// state, so the threshold and alias table are testable per instance.
#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    config: DetectorConfig,
}

impl DuplicateDetector {
    /// Create a detector with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom configuration
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Find potential duplicates of `candidate` within `existing`
    ///
    /// Exact identifier matches win outright: when any exist, only
    /// those are returned and the fuzzy pass is skipped. Otherwise
    /// every existing contact is scored by name similarity against the
    /// configured threshold. Results are sorted by descending
    /// confidence, ties keeping the input order.
    ///
    /// Fail-open: this call never panics across its boundary; an
    /// internal failure is logged and degrades to an empty list, since
    /// a best-effort duplicate check must not block contact creation.
    pub fn find_duplicates(&self, candidate: &Contact, existing: &[Contact]) -> Vec<DuplicateMatch> {
        match catch_unwind(AssertUnwindSafe(|| self.scan(candidate, existing))) {
            Ok(matches) => matches,
            Err(_) => {
                tracing::warn!(
                    candidate_id = %candidate.id,
                    "duplicate scan failed, returning no matches"
                );
                Vec::new()
            }
        }
    }

    fn scan(&self, candidate: &Contact, existing: &[Contact]) -> Vec<DuplicateMatch> {
        let mut matches: Vec<DuplicateMatch> = existing
            .iter()
            .flat_map(|other| exact_matches(candidate, other, &self.config.domain_aliases))
            .collect();

        if matches.is_empty() {
            matches = existing
                .iter()
                .filter_map(|other| fuzzy_match(candidate, other, self.config.threshold))
                .collect();
        }

        // Stable sort: equal confidences keep the existing list's order
        matches.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches
    }
}
