//! Cluster consolidation: merge a duplicate cluster into one canonical
//! contact
//!
//! The most recently updated cluster member becomes the primary and
//! receives the consolidated data; the rest are deleted from the
//! store. The merge is deliberately non-transactional: a deletion
//! failure stops further deletions but does not roll back prior
//! writes, and the partial outcome is surfaced in the result.

use std::sync::Arc;

use crate::error::MergeError;
use relate_domain::{Contact, ContactStore};

/// Outcome of a merge invocation
///
/// Returned for every call, including validation and partial failures;
/// callers inspect `success`/`error` rather than catching anything.
#[derive(Debug)]
pub struct MergeResult {
    pub success: bool,
    /// The consolidated record (present whenever the cluster was
    /// valid, even if a later store call failed)
    pub merged: Option<Contact>,
    /// Ids actually deleted, in deletion order
    pub deleted_ids: Vec<String>,
    pub error: Option<MergeError>,
}

impl MergeResult {
    fn failure(merged: Option<Contact>, deleted_ids: Vec<String>, error: MergeError) -> Self {
        Self {
            success: false,
            merged,
            deleted_ids,
            error: Some(error),
        }
    }
}

/// Consolidates duplicate clusters through a [`ContactStore`]
///
/// Callers must serialize merges touching the same contact ids; the
/// engine itself holds no locks.
pub struct MergeEngine {
    store: Arc<dyn ContactStore>,
}

impl MergeEngine {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Merge a reviewed duplicate cluster into one canonical contact
    ///
    /// The cluster is sorted by `updated_at` descending (stable, so
    /// equal timestamps keep cluster order); the head is the primary.
    /// Scalar fields keep the primary's value when present and adopt
    /// the first non-empty value among the rest otherwise; tags are
    /// unioned; custom field keys are unioned with the primary winning
    /// collisions. The merged record is written back under the
    /// primary's id, then the remaining members are deleted in order.
    pub fn merge_contacts(&self, cluster: &[Contact]) -> MergeResult {
        if cluster.len() < 2 {
            return MergeResult::failure(None, Vec::new(), MergeError::InsufficientCluster);
        }

        let mut sorted = cluster.to_vec();
        sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let primary_id = sorted[0].id.clone();
        let merged = consolidate(&sorted);

        if let Err(source) = self.store.update(&primary_id, merged.clone()) {
            tracing::error!(contact_id = %primary_id, error = %source, "merge write-back failed");
            return MergeResult::failure(
                Some(merged),
                Vec::new(),
                MergeError::WriteFailed {
                    id: primary_id,
                    source,
                },
            );
        }

        let mut deleted_ids = Vec::new();
        for member in &sorted[1..] {
            match self.store.delete(&member.id) {
                Ok(()) => deleted_ids.push(member.id.clone()),
                Err(source) => {
                    tracing::error!(
                        contact_id = %member.id,
                        error = %source,
                        "deletion failed mid-merge, keeping prior writes"
                    );
                    return MergeResult::failure(
                        Some(merged),
                        deleted_ids,
                        MergeError::DeletionFailed {
                            id: member.id.clone(),
                            source,
                        },
                    );
                }
            }
        }

        MergeResult {
            success: true,
            merged: Some(merged),
            deleted_ids,
            error: None,
        }
    }
}

/// Fold the non-primary members into a copy of the primary
fn consolidate(sorted: &[Contact]) -> Contact {
    let mut merged = sorted[0].clone();

    for member in &sorted[1..] {
        merged.tags.extend(member.tags.iter().cloned());

        for (key, value) in &member.custom_fields {
            merged
                .custom_fields
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }

        if merged.phone.is_none() {
            merged.phone = member.phone.clone();
        }
        if merged.organization.is_none() {
            merged.organization = member.organization.clone();
        }
        if merged.job_title.is_none() {
            merged.job_title = member.job_title.clone();
        }
    }

    merged
}
