//! Error types for merge operations

use relate_domain::StoreError;
use thiserror::Error;

/// Errors surfaced through [`MergeResult`](crate::merge::MergeResult).
///
/// These are returned inside the result, never panicked, so review
/// flows can present partial outcomes to the user.
#[derive(Error, Debug)]
pub enum MergeError {
    /// Cluster validation failed before any store call
    #[error("at least two contacts are required for merging")]
    InsufficientCluster,

    /// Writing the merged record back under the primary id failed;
    /// no deletions were attempted
    #[error("failed to write merged contact {id}: {source}")]
    WriteFailed {
        id: String,
        #[source]
        source: StoreError,
    },

    /// A deletion failed mid-merge; prior writes and deletions stand
    #[error("failed to delete contact {id}: {source}")]
    DeletionFailed {
        id: String,
        #[source]
        source: StoreError,
    },
}
