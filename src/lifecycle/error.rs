//! Error types for batch admission.

use thiserror::Error;

use crate::repository::RepositoryError;
use crate::resource::IngestError;

/// Errors that abort a batch admission.
///
/// Conflicts are not errors: an inbound item whose id is already taken is
/// collected into the batch report instead (see
/// [`BatchReport`](crate::lifecycle::BatchReport)).
#[derive(Debug, Error, PartialEq)]
pub enum AdmissionError {
    /// An inbound representation failed the acceptance rules.
    #[error("item {index} failed validation")]
    Rejected { index: usize },

    /// A loose record lacks a required key.
    #[error("item {index} is missing required key \"{field}\"")]
    MissingField { index: usize, field: &'static str },

    /// Loose ingestion hit a fatal argument violation.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The underlying repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
