//! Error types for record retrieval.
//!
//! The analysis pipeline itself is total, since malformed fields degrade to
//! "no information" rather than erroring. The only fallible boundary
//! is the record source that feeds it.

use thiserror::Error;

/// Errors a [`crate::source::RecordSource`] implementation may surface.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream collection endpoint could not be reached or refused
    /// the request.
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    /// The source returned a payload that is not a JSON array of records.
    #[error("unexpected payload shape: {0}")]
    UnexpectedPayload(String),

    /// The source payload was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
