//! The seam between the analysis pipeline and whatever produces records.
//!
//! The surrounding application owns actual retrieval (the museum API,
//! caching, pagination); this module only defines the trait it implements,
//! a trivial in-memory implementation for tests and pre-fetched batches,
//! and the ID-list cleanup shared by every retrieval path.

use serde_json::Value;
use tracing::{debug, info};

use crate::aggregate::{aggregate, Statistics};
use crate::error::SourceError;

/// Supplies a finite batch of raw collection records for a search query.
pub trait RecordSource {
    /// Fetches the full batch of records matching `query`.
    fn fetch_records(&self, query: &str) -> Result<Vec<Value>, SourceError>;
}

/// A record source over an already-materialized batch.
///
/// Ignores the query and hands back a clone of its records; used in tests
/// and by callers that performed retrieval elsewhere.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<Value>,
}

impl InMemorySource {
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Parses a JSON array payload into an in-memory source.
    pub fn from_json(payload: &str) -> Result<Self, SourceError> {
        let parsed: Value = serde_json::from_str(payload)?;
        match parsed {
            Value::Array(records) => Ok(Self::new(records)),
            other => Err(SourceError::UnexpectedPayload(format!(
                "expected a JSON array of records, got {}",
                type_name(&other)
            ))),
        }
    }
}

impl RecordSource for InMemorySource {
    fn fetch_records(&self, _query: &str) -> Result<Vec<Value>, SourceError> {
        Ok(self.records.clone())
    }
}

/// Deduplicates a search result's object-ID list, preserving first-seen
/// order, and truncates it to `max` entries. Search endpoints routinely
/// return the same ID under several alias queries.
pub fn dedupe_limit(ids: &[u64], max: usize) -> Vec<u64> {
    let mut unique = Vec::new();
    for &id in ids {
        if unique.len() == max {
            break;
        }
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

/// Fetches the records for `query` and aggregates them in one step.
pub fn run_analysis<S: RecordSource>(source: &S, query: &str) -> Result<Statistics, SourceError> {
    debug!(query, "fetching records");
    let records = source.fetch_records(query)?;

    let stats = aggregate(&records);
    info!(
        query,
        records = stats.record_count(),
        "analysis run complete"
    );
    Ok(stats)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
