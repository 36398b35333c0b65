//! Field normalization for raw collection records.
//!
//! Raw records arrive as semi-structured JSON maps with optional, noisy,
//! inconsistently-typed fields. Every function here is a pure projection
//! with one uniform failure policy: a missing or malformed field collapses
//! to `None` (or an empty vec), never an error.

use serde_json::Value;

use crate::classify::{classify_category, is_vessel, Category};
use crate::year::extract_year;

/// The cleaned, derived projection of one raw record.
///
/// Built transiently per record by [`NormalizedRecord::from_raw`] and folded
/// into [`crate::aggregate::Statistics`]; immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// Best-effort year; negative means BCE. Absent if no evidence found.
    pub year: Option<i64>,
    /// Lower-cased, trimmed medium text.
    pub medium: Option<String>,
    /// Trimmed culture text, case preserved.
    pub culture: Option<String>,
    /// Trimmed classification label, case preserved.
    pub classification: Option<String>,
    /// Lower-cased, trimmed tag terms; order and duplicates preserved.
    pub tags: Vec<String>,
    /// Year the object entered the collection.
    pub accession_year: Option<i64>,
    /// Heuristic cultural bucket; defaults to Other.
    pub category: Category,
    /// Heuristic vase/pottery flag.
    pub is_vessel: bool,
    /// Human-readable label for vessel examples; never used for
    /// classification. Falls back title → classification → medium →
    /// objectName, else empty.
    pub display_title: String,
}

impl NormalizedRecord {
    /// Derives the normalized projection of one raw record.
    pub fn from_raw(record: &Value) -> Self {
        let medium = normalize_medium(record);
        let classification = normalize_classification(record);

        let category = classify_category(
            record.get("period").and_then(Value::as_str),
            record.get("title").and_then(Value::as_str),
        );
        let vessel = is_vessel(classification.as_deref(), medium.as_deref());

        Self {
            year: extract_year(record),
            culture: normalize_culture(record),
            tags: normalize_tags(record),
            accession_year: normalize_accession_year(record),
            category,
            is_vessel: vessel,
            display_title: display_title(record),
            medium,
            classification,
        }
    }
}

/// Returns a record's string field trimmed, or `None` if the field is
/// missing, non-string, or trims to empty.
fn trimmed_field(record: &Value, key: &str) -> Option<String> {
    let text = record.get(key)?.as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Trimmed, lower-cased `medium` text.
pub fn normalize_medium(record: &Value) -> Option<String> {
    trimmed_field(record, "medium").map(|m| m.to_lowercase())
}

/// Trimmed `culture` text; case preserved for display.
pub fn normalize_culture(record: &Value) -> Option<String> {
    trimmed_field(record, "culture")
}

/// Trimmed `classification` label; case preserved for display.
pub fn normalize_classification(record: &Value) -> Option<String> {
    trimmed_field(record, "classification")
}

/// Extracts the record's tag terms, lower-cased and trimmed.
///
/// The source API delivers `tags` either as plain strings or as maps
/// carrying a `term` field, and some records mix both forms. Order and
/// duplicates are preserved; the aggregator's counters collapse duplicates
/// later. Anything that is not an array yields an empty vec.
pub fn normalize_tags(record: &Value) -> Vec<String> {
    let Some(entries) = record.get("tags").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(map) => map.get("term").and_then(Value::as_str).map(str::to_string),
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .filter_map(|term| {
            let term = term.trim().to_lowercase();
            if term.is_empty() {
                None
            } else {
                Some(term)
            }
        })
        .collect()
}

/// Accession year: integer passthrough, or an all-digit string parsed.
/// Floats and anything else collapse to `None`.
pub fn normalize_accession_year(record: &Value) -> Option<i64> {
    match record.get("accessionYear")? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => {
            if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
                s.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Display label fallback chain: title, classification, medium, objectName.
/// Empty string when none of them is present.
fn display_title(record: &Value) -> String {
    ["title", "classification", "medium", "objectName"]
        .into_iter()
        .find_map(|key| trimmed_field(record, key))
        .unwrap_or_default()
}
