//! Folds raw collection records into summary statistics.
//!
//! This is the single entry point the charting layer consumes: one ordered
//! pass over the records, one immutable [`Statistics`] value out. Noisy or
//! partial records degrade field-by-field; no record is ever dropped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::classify::Category;
use crate::normalize::NormalizedRecord;

/// Summary statistics over one batch of collection records.
///
/// Counters are order-independent multisets; the `years`,
/// `vessel_examples` and `accession_years` sequences preserve input order.
/// Never mutated after construction and never merged across runs; a fresh
/// analysis run replaces the previous value entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Best-guess year per record, input order, duplicates retained.
    pub years: Vec<i64>,
    /// Frequency of each normalized (lower-cased) medium.
    pub medium_counts: HashMap<String, usize>,
    /// Frequency of each culture label.
    pub culture_counts: HashMap<String, usize>,
    /// Frequency of each classification label.
    pub classification_counts: HashMap<String, usize>,
    /// Frequency of each normalized tag term.
    pub tag_counts: HashMap<String, usize>,
    /// Records per category; all three keys always present.
    pub category_counts: HashMap<Category, usize>,
    /// Display label of every vessel record, input order; entries may be
    /// empty strings or duplicates.
    pub vessel_examples: Vec<String>,
    /// Accession year per record that has one, input order.
    pub accession_years: Vec<i64>,
}

impl Statistics {
    /// An empty statistics value with all three category keys seeded to 0.
    pub fn empty() -> Self {
        let mut category_counts = HashMap::new();
        for category in Category::all() {
            category_counts.insert(category, 0);
        }

        Self {
            years: Vec::new(),
            medium_counts: HashMap::new(),
            culture_counts: HashMap::new(),
            classification_counts: HashMap::new(),
            tag_counts: HashMap::new(),
            category_counts,
            vessel_examples: Vec::new(),
            accession_years: Vec::new(),
        }
    }

    /// Total records folded in; equals the sum of the category counts,
    /// since every record lands in exactly one category.
    pub fn record_count(&self) -> usize {
        self.category_counts.values().sum()
    }

    /// Folds one normalized record into the accumulators.
    fn fold(&mut self, record: NormalizedRecord) {
        if let Some(year) = record.year {
            self.years.push(year);
        }
        if let Some(medium) = record.medium {
            *self.medium_counts.entry(medium).or_insert(0) += 1;
        }
        if let Some(culture) = record.culture {
            *self.culture_counts.entry(culture).or_insert(0) += 1;
        }
        if let Some(classification) = record.classification {
            *self.classification_counts.entry(classification).or_insert(0) += 1;
        }
        for tag in record.tags {
            *self.tag_counts.entry(tag).or_insert(0) += 1;
        }

        *self.category_counts.entry(record.category).or_insert(0) += 1;

        if record.is_vessel {
            self.vessel_examples.push(record.display_title);
        }
        if let Some(accession_year) = record.accession_year {
            self.accession_years.push(accession_year);
        }
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Aggregates an ordered batch of raw records into one [`Statistics`].
///
/// Total over its input: malformed fields within a record collapse to
/// "no information" per the normalization rules, and a record with no
/// usable fields at all still counts once under [`Category::Other`].
/// Repeated calls on the same input produce identical results.
pub fn aggregate(records: &[Value]) -> Statistics {
    let mut stats = Statistics::empty();
    for record in records {
        stats.fold(NormalizedRecord::from_raw(record));
    }

    debug!(
        records = records.len(),
        vessels = stats.vessel_examples.len(),
        dated = stats.years.len(),
        "aggregated record batch"
    );
    stats
}
