//! Heuristic cultural classification of collection records.
//!
//! Buckets each record into a coarse {Greek, Roman, Other} category and
//! decides a vessel/pottery flag, using plain substring checks over the
//! free-text `period`, `title`, `classification` and `medium` fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substrings in `period`/`title` that mark a record as Greek.
const GREEK_MARKERS: [&str; 3] = ["greek", "classical", "hellenistic"];

/// Substrings in `classification` that mark a record as a vessel.
/// "terracott" is a deliberate stem matching both "terracotta" and
/// "terracottas".
const VESSEL_CLASSIFICATIONS: [&str; 6] =
    ["vase", "vessel", "amphora", "pottery", "ceramic", "terracott"];

/// Substrings in `medium` that mark a record as a vessel.
const VESSEL_MEDIUMS: [&str; 4] = ["vase", "ceramic", "terracotta", "earthenware"];

/// Coarse cultural/period bucket for a collection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Greek,
    Roman,
    Other,
}

impl Category {
    /// Returns all categories, in display order.
    pub fn all() -> [Category; 3] {
        [Category::Greek, Category::Roman, Category::Other]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Greek => write!(f, "Greek"),
            Category::Roman => write!(f, "Roman"),
            Category::Other => write!(f, "Other"),
        }
    }
}

/// Classifies a record into exactly one [`Category`] from its free-text
/// `period` and `title` fields.
///
/// The Roman check runs strictly before the Greek check, so a string like
/// "Roman copy of a Greek original" classifies as Roman. The precedence is
/// arbitrary but must stay deterministic: charts built on these buckets
/// depend on it.
pub fn classify_category(period: Option<&str>, title: Option<&str>) -> Category {
    let period = period.unwrap_or_default().to_lowercase();
    let title = title.unwrap_or_default().to_lowercase();

    if period.contains("roman") || title.contains("roman") {
        return Category::Roman;
    }

    if GREEK_MARKERS
        .iter()
        .any(|m| period.contains(m) || title.contains(m))
    {
        return Category::Greek;
    }

    Category::Other
}

/// Returns true if the record looks like a vase/pottery/ceramic object.
///
/// Pure substring containment over `classification` and `medium`, no word
/// boundaries. Occasionally over-matches (e.g. a marble sculpture *of* a
/// vase); that permissiveness is intentional and relied upon downstream.
pub fn is_vessel(classification: Option<&str>, medium: Option<&str>) -> bool {
    let classification = classification.unwrap_or_default().to_lowercase();
    let medium = medium.unwrap_or_default().to_lowercase();

    VESSEL_CLASSIFICATIONS
        .iter()
        .any(|m| classification.contains(m))
        || VESSEL_MEDIUMS.iter().any(|m| medium.contains(m))
}
