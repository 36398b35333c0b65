//! Best-guess year resolution for collection records.
//!
//! Prefers the structured `objectBeginDate` integer; falls back to a regex
//! scan of the free-text `objectDate` string.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// First run of an optional minus sign followed by 1-4 digits.
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d{1,4}").expect("year pattern is valid"));

/// Resolves a single best-guess year for a record.
///
/// An integer `objectBeginDate` wins outright and its sign is preserved
/// (negative means BCE). Otherwise the first `-?\d{1,4}` match in
/// `objectDate` is parsed, so "ca. 530 B.C." yields 530 and
/// "18th century" yields 18, not 1800. That first-match lossiness is
/// load-bearing: existing timeline charts bucket on exactly this value,
/// so it must not be corrected here.
///
/// Returns `None` when neither field offers a usable value. Never panics;
/// a non-string `objectDate` is simply "no match".
pub fn extract_year(record: &Value) -> Option<i64> {
    if let Some(begin) = record.get("objectBeginDate").and_then(Value::as_i64) {
        return Some(begin);
    }

    let date_text = record.get("objectDate").and_then(Value::as_str)?;
    let matched = YEAR_PATTERN.find(date_text)?;
    matched.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_begin_date_wins() {
        let record = json!({ "objectBeginDate": -450, "objectDate": "ca. 530 B.C." });
        assert_eq!(extract_year(&record), Some(-450));
    }

    #[test]
    fn test_negative_year_sign_preserved() {
        let record = json!({ "objectBeginDate": -530 });
        assert_eq!(extract_year(&record), Some(-530));
    }

    #[test]
    fn test_free_text_fallback() {
        let record = json!({ "objectDate": "ca. 530 B.C." });
        assert_eq!(extract_year(&record), Some(530));
    }

    #[test]
    fn test_free_text_negative() {
        let record = json!({ "objectDate": "-27 to 14" });
        assert_eq!(extract_year(&record), Some(-27));
    }

    #[test]
    fn test_first_match_wins_lossy() {
        // Documented limitation: "18th century" extracts 18, not 1800.
        let record = json!({ "objectDate": "18th century" });
        assert_eq!(extract_year(&record), Some(18));
    }

    #[test]
    fn test_float_begin_date_falls_through() {
        let record = json!({ "objectBeginDate": 530.0, "objectDate": "1700s" });
        assert_eq!(extract_year(&record), Some(1700));
    }

    #[test]
    fn test_non_string_object_date_is_no_match() {
        assert_eq!(extract_year(&json!({ "objectDate": 1700 })), None);
        assert_eq!(extract_year(&json!({ "objectDate": ["1700"] })), None);
    }

    #[test]
    fn test_no_evidence_yields_none() {
        assert_eq!(extract_year(&json!({})), None);
        assert_eq!(extract_year(&json!({ "objectDate": "undated" })), None);
    }
}
