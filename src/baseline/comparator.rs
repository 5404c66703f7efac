// file: src/baseline/comparator.rs
// description: classifies observed firmware hashes against known-good baselines
// reference: known-good firmware hash verification

use crate::models::{ComparisonRecord, ComparisonStatus};
use std::collections::BTreeMap;

/// One record per observed file.
///
/// Files that appear only in the baseline are not reported.
pub fn compare(
    observed: &BTreeMap<String, String>,
    baseline: &BTreeMap<String, String>,
) -> BTreeMap<String, ComparisonRecord> {
    observed
        .iter()
        .map(|(filename, observed_hash)| {
            let expected = baseline.get(filename).cloned();
            let status = match &expected {
                None => ComparisonStatus::Unknown,
                Some(expected) if expected.to_lowercase() == observed_hash.to_lowercase() => {
                    ComparisonStatus::Match
                }
                Some(_) => ComparisonStatus::Mismatch,
            };

            let record = ComparisonRecord {
                filename: filename.clone(),
                observed: observed_hash.clone(),
                expected,
                status,
            };
            (filename.clone(), record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let result = compare(&mapping(&[("a", "AA")]), &mapping(&[("a", "aa")]));
        assert_eq!(result["a"].status, ComparisonStatus::Match);
        assert_eq!(result["a"].expected.as_deref(), Some("aa"));
    }

    #[test]
    fn test_missing_baseline_is_unknown() {
        let result = compare(&mapping(&[("a", "AA")]), &BTreeMap::new());
        assert_eq!(
            result["a"],
            ComparisonRecord {
                filename: "a".to_string(),
                observed: "AA".to_string(),
                expected: None,
                status: ComparisonStatus::Unknown,
            }
        );
    }

    #[test]
    fn test_different_hash_is_mismatch() {
        let result = compare(&mapping(&[("a", "AA")]), &mapping(&[("a", "BB")]));
        assert_eq!(result["a"].status, ComparisonStatus::Mismatch);
        assert!(result["a"].is_discrepancy());
    }

    #[test]
    fn test_baseline_only_files_are_not_reported() {
        let result = compare(
            &mapping(&[("start.elf", "aa")]),
            &mapping(&[("start.elf", "aa"), ("bootcode.bin", "bb")]),
        );
        assert_eq!(result.len(), 1);
        assert!(!result.contains_key("bootcode.bin"));
    }

    #[test]
    fn test_empty_observed_yields_nothing() {
        let result = compare(&BTreeMap::new(), &mapping(&[("a", "aa")]));
        assert!(result.is_empty());
    }
}
