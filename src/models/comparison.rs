// file: src/models/comparison.rs
// description: per-file outcome of comparing an observed hash against a baseline
// reference: known-good firmware hash verification

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    Match,
    Mismatch,
    Unknown,
}

impl ComparisonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonStatus::Match => "match",
            ComparisonStatus::Mismatch => "mismatch",
            ComparisonStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ComparisonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialized under its filename key, so the filename itself is not repeated in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    #[serde(skip)]
    pub filename: String,
    pub observed: String,
    pub expected: Option<String>,
    pub status: ComparisonStatus,
}

impl ComparisonRecord {
    pub fn is_discrepancy(&self) -> bool {
        self.status != ComparisonStatus::Match
    }
}
