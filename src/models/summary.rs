// file: src/models/summary.rs
// description: run summary record written to analysis/summary.json
// reference: internal data structures

use crate::models::{ComparisonRecord, IndicatorSet};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imaging {
    pub image: String,
    pub sha256: Option<String>,
}

/// An artifact that could not be read, kept so the run stays auditable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedArtifact {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedArtifact {
    pub fn new(path: &Path, reason: impl ToString) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub generated: String,
    pub version: String,
    pub root: String,
    #[serde(default)]
    pub imaging: Option<Imaging>,
    #[serde(default)]
    pub boot_files: BTreeMap<String, String>,
    #[serde(default)]
    pub baseline_compare: BTreeMap<String, ComparisonRecord>,
    #[serde(default)]
    pub indicators: IndicatorSet,
    #[serde(default)]
    pub binwalk_summary: BTreeMap<String, Value>,
    #[serde(default)]
    pub skipped: Vec<SkippedArtifact>,
}

impl Summary {
    pub fn new(root: &Path) -> Self {
        Self {
            generated: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            root: root.display().to_string(),
            imaging: None,
            boot_files: BTreeMap::new(),
            baseline_compare: BTreeMap::new(),
            indicators: IndicatorSet::default(),
            binwalk_summary: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }

    /// Parses a summary and restores each comparison record's filename from its map key.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let mut summary: Summary = serde_json::from_str(content)?;
        for (name, record) in summary.baseline_compare.iter_mut() {
            record.filename = name.clone();
        }
        Ok(summary)
    }

    pub fn discrepancies(&self) -> impl Iterator<Item = &ComparisonRecord> {
        self.baseline_compare.values().filter(|r| r.is_discrepancy())
    }
}
