// file: src/exporter/json.rs
// description: json and hash listing persistence for summarize output

use crate::error::{ForensicsError, Result};
use crate::models::{ComparisonRecord, Summary};
use crate::utils::Validator;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SUMMARY_FILE: &str = "summary.json";
pub const BASELINE_COMPARE_FILE: &str = "baseline_compare.json";
pub const BOOT_HASHES_FILE: &str = "hashes/boot_sha256.txt";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| ForensicsError::file(&output_dir, e))?;
        Ok(Self { output_dir })
    }

    pub fn write_summary(&self, summary: &Summary) -> Result<PathBuf> {
        let path = self.write_json(SUMMARY_FILE, summary)?;
        info!("Summary written to {}", path.display());
        Ok(path)
    }

    pub fn write_baseline_compare(
        &self,
        records: &BTreeMap<String, ComparisonRecord>,
    ) -> Result<PathBuf> {
        self.write_json(BASELINE_COMPARE_FILE, records)
    }

    /// Writes `<hash>  <path>` lines, the layout `sha256sum -c` accepts.
    pub fn write_hash_listing(&self, hashes: &[(PathBuf, String)]) -> Result<PathBuf> {
        let path = self.output_dir.join(BOOT_HASHES_FILE);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ForensicsError::file(parent, e))?;
        }

        let mut listing = String::new();
        for (file, hash) in hashes {
            listing.push_str(&format!("{}  {}\n", hash, file.display()));
        }

        fs::write(&path, listing).map_err(|e| ForensicsError::file(&path, e))?;
        Ok(path)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<PathBuf> {
        let path = self.output_dir.join(name);
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content).map_err(|e| ForensicsError::file(&path, e))?;
        Ok(path)
    }
}

/// Reads a previously written summary; a missing file is a missing-input error.
pub fn read_summary(path: &Path) -> Result<Summary> {
    Validator::require_file(path)?;
    let content = fs::read_to_string(path).map_err(|e| ForensicsError::file(path, e))?;
    Ok(Summary::from_json(&content)?)
}
