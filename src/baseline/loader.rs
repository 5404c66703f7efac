// file: src/baseline/loader.rs
// description: loading and ordered merging of known-good hash documents
// reference: https://docs.rs/serde_json

use crate::collector::list_files_with_extension;
use crate::error::{ForensicsError, Result};
use crate::models::SkippedArtifact;
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A `{"files": {filename: hexHash}}` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineDoc {
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

impl BaselineDoc {
    /// Parses a whole document; anything but an object with a string map is rejected.
    pub fn parse(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(ForensicsError::Validation(
                "baseline document must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ForensicsError::file(path, e))?;
        Self::parse(&content)
    }
}

/// Later documents override earlier ones on filename collisions.
pub fn merge_baselines(docs: &[BaselineDoc]) -> BTreeMap<String, String> {
    docs.iter().fold(BTreeMap::new(), |mut merged, doc| {
        merged.extend(doc.files.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    })
}

#[derive(Debug, Clone, Default)]
pub struct BaselineLoad {
    pub docs: Vec<(PathBuf, BaselineDoc)>,
    pub skipped: Vec<SkippedArtifact>,
}

impl BaselineLoad {
    pub fn merged(&self) -> BTreeMap<String, String> {
        let docs: Vec<BaselineDoc> = self.docs.iter().map(|(_, doc)| doc.clone()).collect();
        merge_baselines(&docs)
    }
}

pub struct BaselineLoader {
    dirs: Vec<PathBuf>,
}

impl BaselineLoader {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Reads `*.json` from each directory in order, files sorted by name within a directory.
    ///
    /// Malformed documents are skipped whole and never abort loading.
    pub fn load(&self) -> BaselineLoad {
        let mut load = BaselineLoad::default();

        for dir in &self.dirs {
            if !dir.is_dir() {
                debug!("Baseline directory not present: {}", dir.display());
                continue;
            }

            for path in list_files_with_extension(dir, "json") {
                match BaselineDoc::from_file(&path) {
                    Ok(doc) => {
                        for (name, hash) in &doc.files {
                            if !Validator::is_sha256_hex(hash) {
                                warn!(
                                    "Baseline {} lists {} with a non-sha256 value",
                                    path.display(),
                                    name
                                );
                            }
                        }
                        debug!(
                            "Loaded baseline {} ({} entries)",
                            path.display(),
                            doc.files.len()
                        );
                        load.docs.push((path, doc));
                    }
                    Err(e) => {
                        warn!("Skipping malformed baseline {}: {}", path.display(), e);
                        load.skipped.push(SkippedArtifact::new(&path, e));
                    }
                }
            }
        }

        info!(
            "Loaded {} baseline document(s), {} skipped",
            load.docs.len(),
            load.skipped.len()
        );
        load
    }
}
