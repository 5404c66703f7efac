// file: src/collector/strings.rs
// description: best-effort gathering of string dumps and carving output
// reference: https://docs.rs/serde_json

use crate::collector::scanner::list_files_with_extension;
use crate::models::SkippedArtifact;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Text gathered from every readable dump, plus what had to be left out.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub text: String,
    pub files_read: Vec<PathBuf>,
    pub skipped: Vec<SkippedArtifact>,
}

impl Collected {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Concatenates `*.txt` dumps in sorted order, each preceded by a newline.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn collect_strings(strings_dir: &Path) -> Collected {
    let mut collected = Collected::default();

    for path in list_files_with_extension(strings_dir, "txt") {
        match fs::read(&path) {
            Ok(bytes) => {
                debug!("Read {} bytes of strings from {}", bytes.len(), path.display());
                collected.text.push('\n');
                collected.text.push_str(&String::from_utf8_lossy(&bytes));
                collected.files_read.push(path);
            }
            Err(e) => {
                warn!("Skipping unreadable strings dump {}: {}", path.display(), e);
                collected.skipped.push(SkippedArtifact::new(&path, e));
            }
        }
    }

    collected
}

#[derive(Debug, Clone, Default)]
pub struct CarvingSummary {
    pub entries: BTreeMap<String, Value>,
    pub skipped: Vec<SkippedArtifact>,
}

/// Loads binwalk `*.json` output as opaque values keyed by path.
///
/// A file that fails to load is kept with an error marker so the report shows it.
pub fn load_binwalk_summary(binwalk_dir: &Path) -> CarvingSummary {
    let mut summary = CarvingSummary::default();

    for path in list_files_with_extension(binwalk_dir, "json") {
        let key = path.display().to_string();
        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(value) => {
                summary.entries.insert(key, value);
            }
            Err(reason) => {
                warn!("Failed to load binwalk output {}: {}", path.display(), reason);
                summary
                    .entries
                    .insert(key, json!({"error": "failed to load"}));
                summary.skipped.push(SkippedArtifact::new(&path, reason));
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_strings_joins_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "second").unwrap();
        fs::write(temp.path().join("a.txt"), "first").unwrap();
        fs::write(temp.path().join("ignored.bin"), "nope").unwrap();

        let collected = collect_strings(temp.path());
        assert_eq!(collected.text, "\nfirst\nsecond");
        assert_eq!(collected.files_read.len(), 2);
        assert!(collected.skipped.is_empty());
    }

    #[test]
    fn test_collect_strings_decodes_lossily() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dump.txt"), [b'o', b'k', 0xff, b'!']).unwrap();

        let collected = collect_strings(temp.path());
        assert_eq!(collected.text, "\nok\u{FFFD}!");
    }

    #[test]
    fn test_collect_strings_missing_dir() {
        let collected = collect_strings(Path::new("/nonexistent/strings"));
        assert!(collected.is_empty());
        assert!(collected.skipped.is_empty());
    }

    #[test]
    fn test_binwalk_summary_marks_bad_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("good.json"), r#"[{"offset": 0}]"#).unwrap();
        fs::write(temp.path().join("bad.json"), "{not json").unwrap();

        let summary = load_binwalk_summary(temp.path());
        assert_eq!(summary.entries.len(), 2);

        let bad_key = temp.path().join("bad.json").display().to_string();
        assert_eq!(summary.entries[&bad_key], json!({"error": "failed to load"}));
        assert_eq!(summary.skipped.len(), 1);
    }
}
