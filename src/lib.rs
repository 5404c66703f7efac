// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod baseline;
pub mod collector;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod utils;

pub use baseline::{BaselineDoc, BaselineLoader, compare, merge_baselines};
pub use collector::{Collected, collect_strings, sha256_file};
pub use config::{BaselineConfig, Config, ExtractionConfig, HashingConfig, LayoutConfig};
pub use error::{ForensicsError, Result};
pub use exporter::{JsonExporter, read_summary};
pub use extractor::{IndicatorExtractor, extract};
pub use models::{
    ComparisonRecord, ComparisonStatus, IndicatorKind, IndicatorSet, SkippedArtifact, Summary,
};
pub use pipeline::{ProgressTracker, RunStats, SummarizeOutcome, Summarizer};
pub use report::ReportWriter;
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let set = extract("", 4);
        assert!(set.is_empty());
        assert!(compare(&BTreeMap::new(), &BTreeMap::new()).is_empty());
    }
}
