// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod comparison;
pub mod indicator;
pub mod summary;

pub use comparison::{ComparisonRecord, ComparisonStatus};
pub use indicator::{IndicatorKind, IndicatorSet, Ranked};
pub use summary::{Imaging, SkippedArtifact, Summary};
