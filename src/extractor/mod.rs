// file: src/extractor/mod.rs
// description: indicator extraction module exports
// reference: internal module structure

pub mod domain;
pub mod indicators;
pub mod patterns;

pub use domain::{DomainParts, canonicalize, split_domain};
pub use indicators::{
    DEFAULT_MIN_DOMAIN_LENGTH, IndicatorExtractor, IndicatorTallies, IndicatorTally, extract,
};
