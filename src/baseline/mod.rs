// file: src/baseline/mod.rs
// description: baseline comparison module exports
// reference: internal module structure

pub mod comparator;
pub mod loader;

pub use comparator::compare;
pub use loader::{BaselineDoc, BaselineLoad, BaselineLoader, merge_baselines};
