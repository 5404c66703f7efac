// file: src/exporter/mod.rs
// description: output persistence module exports
// reference: internal module structure

pub mod json;

pub use json::{JsonExporter, read_summary};
