// file: src/collector/mod.rs
// description: artifact collection module exports
// reference: internal module structure

pub mod hashing;
pub mod scanner;
pub mod strings;

pub use hashing::{DEFAULT_BLOCK_SIZE, HashOutcome, hash_files, sha256_bytes, sha256_file};
pub use scanner::{collect_boot_files, find_image, list_files_with_extension, matches_pattern};
pub use strings::{CarvingSummary, Collected, collect_strings, load_binwalk_summary};
