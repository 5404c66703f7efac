// file: src/utils/validation.rs
// description: input presence checks and digest format helpers
// reference: input validation patterns

use crate::error::{ForensicsError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn require_directory(path: &Path) -> Result<()> {
        if !path.is_dir() {
            return Err(ForensicsError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    pub fn require_file(path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(ForensicsError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    /// True for a 64 character hex string, either case.
    pub fn is_sha256_hex(value: &str) -> bool {
        value.len() == 64 && value.bytes().all(|b| b.is_ascii_hexdigit())
    }
}
