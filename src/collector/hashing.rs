// file: src/collector/hashing.rs
// description: streaming sha256 content digests for collected artifacts
// reference: https://docs.rs/sha2

use crate::models::SkippedArtifact;
use crate::pipeline::ProgressTracker;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

/// Hex digest of the file, read in `block_size` chunks.
pub fn sha256_file(path: &Path, block_size: usize) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; block_size.max(1)];

    loop {
        match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}

pub fn sha256_bytes(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

#[derive(Debug, Clone, Default)]
pub struct HashOutcome {
    pub hashes: Vec<(PathBuf, String)>,
    pub skipped: Vec<SkippedArtifact>,
}

/// Best-effort hashing: files that cannot be read are reported in `skipped`.
pub fn hash_files(paths: &[PathBuf], block_size: usize, progress: &ProgressTracker) -> HashOutcome {
    let mut outcome = HashOutcome::default();

    for path in paths {
        progress.set_message(path.display().to_string());
        match sha256_file(path, block_size) {
            Ok(hash) => {
                debug!("{}  {}", hash, path.display());
                let size = path.metadata().map(|m| m.len()).unwrap_or(0);
                progress.add_bytes_hashed(size);
                progress.inc_files_hashed();
                outcome.hashes.push((path.clone(), hash));
            }
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path.display(), e);
                progress.inc_files_skipped();
                outcome.skipped.push(SkippedArtifact::new(path, e));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const HELLO_WORLD_SHA256: &str =
        "a948904f2f0f479b8f8197694b30184b0d2ed1c1cd2a1ec0fb85d299a192a447";

    #[test]
    fn test_sha256_of_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hello.txt");
        fs::write(&path, b"hello world\n").unwrap();

        assert_eq!(
            sha256_file(&path, DEFAULT_BLOCK_SIZE).unwrap(),
            HELLO_WORLD_SHA256
        );
    }

    #[test]
    fn test_block_size_does_not_change_digest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.bin");
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        fs::write(&path, &data).unwrap();

        let expected = sha256_bytes(&data);
        assert_eq!(sha256_file(&path, 7).unwrap(), expected);
        assert_eq!(sha256_file(&path, DEFAULT_BLOCK_SIZE).unwrap(), expected);
    }

    #[test]
    fn test_hash_files_skips_missing() {
        let temp = TempDir::new().unwrap();
        let present = temp.path().join("start.elf");
        fs::write(&present, b"hello world\n").unwrap();
        let missing = temp.path().join("fixup.dat");

        let progress = ProgressTracker::hidden(2);
        let outcome = hash_files(&[present.clone(), missing.clone()], DEFAULT_BLOCK_SIZE, &progress);

        assert_eq!(outcome.hashes, vec![(present, HELLO_WORLD_SHA256.to_string())]);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].path, missing);

        let stats = progress.get_stats();
        assert_eq!(stats.files_hashed, 1);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.bytes_hashed, 12);
    }
}
