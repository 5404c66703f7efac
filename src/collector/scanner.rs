// file: src/collector/scanner.rs
// description: artifact discovery inside a run root with simple name patterns
// reference: https://docs.rs/walkdir

use crate::config::HashingConfig;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Regular files directly inside `dir` accepted by `keep`, sorted by path.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_files<F>(dir: &Path, keep: F) -> Vec<PathBuf>
where
    F: Fn(&str) -> bool,
{
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_str().is_some_and(&keep))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

pub fn list_files_with_extension(dir: &Path, extension: &str) -> Vec<PathBuf> {
    list_files(dir, |name| {
        Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
    })
}

/// Matches `name` against a pattern with at most one `*` wildcard, e.g. `start*.elf`.
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
        None => name == pattern,
    }
}

/// First `*.img` file in the images directory.
pub fn find_image(images_dir: &Path) -> Option<PathBuf> {
    let image = list_files_with_extension(images_dir, "img").into_iter().next();
    if let Some(image) = &image {
        debug!("Found disk image: {}", image.display());
    }
    image
}

/// Boot files of interest: the expected names that exist plus anything matching the globs.
pub fn collect_boot_files(boot_dir: &Path, hashing: &HashingConfig) -> Vec<PathBuf> {
    let files = list_files(boot_dir, |name| {
        hashing.expected_boot_files.iter().any(|expected| expected == name)
            || hashing
                .boot_globs
                .iter()
                .any(|pattern| matches_pattern(name, pattern))
    });

    debug!(
        "Collected {} boot files from {}",
        files.len(),
        boot_dir.display()
    );
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_matches_pattern() {
        assert!(matches_pattern("start4.elf", "start*.elf"));
        assert!(matches_pattern("start.elf", "start*.elf"));
        assert!(matches_pattern("bootcode.bin", "boot*.bin"));
        assert!(!matches_pattern("start.bin", "start*.elf"));
        assert!(!matches_pattern("start.el", "start*.elf"));
        assert!(matches_pattern("config.txt", "config.txt"));
    }

    #[test]
    fn test_collect_boot_files() {
        let temp = TempDir::new().unwrap();
        for name in ["start.elf", "start4x.elf", "config.txt", "kernel.img", "bootcode.bin"] {
            fs::write(temp.path().join(name), name).unwrap();
        }
        fs::create_dir(temp.path().join("overlays")).unwrap();

        let config = Config::default_config();
        let files = collect_boot_files(temp.path(), &config.hashing);
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(
            names,
            vec!["bootcode.bin", "config.txt", "start.elf", "start4x.elf"]
        );
    }

    #[test]
    fn test_find_image_picks_first_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.img"), "b").unwrap();
        fs::write(temp.path().join("a.img"), "a").unwrap();
        fs::write(temp.path().join("notes.txt"), "n").unwrap();

        let image = find_image(temp.path()).unwrap();
        assert_eq!(image.file_name().unwrap(), "a.img");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        assert!(find_image(Path::new("/nonexistent/images")).is_none());
        assert!(list_files_with_extension(Path::new("/nonexistent"), "txt").is_empty());
    }
}
