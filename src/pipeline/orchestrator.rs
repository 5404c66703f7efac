// file: src/pipeline/orchestrator.rs
// description: coordinates artifact collection, hashing, comparison and indicator extraction
// reference: orchestrates the summarize workflow over one run root

use crate::baseline::{BaselineLoader, compare};
use crate::collector::{
    collect_boot_files, collect_strings, find_image, hash_files, load_binwalk_summary,
};
use crate::config::Config;
use crate::error::Result;
use crate::exporter::JsonExporter;
use crate::extractor::IndicatorExtractor;
use crate::models::{Imaging, Summary};
use crate::pipeline::progress::{ProgressTracker, RunStats};
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug)]
pub struct SummarizeOutcome {
    pub summary: Summary,
    pub summary_path: PathBuf,
    pub compare_path: Option<PathBuf>,
    pub stats: RunStats,
}

pub struct Summarizer {
    config: Config,
    show_progress: bool,
    colored: bool,
}

impl Summarizer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            show_progress: false,
            colored: false,
        }
    }

    pub fn with_progress(mut self, colored: bool) -> Self {
        self.show_progress = true;
        self.colored = colored;
        self
    }

    pub fn run(&self, root: &Path) -> Result<SummarizeOutcome> {
        Validator::require_directory(root)?;

        info!("Summarizing artifacts under {}", root.display());
        let layout = &self.config.layout;
        let hashing = &self.config.hashing;
        let mut summary = Summary::new(root);
        let exporter = JsonExporter::new(layout.analysis(root))?;

        let image = find_image(&layout.images(root));
        let boot_dir = layout.boot_copy(root);
        let boot_paths = if boot_dir.is_dir() {
            collect_boot_files(&boot_dir, hashing)
        } else {
            info!("No boot partition copy at {}", boot_dir.display());
            Vec::new()
        };

        let progress = self.tracker(boot_paths.len() + usize::from(image.is_some()));

        if let Some(image) = image {
            info!("Hashing disk image {}", image.display());
            let outcome = hash_files(std::slice::from_ref(&image), hashing.block_size, &progress);
            summary.imaging = Some(Imaging {
                image: image.display().to_string(),
                sha256: outcome.hashes.into_iter().next().map(|(_, hash)| hash),
            });
            summary.skipped.extend(outcome.skipped);
        }

        if boot_dir.is_dir() {
            let outcome = hash_files(&boot_paths, hashing.block_size, &progress);
            exporter.write_hash_listing(&outcome.hashes)?;

            for (path, hash) in &outcome.hashes {
                if let Some(name) = path.file_name() {
                    summary
                        .boot_files
                        .insert(name.to_string_lossy().to_string(), hash.clone());
                }
            }
            summary.skipped.extend(outcome.skipped);
            info!("Hashed {} boot file(s)", summary.boot_files.len());
        }

        let stats = progress.get_stats();
        progress.finish();

        let baselines = BaselineLoader::new(self.config.baseline.dirs.clone()).load();
        summary.skipped.extend(baselines.skipped.iter().cloned());
        summary.baseline_compare = compare(&summary.boot_files, &baselines.merged());

        let discrepancies = summary.discrepancies().count();
        if discrepancies > 0 {
            warn!(
                "{} boot file(s) without a matching baseline hash",
                discrepancies
            );
        }

        let collected = collect_strings(&layout.strings(root));
        summary.skipped.extend(collected.skipped.iter().cloned());
        if !collected.is_empty() {
            let extractor = IndicatorExtractor::new(self.config.extraction.min_domain_length);
            summary.indicators = extractor.extract(&collected.text);
            info!(
                "Extracted {} distinct indicator(s) from {} strings dump(s)",
                summary.indicators.total(),
                collected.files_read.len()
            );
        }

        let carving = load_binwalk_summary(&layout.binwalk(root));
        summary.binwalk_summary = carving.entries;
        summary.skipped.extend(carving.skipped);

        let summary_path = exporter.write_summary(&summary)?;
        let compare_path = if summary.baseline_compare.is_empty() {
            None
        } else {
            Some(exporter.write_baseline_compare(&summary.baseline_compare)?)
        };

        Ok(SummarizeOutcome {
            summary,
            summary_path,
            compare_path,
            stats,
        })
    }

    fn tracker(&self, total: usize) -> ProgressTracker {
        if self.show_progress {
            ProgressTracker::with_color(total, self.colored)
        } else {
            ProgressTracker::hidden(total)
        }
    }
}
