// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for a summarize run
// reference: uses indicatif for progress bars and tracks hashing metrics

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub files_hashed: usize,
    pub files_skipped: usize,
    pub bytes_hashed: u64,
    pub duration_secs: u64,
}

impl RunStats {
    pub fn bytes_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.bytes_hashed as f64 / self.duration_secs as f64
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_hashed + self.files_skipped;
        if total == 0 {
            return 0.0;
        }
        (self.files_hashed as f64 / total as f64) * 100.0
    }

    pub fn format_summary(&self) -> String {
        format!(
            "{} hashed, {} skipped ({:.1}% read), {} bytes in {}s ({:.0} B/s)",
            self.files_hashed.to_string().green().bold(),
            if self.files_skipped > 0 {
                self.files_skipped.to_string().yellow().bold()
            } else {
                self.files_skipped.to_string().normal()
            },
            self.success_rate(),
            self.bytes_hashed,
            self.duration_secs,
            self.bytes_per_second()
        )
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    files_hashed: AtomicUsize,
    files_skipped: AtomicUsize,
    bytes_hashed: AtomicU64,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_files: usize, colored: bool) -> Self {
        Self::build(MultiProgress::new(), total_files, colored)
    }

    /// Tracks counts without drawing anything.
    pub fn hidden(total_files: usize) -> Self {
        Self::build(
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            total_files,
            false,
        )
    }

    fn build(multi_progress: MultiProgress, total_files: usize, colored: bool) -> Self {
        let main_bar = create_progress_bar(&multi_progress, total_files as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            files_hashed: AtomicUsize::new(0),
            files_skipped: AtomicUsize::new(0),
            bytes_hashed: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn inc_files_hashed(&self) {
        self.files_hashed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
    }

    pub fn inc_files_skipped(&self) {
        self.files_skipped.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
    }

    pub fn add_bytes_hashed(&self, bytes: u64) {
        self.bytes_hashed.fetch_add(bytes, Ordering::SeqCst);
    }

    pub fn set_message(&self, message: String) {
        self.detail_bar.set_message(message);
    }

    pub fn finish(&self) {
        self.main_bar.finish_and_clear();
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> RunStats {
        RunStats {
            files_hashed: self.files_hashed.load(Ordering::SeqCst),
            files_skipped: self.files_skipped.load(Ordering::SeqCst),
            bytes_hashed: self.bytes_hashed.load(Ordering::SeqCst),
            duration_secs: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" }));
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stats_calculations() {
        let mut stats = RunStats::default();
        stats.files_hashed = 9;
        stats.files_skipped = 1;
        stats.duration_secs = 2;
        stats.bytes_hashed = 1000;

        assert_eq!(stats.bytes_per_second(), 500.0);
        assert!((stats.success_rate() - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_run_stats_zero_duration() {
        let stats = RunStats::default();
        assert_eq!(stats.bytes_per_second(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_format_summary_reports_rates() {
        colored::control::set_override(false);
        let stats = RunStats {
            files_hashed: 3,
            files_skipped: 1,
            bytes_hashed: 4096,
            duration_secs: 2,
        };

        assert_eq!(
            stats.format_summary(),
            "3 hashed, 1 skipped (75.0% read), 4096 bytes in 2s (2048 B/s)"
        );
        colored::control::unset_override();
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::hidden(3);

        tracker.inc_files_hashed();
        tracker.add_bytes_hashed(1024);
        tracker.inc_files_skipped();

        let stats = tracker.get_stats();
        assert_eq!(stats.files_hashed, 1);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.bytes_hashed, 1024);
    }
}
