//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-file detection runs
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar; a single document gets none
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::new(total_files);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Update progress for a scanned file
    pub fn file_completed(&self, filename: &str, prices: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename}: {prices} prices"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self, total_prices: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("Found {total_prices} prices"));
        }
    }
}
