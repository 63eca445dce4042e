//! Batch progress display for tile generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a batch of tile jobs
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar for `job_count` jobs
    pub fn new(job_count: usize) -> Self {
        let bar = ProgressBar::new(job_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Show the job currently being generated
    pub fn start_job(&self, name: &str) {
        self.bar.set_message(name.to_owned());
    }

    /// Count a finished job
    pub fn complete_job(&self) {
        self.bar.inc(1);
    }

    /// Count a job whose output already existed
    pub fn skip_job(&self, name: &str) {
        self.bar.println(format!("Skipping: {name} (output exists)"));
        self.bar.inc(1);
    }

    /// Close the bar with a summary
    pub fn finish(&self) {
        self.bar.finish_with_message("all tiles generated");
    }
}
