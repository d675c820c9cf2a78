//! Batch progress display for multi-file runs
//!
//! Small batches get one progress line per file; large batches collapse
//! into a single batch bar to avoid terminal spam.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates progress display for batch operations
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    /// Stores (`filename`, `done`) per started file for the rolling window
    file_states: Vec<(String, bool)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Initialize progress display based on file count
    pub fn initialize(&mut self, file_count: usize) {
        // Batch mode for large file sets
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new_spinner();
            pb.set_style(FILE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register a file as being processed
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.file_states.len() {
            self.file_states.resize(index + 1, (String::new(), false));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (display_name, false);
        }
        self.update_bars();
    }

    /// Mark a file as completed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.file_states.get_mut(index) {
            state.1 = true;
        }
        self.update_bars();
    }

    /// Number of files registered so far
    pub fn started_files(&self) -> usize {
        self.file_states.iter().filter(|(name, _)| !name.is_empty()).count()
    }

    /// Number of files marked complete
    pub fn completed_files(&self) -> usize {
        self.file_states.iter().filter(|(_, done)| *done).count()
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the last N started files in the individual bars.
    fn update_bars(&self) {
        let active: Vec<(String, bool)> = self
            .file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .cloned()
            .collect();

        let start_index = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_index..).unwrap_or(&[]);

        for (bar_index, (name, done)) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_index) {
                if *done {
                    bar.set_message(format!("✓ {name}"));
                } else {
                    bar.set_message(name.clone());
                }
            }
        }

        for bar_index in visible.len()..self.file_bars.len() {
            if let Some(bar) = self.file_bars.get(bar_index) {
                bar.set_message(String::new());
            }
        }
    }
}
