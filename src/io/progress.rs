//! Progress display for batch style rendering

use crate::pattern::mode::PatternMode;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Styles: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across a batch of styles
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the bar for the number of styles to render
    pub fn initialize(&mut self, mode_count: usize) {
        let bar = ProgressBar::new(mode_count as u64);
        bar.set_style(BAR_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Show which style is being rendered
    pub fn start_mode(&self, mode: PatternMode) {
        if let Some(bar) = &self.bar {
            bar.set_message(mode.to_string());
        }
    }

    /// Advance past a completed style
    pub fn complete_mode(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("All styles rendered");
        }
    }
}
