//! Progress display for batch generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks documents written during a batch
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar over `document_count` documents
    pub fn new(document_count: usize) -> Self {
        let bar = ProgressBar::new(document_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Show the document currently being generated
    pub fn start_document(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Mark the current document as written
    pub fn complete_document(&self) {
        self.bar.inc(1);
    }

    /// Number of documents completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
