//! Iteration progress reporting for optimizer passes

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ITERATION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Displays optimizer pass progress for a single image
///
/// Quiet mode and zero-iteration runs produce no output at all.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter for the given number of optimizer passes
    pub fn new(iterations: usize, quiet: bool) -> Self {
        let bar = (!quiet && iterations > 0).then(|| {
            let pb = ProgressBar::new(iterations as u64);
            pb.set_style(ITERATION_STYLE.clone());
            pb.set_message("clustering");
            pb
        });
        Self { bar }
    }

    /// Report one completed optimizer pass
    pub fn tick(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the display once all passes are complete
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
