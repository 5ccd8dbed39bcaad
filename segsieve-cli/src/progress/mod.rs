//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for segment-by-segment sieving
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

    /// Initialize progress bar over `total_segments`
    pub fn init_segments(&mut self, total_segments: u64) {
        // A single segment finishes in one step, nothing to show
        if self.quiet || total_segments <= 1 {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} segments {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(total_segments);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record how many segments are finished and the running count
    pub fn update(&self, completed_segments: u64, found: u64) {
        if let Some(pb) = &self.progress_bar {
            if pb.position() != completed_segments {
                pb.set_position(completed_segments);
                pb.set_message(format!("found: {found}"));
            }
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_never_draws() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_segments(10);
        assert!(!reporter.is_active());
        reporter.update(3, 100);
        reporter.finish();
    }

    #[test]
    fn test_single_segment_skips_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_segments(1);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_bar_tracks_segments() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_segments(4);
        assert!(reporter.is_active());
        reporter.update(2, 10);
        assert_eq!(
            reporter.progress_bar.as_ref().map(|pb| pb.position()),
            Some(2)
        );
        reporter.finish();
    }
}
