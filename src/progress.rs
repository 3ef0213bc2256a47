//! Progress bar display for installations

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress display for installations
pub struct ProgressDisplay {
    /// Main progress bar for bundle installation
    bundle_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total bundle count
    pub fn new(total_bundles: u64) -> Self {
        let bundle_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bundle_pb = ProgressBar::new(total_bundles);
        bundle_pb.set_style(bundle_style);

        Self { bundle_pb }
    }

    /// A display that draws nothing
    pub fn hidden(total_bundles: u64) -> Self {
        let bundle_pb = ProgressBar::with_draw_target(
            Some(total_bundles),
            ProgressDrawTarget::hidden(),
        );
        Self { bundle_pb }
    }

    /// Update to show the bundle being installed
    pub fn start_bundle(&self, name: &str, version: &str) {
        self.bundle_pb
            .set_message(format!("Installing {name} {version}..."));
    }

    /// Increment bundle progress
    pub fn inc_bundle(&self) {
        self.bundle_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.bundle_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bundle_pb.abandon();
    }
}
