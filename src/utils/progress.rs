//! Progress indicators for CLI mode

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a progress bar for a batch of host checks
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Invalid progress template")
            .progress_chars("#>-"),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
