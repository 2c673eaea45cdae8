use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

/// Starts a steady spinner with the given message.
///
/// The caller is responsible for calling `finish_and_clear` on every exit
/// path so the spinner never lingers above the next prompt.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Current UNIX timestamp in seconds.
pub fn now_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Builds the search query restricting matches to track titles.
pub fn track_query(name: &str) -> String {
    format!("track:{}", name.trim())
}
