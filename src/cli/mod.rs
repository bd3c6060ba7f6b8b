//! # CLI Module
//!
//! The operator-facing layer: collects credentials and a playlist choice,
//! renders progress and reports outcomes. It is the only place that exits the
//! process on errors; the library below returns them.
//!
//! ## Commands
//!
//! - [`playlists`] - authenticate and list the current user's playlists
//! - [`sort`] - authenticate, pick a playlist and interleave it by contributor
//!
//! ```text
//! CLI Layer (this module)
//!     ↓
//! Sort pipeline (worker + orchestrator)
//!     ↓
//! Spotify session
//! ```
//!
//! ## Usage
//!
//! ```bash
//! plweave playlists                  # numbered list of your playlists
//! plweave sort --index 3             # interleave playlist #3
//! plweave sort --name "Road Trip"    # pick by name
//! plweave sort --dry-run             # prompt, then preview without writing
//! ```

mod auth;
mod playlists;
mod sort;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use auth::connect;
pub use playlists::playlists;
pub use sort::sort;

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
