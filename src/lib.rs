//! Playlist interleaving CLI library.
//!
//! Authenticates against the Spotify Web API, loads one of the user's playlists
//! and rewrites its track order so that tracks added by different contributors
//! alternate round-robin instead of clustering together.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Environment loading and credential handling
//! - `error` - Error taxonomy shared by every layer
//! - `server` - Temporary local HTTP server receiving the OAuth redirect
//! - `sort` - Fetch, group, interleave and write-back pipeline plus its worker
//! - `spotify` - Spotify Web API session and endpoint calls
//! - `types` - Wire types and domain types
//! - `utils` - Small helpers (OAuth state, chunk planning, selection parsing)
//!
//! # Example
//!
//! ```
//! use plweave::sort;
//!
//! let groups = sort::group_by_contributor(entries);
//! let ordering = sort::interleave(&groups);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod sort;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{Error, RemoteServiceError};

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Fetching tracks...");
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1. Only the CLI layer uses this; the
/// library returns errors instead.
///
/// ```
/// error!("Connection failed: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
