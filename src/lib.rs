//! Apple Music Playlist backup library
//!
//! This library backs up the playlists of an Apple Music library to JSON snapshot
//! files and recreates playlists from those snapshots. It includes modules for API
//! communication, CLI operations, configuration management and the snapshot file
//! format.
//!
//! # Modules
//!
//! - `apple` - Apple Music API client and the `LibraryApi` seam used by the pipelines
//! - `cli` - Command implementations (backup, restore, show)
//! - `config` - Credential loading from the config file and environment
//! - `error` - The `AmpError` type and its exit code mapping
//! - `snapshot` - Reading and writing snapshot files
//! - `types` - Wire and snapshot data structures
//! - `utils` - Pure helpers for naming and track mapping
//!
//! # Example
//!
//! ```
//! use amp::{apple::AppleMusicClient, cli, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> amp::Res<()> {
//!     let config = Config::load(None).await?;
//!     let client = AppleMusicClient::new(&config)?;
//!     cli::backup(&client, std::path::Path::new(".")).await?;
//!     Ok(())
//! }
//! ```

pub mod apple;
pub mod cli;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod types;
pub mod utils;

pub use error::AmpError;

/// Result alias used throughout the crate.
///
/// Every fallible operation reports an [`AmpError`] so the binary can map the
/// failure kind to an exit code in one place.
pub type Res<T> = std::result::Result<T, AmpError>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
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
///
/// # Example
///
/// ```
/// success!("Wrote {} snapshot files", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr.
///
/// Unlike a panic this does not terminate the program; the caller decides the
/// exit status (see [`AmpError::exit_code`]).
///
/// # Example
///
/// ```
/// error!("Failed to create playlist: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// # Example
///
/// ```
/// warning!("Cannot load environment. Err: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
