//! Spotify Song Lookup CLI Library
//!
//! This library provides the pieces of a small interactive tool that looks up
//! tracks and artists in the Spotify catalog. It authenticates once with the
//! client-credentials grant, resolves song and artist ids by name, fetches
//! track details, and can derive an artist query from the first lines of a
//! local text file.
//!
//! # Modules
//!
//! - `cli` - Interactive menu, line input sources and one-shot commands
//! - `config` - Configuration management and environment variables
//! - `errors` - Error taxonomy shared by all lookups
//! - `files` - Reading the leading lines of the lookup text file
//! - `lookup` - Lookup operations with logging and graceful failure
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use songlookup::{config, lookup::LookupService, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::connect(config::Endpoints::from_env()).await?;
//!     let service = LookupService::new(client);
//!     service.lookup_song("Imagine").await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod files;
pub mod lookup;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Requesting access token...");
/// info!("Reading {}", path.display());
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

/// Prints an error message with a red exclamation mark to stderr.
///
/// Lookups never abort the program, so this macro only reports the failure
/// and returns control to the caller. Use [`fatal!`] for errors that must
/// terminate the process.
///
/// # Example
///
/// ```
/// error!("An error occurred when fetching the song details: {}", e);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output and immediately terminates the program
/// with exit code 1. Only startup sequencing failures use this macro.
///
/// # Example
///
/// ```
/// fatal!("Cannot build HTTP client: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! fatal {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a failed authentication or an
/// invalid menu choice.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
