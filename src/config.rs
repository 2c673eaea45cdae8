//! Configuration management for the Spotify Song Lookup tool.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the Spotify
//! client credentials, the API endpoints and the path of the lookup text file.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{
    env,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Environment variable holding the Spotify client id.
pub const CLIENT_ID_VAR: &str = "ID_SPOTIFY";
/// Environment variable holding the Spotify client secret.
pub const CLIENT_SECRET_VAR: &str = "CLIENT_SPOTIFY_SECRET";

const API_URL_VAR: &str = "SPOTIFY_API_URL";
const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";
const TEXT_FILE_VAR: &str = "SONGLOOKUP_TEXT_FILE";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_TEXT_FILE: &str = "random.txt";

/// Loads environment variables from `.env` files.
///
/// The `.env` file in the current directory is read first. Afterwards the
/// file located in the platform-specific local data directory under
/// `songlookup/.env` is read, if it exists. Variables that are already set
/// are never overwritten, so the process environment always wins, followed
/// by the local `.env`.
///
/// # Directory Structure
///
/// The fallback `.env` file is looked up in:
/// - Linux: `~/.local/share/songlookup/.env`
/// - macOS: `~/Library/Application Support/songlookup/.env`
/// - Windows: `%LOCALAPPDATA%/songlookup/.env`
///
/// # Errors
///
/// Missing files are not an error. This function only returns an error
/// string when one of the files exists but cannot be read or parsed.
///
/// # Example
///
/// ```
/// use songlookup::{config, warning};
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         warning!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(dotenv::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(format!("Cannot load .env: {}", e)),
    }

    let path = data_env_path();
    if async_fs::metadata(&path).await.is_ok() {
        dotenv::from_path(&path)
            .map_err(|e| format!("Cannot load {}: {}", path.display(), e))?;
    }

    Ok(())
}

/// Location of the fallback `.env` file in the local data directory.
pub fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songlookup/.env");
    path
}

/// Returns the Spotify API client id, if set and not empty.
pub fn spotify_client_id() -> Option<String> {
    non_empty_var(CLIENT_ID_VAR)
}

/// Returns the Spotify API client secret, if set and not empty.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Option<String> {
    non_empty_var(CLIENT_SECRET_VAR)
}

/// Base URLs of the two Spotify services the tool talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Web API base, e.g. `https://api.spotify.com/v1`
    pub api_url: String,
    /// Accounts service token endpoint
    pub token_url: String,
}

impl Endpoints {
    /// Reads `SPOTIFY_API_URL` and `SPOTIFY_API_TOKEN_URL`, falling back to
    /// the public Spotify endpoints.
    pub fn from_env() -> Self {
        Endpoints {
            api_url: non_empty_var(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token_url: non_empty_var(TOKEN_URL_VAR)
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

/// Resolves the path of the text file used by the artist lookup.
///
/// An explicit path (from the command line) takes precedence over the
/// `SONGLOOKUP_TEXT_FILE` variable, which takes precedence over `random.txt`.
pub fn text_file_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    non_empty_var(TEXT_FILE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TEXT_FILE))
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
