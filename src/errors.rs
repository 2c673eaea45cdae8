use std::path::PathBuf;

use thiserror::Error;

/// Failures that can occur while talking to Spotify or reading the text file.
///
/// None of these are fatal. The lookup layer logs them and carries on with
/// the next menu iteration.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Missing environment variable {0}")]
    MissingCredentials(&'static str),

    #[error("No access token available, authentication did not succeed")]
    MissingToken,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Spotify API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("File has fewer than 3 lines")]
    FileTooShort { path: PathBuf, found: usize },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Decode(err.to_string())
    }
}
