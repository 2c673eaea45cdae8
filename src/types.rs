use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown instead of a preview URL when Spotify has none for a track.
pub const NO_PREVIEW: &str = "No preview available";

/// Client id and secret of the registered Spotify application.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl AccessToken {
    pub fn from_response(res: TokenResponse, obtained_at: u64) -> Self {
        AccessToken {
            access_token: res.access_token,
            token_type: res.token_type,
            expires_in: res.expires_in,
            obtained_at,
        }
    }

    /// Client-credentials tokens are never refreshed; once this returns true
    /// every request will be rejected until the process is restarted.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.obtained_at.saturating_add(self.expires_in)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSearchResponse {
    pub tracks: Paging<SearchItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Paging<SearchItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleAlbum {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullTrack {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<SimpleArtist>,
    pub album: SimpleAlbum,
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub status: u16,
    pub message: String,
}

/// Error envelopes returned by the Web API and the accounts service.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Api {
        error: ApiErrorDetail,
    },
    Auth {
        error: String,
        error_description: Option<String>,
    },
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match self {
            ErrorBody::Api { error } => error.message.clone(),
            ErrorBody::Auth {
                error,
                error_description: Some(description),
            } => format!("{}: {}", error, description),
            ErrorBody::Auth { error, .. } => error.clone(),
        }
    }
}

/// Track details as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackResult {
    pub artist: String,
    pub song: String,
    pub preview_link: String,
    pub album: String,
}

impl From<FullTrack> for TrackResult {
    fn from(track: FullTrack) -> Self {
        TrackResult {
            artist: track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<&str>>()
                .join(", "),
            song: track.name,
            preview_link: track
                .preview_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| NO_PREVIEW.to_string()),
            album: track.album.name,
        }
    }
}

impl fmt::Display for TrackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "  artist: {:?},", self.artist)?;
        writeln!(f, "  song: {:?},", self.song)?;
        writeln!(f, "  preview_link: {:?},", self.preview_link)?;
        writeln!(f, "  album: {:?}", self.album)?;
        write!(f, "}}")
    }
}

/// The first three lines of the lookup text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLines([String; 3]);

impl FileLines {
    pub fn new(lines: [String; 3]) -> Self {
        FileLines(lines)
    }

    /// Line 1: the artist name to search for.
    pub fn artist(&self) -> &str {
        &self.0[0]
    }

    /// Line 2: text printed in front of the artist name when nothing matches.
    pub fn fallback(&self) -> &str {
        &self.0[1]
    }

    /// Line 3 is read but not used by any lookup.
    pub fn reserved(&self) -> &str {
        &self.0[2]
    }

    pub fn into_inner(self) -> [String; 3] {
        self.0
    }
}

/// Result of the text-file driven artist lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistOutcome {
    Found { name: String, id: String },
    NotFound { message: String },
}

impl fmt::Display for ArtistOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtistOutcome::Found { name, id } => write!(f, "Artist ID for {}: {}", name, id),
            ArtistOutcome::NotFound { message } => write!(f, "{}", message),
        }
    }
}
