//! # Spotify Integration Module
//!
//! This module is the integration layer between the lookup tool and the
//! Spotify Web API. It handles the client-credentials authentication, the
//! HTTP communication and the mapping of Spotify's error envelopes into
//! [`LookupError`].
//!
//! ## Architecture
//!
//! ```text
//! Menu / one-shot commands
//!          ↓
//! Lookup Service (logging, graceful failure)
//!          ↓
//! Catalog trait  ←  SpotifyClient
//!     ├── Authentication (client-credentials grant)
//!     ├── Search (tracks, artists)
//!     └── Tracks (full track details)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Token Lifecycle
//!
//! [`SpotifyClient::connect`] requests a token exactly once and keeps it for
//! the lifetime of the client. There is no refresh: when authentication
//! fails the client is still returned, and every catalog call then fails
//! with [`LookupError::MissingToken`].
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials grant
//! - `GET /search?type=track` - Track id by title
//! - `GET /search?type=artist` - Artist id by name
//! - `GET /tracks/{id}` - Track details

pub mod auth;
pub mod search;
pub mod tracks;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::Endpoints,
    error,
    errors::LookupError,
    success,
    types::{AccessToken, ErrorBody, TrackResult},
    utils, warning,
};

/// Read-only operations the lookup layer needs from a music catalog.
///
/// [`SpotifyClient`] is the production implementation; tests provide
/// in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Id of the first track whose title matches `name`.
    async fn search_track(&self, name: &str) -> Result<Option<String>, LookupError>;

    /// Full details of the track with the given id.
    async fn track(&self, id: &str) -> Result<TrackResult, LookupError>;

    /// Id of the first artist matching `name`.
    async fn search_artist(&self, name: &str) -> Result<Option<String>, LookupError>;
}

pub struct SpotifyClient {
    http: Client,
    endpoints: Endpoints,
    token: Option<AccessToken>,
}

impl SpotifyClient {
    /// Creates a client without a token.
    pub fn new(endpoints: Endpoints) -> Result<Self, LookupError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http(http, endpoints))
    }

    /// Creates a client without a token on top of a preconfigured HTTP client.
    pub fn with_http(http: Client, endpoints: Endpoints) -> Self {
        SpotifyClient {
            http,
            endpoints,
            token: None,
        }
    }

    /// Creates a client and authenticates it with the credentials from the
    /// environment.
    ///
    /// Authentication failures are logged and leave the client without a
    /// token; only a failure to build the HTTP client is returned as an
    /// error.
    pub async fn connect(endpoints: Endpoints) -> Result<Self, LookupError> {
        let mut client = Self::new(endpoints)?;

        match auth::Credentials::from_env() {
            Ok(credentials) => client.login(&credentials).await,
            Err(e) => error!("An error occurred when retrieving the access token: {}", e),
        }

        Ok(client)
    }

    /// Requests a token once with the given credentials.
    ///
    /// On failure the error is logged and the client stays without a token.
    /// A client that already holds a token keeps it.
    pub async fn login(&mut self, credentials: &auth::Credentials) {
        if self.token.is_some() {
            return;
        }

        match auth::authenticate(&self.http, &self.endpoints.token_url, credentials).await {
            Ok(token) => {
                success!("Authenticated with Spotify");
                self.token = Some(token);
            }
            Err(e) => error!("An error occurred when retrieving the access token: {}", e),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn bearer(&self) -> Result<&str, LookupError> {
        let token = self.token.as_ref().ok_or(LookupError::MissingToken)?;
        if token.is_expired_at(utils::now_timestamp()) {
            warning!("Access token has expired, restart songlookup to authenticate again");
        }
        Ok(&token.access_token)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let token = self.bearer()?;
        let url = format!("{}{}", self.endpoints.api_url.trim_end_matches('/'), path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        decode(response).await
    }
}

impl Catalog for SpotifyClient {
    async fn search_track(&self, name: &str) -> Result<Option<String>, LookupError> {
        search::search_track(self, name).await
    }

    async fn track(&self, id: &str) -> Result<TrackResult, LookupError> {
        tracks::get_track(self, id).await
    }

    async fn search_artist(&self, name: &str) -> Result<Option<String>, LookupError> {
        search::search_artist(self, name).await
    }
}

/// Decodes a successful JSON body, or turns an error status into
/// [`LookupError::Api`] using Spotify's error envelope when present.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, LookupError> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&body)?);
    }

    Err(api_error(status.as_u16(), &body))
}

pub fn api_error(status: u16, body: &[u8]) -> LookupError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(envelope) => envelope.message(),
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text
            }
        }
    };

    LookupError::Api { status, message }
}
