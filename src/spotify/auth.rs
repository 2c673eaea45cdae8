use reqwest::Client;

use crate::{
    config,
    errors::LookupError,
    types::{AccessToken, TokenResponse},
    utils,
};

pub use crate::types::Credentials;

impl Credentials {
    /// Reads `ID_SPOTIFY` and `CLIENT_SPOTIFY_SECRET` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingCredentials`] naming the first variable
    /// that is unset or empty.
    pub fn from_env() -> Result<Self, LookupError> {
        let client_id = config::spotify_client_id()
            .ok_or(LookupError::MissingCredentials(config::CLIENT_ID_VAR))?;
        let client_secret = config::spotify_client_secret()
            .ok_or(LookupError::MissingCredentials(config::CLIENT_SECRET_VAR))?;

        Ok(Credentials {
            client_id,
            client_secret,
        })
    }
}

/// Requests an access token with the OAuth 2.0 client-credentials grant.
///
/// The application authenticates with its own id and secret, so the token
/// only grants access to public catalog data. The returned token carries the
/// time it was obtained to allow expiry checks; it is never refreshed.
///
/// # Arguments
///
/// * `http` - Shared HTTP client
/// * `token_url` - Accounts service token endpoint
/// * `credentials` - Application client id and secret
///
/// # Errors
///
/// - [`LookupError::Transport`] on network failures
/// - [`LookupError::Api`] when the accounts service rejects the credentials
/// - [`LookupError::Authentication`] when the response carries no token
pub async fn authenticate(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken, LookupError> {
    let pb = utils::spinner("Requesting access token...");
    let result = request_token(http, token_url, credentials).await;
    pb.finish_and_clear();

    let token = result?;
    if token.access_token.is_empty() {
        return Err(LookupError::Authentication(
            "token endpoint returned an empty access token".to_string(),
        ));
    }

    Ok(AccessToken::from_response(token, utils::now_timestamp()))
}

async fn request_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<TokenResponse, LookupError> {
    let response = http
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    super::decode(response).await
}
