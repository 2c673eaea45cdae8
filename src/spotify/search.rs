use crate::{
    errors::LookupError,
    types::{ArtistSearchResponse, TrackSearchResponse},
    utils,
};

use super::SpotifyClient;

/// Searches for tracks whose title matches `name` and returns the id of the
/// first match.
///
/// Uses the `track:` field filter so artist or album names containing the
/// term do not produce matches. Returns `Ok(None)` when the search yields no
/// items.
pub async fn search_track(
    client: &SpotifyClient,
    name: &str,
) -> Result<Option<String>, LookupError> {
    let query = utils::track_query(name);

    let pb = utils::spinner("Searching tracks...");
    let result = client
        .get_json::<TrackSearchResponse>(
            "/search",
            &[("q", query.as_str()), ("type", "track"), ("limit", "1")],
        )
        .await;
    pb.finish_and_clear();

    Ok(result?.tracks.items.into_iter().next().map(|t| t.id))
}

/// Searches for artists matching `name` and returns the id of the first
/// match, if any.
pub async fn search_artist(
    client: &SpotifyClient,
    name: &str,
) -> Result<Option<String>, LookupError> {
    let pb = utils::spinner("Searching artists...");
    let result = client
        .get_json::<ArtistSearchResponse>(
            "/search",
            &[("q", name.trim()), ("type", "artist"), ("limit", "1")],
        )
        .await;
    pb.finish_and_clear();

    Ok(result?.artists.items.into_iter().next().map(|a| a.id))
}
