use crate::{
    errors::LookupError,
    types::{FullTrack, TrackResult},
    utils,
};

use super::SpotifyClient;

/// Fetches a track by its Spotify id and maps it into a [`TrackResult`].
///
/// Artist names are joined with `", "`; a missing or empty preview URL is
/// replaced by [`crate::types::NO_PREVIEW`].
pub async fn get_track(client: &SpotifyClient, id: &str) -> Result<TrackResult, LookupError> {
    let path = format!("/tracks/{}", id.trim());

    let pb = utils::spinner("Fetching track details...");
    let result = client.get_json::<FullTrack>(&path, &[]).await;
    pb.finish_and_clear();

    Ok(TrackResult::from(result?))
}
