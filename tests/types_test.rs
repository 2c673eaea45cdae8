use serde_json::json;
use songlookup::{
    errors::LookupError,
    spotify::api_error,
    types::{
        AccessToken, ArtistOutcome, ArtistSearchResponse, Credentials, FileLines, FullTrack,
        TokenResponse, TrackResult, TrackSearchResponse, NO_PREVIEW,
    },
};

fn full_track(preview_url: serde_json::Value) -> FullTrack {
    serde_json::from_value(json!({
        "id": "abc123",
        "name": "Imagine",
        "artists": [{ "name": "John Lennon", "id": "a1" }],
        "album": { "name": "Imagine", "id": "al1" },
        "preview_url": preview_url,
        "popularity": 80
    }))
    .unwrap()
}

#[test]
fn test_track_without_preview_uses_sentinel() {
    let result = TrackResult::from(full_track(json!(null)));

    assert_eq!(result.preview_link, NO_PREVIEW);
    assert_eq!(result.song, "Imagine");
    assert_eq!(result.album, "Imagine");
}

#[test]
fn test_track_missing_preview_field_uses_sentinel() {
    let track: FullTrack = serde_json::from_value(json!({
        "id": "abc123",
        "name": "Imagine",
        "artists": [{ "name": "John Lennon" }],
        "album": { "name": "Imagine" }
    }))
    .unwrap();

    assert_eq!(TrackResult::from(track).preview_link, NO_PREVIEW);
}

#[test]
fn test_track_empty_preview_uses_sentinel() {
    let result = TrackResult::from(full_track(json!("")));

    assert_eq!(result.preview_link, NO_PREVIEW);
}

#[test]
fn test_track_keeps_preview_url() {
    let url = "https://p.scdn.co/mp3-preview/abcdef";
    let result = TrackResult::from(full_track(json!(url)));

    assert_eq!(result.preview_link, url);
}

#[test]
fn test_track_joins_artist_names() {
    let track: FullTrack = serde_json::from_value(json!({
        "id": "t1",
        "name": "Under Pressure",
        "artists": [{ "name": "Queen" }, { "name": "David Bowie" }],
        "album": { "name": "Hot Space" },
        "preview_url": null
    }))
    .unwrap();

    assert_eq!(TrackResult::from(track).artist, "Queen, David Bowie");
}

#[test]
fn test_track_result_display() {
    let result = TrackResult::from(full_track(json!(null)));

    assert_eq!(
        result.to_string(),
        "{\n  artist: \"John Lennon\",\n  song: \"Imagine\",\n  preview_link: \"No preview available\",\n  album: \"Imagine\"\n}"
    );
}

#[test]
fn test_decode_track_search() {
    let res: TrackSearchResponse = serde_json::from_value(json!({
        "tracks": {
            "href": "https://api.spotify.com/v1/search?query=track%3AImagine&type=track",
            "items": [
                { "id": "abc123", "name": "Imagine", "popularity": 80 },
                { "id": "def456", "name": "Imagine - Remastered" }
            ],
            "limit": 1,
            "total": 912
        }
    }))
    .unwrap();

    assert_eq!(res.tracks.items[0].id, "abc123");
    assert_eq!(res.tracks.total, Some(912));
}

#[test]
fn test_decode_empty_artist_search() {
    let res: ArtistSearchResponse = serde_json::from_value(json!({
        "artists": { "items": [], "total": 0 }
    }))
    .unwrap();

    assert!(res.artists.items.is_empty());
}

#[test]
fn test_token_expiry() {
    let res: TokenResponse = serde_json::from_value(json!({
        "access_token": "BQC-token",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .unwrap();
    let token = AccessToken::from_response(res, 1_000);

    assert!(!token.is_expired_at(1_000));
    assert!(!token.is_expired_at(4_599));
    assert!(token.is_expired_at(4_600));
}

#[test]
fn test_api_error_envelope() {
    let body = br#"{"error":{"status":401,"message":"Invalid access token"}}"#;

    match api_error(401, body) {
        LookupError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid access token");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_accounts_error_envelope() {
    let body = br#"{"error":"invalid_client","error_description":"Invalid client secret"}"#;

    let err = api_error(400, body);

    assert_eq!(
        err.to_string(),
        "Spotify API error (400): invalid_client: Invalid client secret"
    );
}

#[test]
fn test_error_without_body_uses_reason() {
    let err = api_error(503, b"");

    assert_eq!(
        err.to_string(),
        "Spotify API error (503): Service Unavailable"
    );
}

#[test]
fn test_credentials_debug_hides_secret() {
    let creds = Credentials {
        client_id: "client".to_string(),
        client_secret: "s3cr3t".to_string(),
    };

    let debug = format!("{:?}", creds);

    assert!(debug.contains("client"));
    assert!(!debug.contains("s3cr3t"));
}

#[test]
fn test_file_lines_accessors() {
    let lines = FileLines::new([
        "Radiohead".to_string(),
        "Unknown:".to_string(),
        "ignored".to_string(),
    ]);

    assert_eq!(lines.artist(), "Radiohead");
    assert_eq!(lines.fallback(), "Unknown:");
    assert_eq!(lines.reserved(), "ignored");
}

#[test]
fn test_artist_outcome_display() {
    let not_found = ArtistOutcome::NotFound {
        message: "Unknown: Radiohead".to_string(),
    };

    assert_eq!(not_found.to_string(), "Unknown: Radiohead");
}
