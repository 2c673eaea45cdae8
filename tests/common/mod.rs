#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::HashMap,
    ops::Deref,
    path::{Path, PathBuf},
};

use songlookup::{errors::LookupError, spotify::Catalog, types::TrackResult};

/// In-memory catalog recording every call it receives.
#[derive(Default)]
pub struct FakeCatalog {
    pub track_ids: HashMap<String, String>,
    pub tracks: HashMap<String, TrackResult>,
    pub artist_ids: HashMap<String, String>,
    pub fail_status: Option<u16>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_track(mut self, name: &str, id: &str, track: TrackResult) -> Self {
        self.track_ids.insert(name.to_string(), id.to_string());
        self.tracks.insert(id.to_string(), track);
        self
    }

    pub fn with_artist(mut self, name: &str, id: &str) -> Self {
        self.artist_ids.insert(name.to_string(), id.to_string());
        self
    }

    pub fn failing(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), LookupError> {
        self.calls.borrow_mut().push(call);
        match self.fail_status {
            Some(status) => Err(LookupError::Api {
                status,
                message: "Service unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Catalog for FakeCatalog {
    async fn search_track(&self, name: &str) -> Result<Option<String>, LookupError> {
        self.record(format!("search_track:{}", name))?;
        Ok(self.track_ids.get(name).cloned())
    }

    async fn track(&self, id: &str) -> Result<TrackResult, LookupError> {
        self.record(format!("track:{}", id))?;
        self.tracks.get(id).cloned().ok_or(LookupError::Api {
            status: 400,
            message: "invalid id".to_string(),
        })
    }

    async fn search_artist(&self, name: &str) -> Result<Option<String>, LookupError> {
        self.record(format!("search_artist:{}", name))?;
        Ok(self.artist_ids.get(name).cloned())
    }
}

pub fn track(artist: &str, song: &str, preview_link: &str, album: &str) -> TrackResult {
    TrackResult {
        artist: artist.to_string(),
        song: song.to_string(),
        preview_link: preview_link.to_string(),
        album: album.to_string(),
    }
}

/// File in the OS temp dir that is removed again when dropped.
pub struct TempFile(PathBuf);

impl Deref for TempFile {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for TempFile {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        // already gone when a test removed it itself
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Writes `contents` to a file in the OS temp dir unique to this process.
pub fn temp_file(name: &str, contents: &str) -> TempFile {
    let path = std::env::temp_dir().join(format!("songlookup-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("write temp file");
    TempFile(path)
}
