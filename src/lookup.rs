//! Lookup operations offered by the menu and the one-shot commands.
//!
//! Every operation here is a boundary: failures coming from the catalog or
//! the file system are logged with some context and turned into `None`, so
//! a failed lookup never ends the program.

use std::path::Path;

use crate::{
    cli::input::LineSource,
    error,
    errors::LookupError,
    files, info,
    spotify::Catalog,
    types::{ArtistOutcome, TrackResult},
    warning,
};

pub const SONG_PROMPT: &str = "Enter the song name: ";

pub struct LookupService<C> {
    catalog: C,
}

impl<C: Catalog> LookupService<C> {
    pub fn new(catalog: C) -> Self {
        LookupService { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Resolves the id of the first track matching `name`.
    ///
    /// Logs the id when found, or a not-found notice otherwise. Search
    /// failures are logged and reported as `None`.
    pub async fn search_track_by_name(&self, name: &str) -> Option<String> {
        match self.catalog.search_track(name).await {
            Ok(Some(id)) => {
                info!("Song ID for \"{}\": {}", name, id);
                Some(id)
            }
            Ok(None) => {
                info!("No song found with the name \"{}\"", name);
                None
            }
            Err(e) => {
                error!("Something went wrong when searching for the song! {}", e);
                None
            }
        }
    }

    /// Fetches and prints the details of a track.
    pub async fn get_track_by_id(&self, id: &str) -> Option<TrackResult> {
        match self.catalog.track(id).await {
            Ok(track) => {
                println!("{}", track);
                Some(track)
            }
            Err(e) => {
                error!("An error occurred when fetching the song details: {}", e);
                None
            }
        }
    }

    /// Resolves the id of the first artist matching `name`.
    pub async fn search_artist_by_name(&self, name: &str) -> Option<String> {
        match self.catalog.search_artist(name).await {
            Ok(Some(id)) => {
                info!("Artist ID for {}: {}", name, id);
                Some(id)
            }
            Ok(None) => {
                info!("No artist found with the name \"{}\"", name);
                None
            }
            Err(e) => {
                error!("Something went wrong when searching for the artist! {}", e);
                None
            }
        }
    }

    /// Searches a song by title and prints its details.
    ///
    /// The track is only fetched when the search produced an id; the
    /// not-found case has already been reported by the search.
    pub async fn lookup_song(&self, name: &str) -> Option<TrackResult> {
        let id = self.search_track_by_name(name).await?;
        self.get_track_by_id(&id).await
    }

    /// Asks for a song name and looks it up.
    pub async fn song_lookup<I: LineSource>(&self, input: &mut I) -> Option<TrackResult> {
        let name = match input.read_line(SONG_PROMPT).await {
            Ok(Some(name)) => name,
            Ok(None) => {
                warning!("No song name given.");
                return None;
            }
            Err(e) => {
                error!("Cannot read song name: {}", e);
                return None;
            }
        };

        let name = name.trim();
        if name.is_empty() {
            warning!("Please enter a song name.");
            return None;
        }

        self.lookup_song(name).await
    }

    /// Looks up the artist named on the first line of the text file.
    ///
    /// On a match the artist id is printed. Without a match the second line
    /// and the artist name are printed, separated by a space. The third line
    /// is read but not used. Any failure along the way is logged as is.
    pub async fn text_file_artist_lookup(&self, path: &Path) -> Option<ArtistOutcome> {
        match self.resolve_text_file_artist(path).await {
            Ok(outcome) => {
                println!("{}", outcome);
                Some(outcome)
            }
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }

    async fn resolve_text_file_artist(&self, path: &Path) -> Result<ArtistOutcome, LookupError> {
        let lines = files::read_first_three_lines(path).await?;
        let name = lines.artist().to_string();

        let outcome = match self.catalog.search_artist(&name).await? {
            Some(id) => ArtistOutcome::Found { name, id },
            None => ArtistOutcome::NotFound {
                message: format!("{} {}", lines.fallback(), name),
            },
        };

        Ok(outcome)
    }
}
