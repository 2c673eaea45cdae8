//! # CLI Module
//!
//! Command-line layer of the song lookup tool. It hosts the interactive menu
//! and the one-shot commands exposed as subcommands, and delegates the
//! actual work to [`crate::lookup::LookupService`].
//!
//! ## Commands
//!
//! - [`menu`] - Interactive loop: song search, text file lookup, exit
//! - [`song`] - Looks up a single song by title
//! - [`artist`] - Resolves a single artist id by name
//! - [`artist_file`] - Runs the text file driven artist lookup once
//!
//! ## Usage Patterns
//!
//! ```bash
//! songlookup                         # Interactive menu
//! songlookup song "Imagine"          # One song lookup
//! songlookup artist Radiohead        # One artist lookup
//! songlookup --file names.txt artist-file
//! ```

pub mod input;
pub mod menu;

use std::path::PathBuf;

use crate::{lookup::LookupService, spotify::Catalog};

pub use input::{ConsoleInput, LineSource, ScriptedInput};
pub use menu::{Menu, MenuChoice, MenuState};

/// Runs the interactive menu on standard input until the user exits.
pub async fn menu<C: Catalog>(service: LookupService<C>, text_file: PathBuf) {
    let mut menu = Menu::new(service, ConsoleInput::new(), text_file);
    menu.run().await;
}

pub async fn song<C: Catalog>(service: &LookupService<C>, name: &str) {
    service.lookup_song(name).await;
}

pub async fn artist<C: Catalog>(service: &LookupService<C>, name: &str) {
    service.search_artist_by_name(name).await;
}

pub async fn artist_file<C: Catalog>(service: &LookupService<C>, text_file: PathBuf) {
    service.text_file_artist_lookup(&text_file).await;
}
