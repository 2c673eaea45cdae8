use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use songlookup::{
    cli, config, fatal, lookup::LookupService, spotify::SpotifyClient, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Text file read by the artist lookup (defaults to random.txt)
    #[clap(long, global = true)]
    file: Option<PathBuf>,

    /// Runs the interactive menu when omitted
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a song by title and show its details
    Song {
        /// Song title
        #[clap(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Search an artist by name and show its id
    Artist {
        /// Artist name
        #[clap(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Look up the artist named in the first lines of the text file
    ArtistFile,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let client = match SpotifyClient::connect(config::Endpoints::from_env()).await {
        Ok(client) => client,
        Err(e) => fatal!("Cannot create Spotify client. Err: {}", e),
    };
    if !client.is_authenticated() {
        warning!("Lookups will fail until ID_SPOTIFY and CLIENT_SPOTIFY_SECRET are valid");
    }

    let service = LookupService::new(client);
    let text_file = config::text_file_path(cli.file.as_deref());

    match cli.command {
        None => cli::menu(service, text_file).await,
        Some(Command::Song { name }) => cli::song(&service, &name.join(" ")).await,
        Some(Command::Artist { name }) => cli::artist(&service, &name.join(" ")).await,
        Some(Command::ArtistFile) => cli::artist_file(&service, text_file).await,
        Some(Command::Completions(_)) => {}
    }
}
