use std::path::{Path, PathBuf};

use crate::{error, info, lookup::LookupService, spotify::Catalog, warning};

use super::input::LineSource;

pub const MENU_TEXT: &str = "\n1. Enter Song Name to Search:\n2. Run Text File Command:\n3. Exit\n";
pub const CHOICE_PROMPT: &str = "Enter the number you want to run: ";
pub const INVALID_CHOICE: &str = "Please enter a valid number.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Song,
    TextFile,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Maps a line of user input to a menu entry.
    ///
    /// Only the leading integer counts: `"1.5"` picks Song and `"3 exit"`
    /// picks Exit. Input without a leading integer, or one outside 1..=3,
    /// is [`MenuChoice::Invalid`].
    pub fn parse(input: &str) -> Self {
        match leading_integer(input) {
            Some(1) => MenuChoice::Song,
            Some(2) => MenuChoice::TextFile,
            Some(3) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

/// Parses an optional sign followed by ASCII digits at the start of `input`,
/// after leading whitespace. Everything after the digits is ignored.
fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits_len == 0 {
        return None;
    }

    trimmed[..sign_len + digits_len].parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Idle,
    Dispatching(MenuChoice),
    Exited,
}

impl MenuState {
    /// Advances the state machine.
    ///
    /// From `Idle` the input line decides the next state: Exit (or the end of
    /// input) leads to `Exited`, every other choice, including an invalid
    /// one, is dispatched. A finished dispatch always returns to `Idle`.
    /// `Exited` is terminal.
    pub fn next(self, input: Option<&str>) -> MenuState {
        match self {
            MenuState::Idle => match input.map(MenuChoice::parse) {
                None | Some(MenuChoice::Exit) => MenuState::Exited,
                Some(choice) => MenuState::Dispatching(choice),
            },
            MenuState::Dispatching(_) => MenuState::Idle,
            MenuState::Exited => MenuState::Exited,
        }
    }
}

/// Interactive text menu driving the lookups.
pub struct Menu<C, I> {
    service: LookupService<C>,
    input: I,
    text_file: PathBuf,
}

impl<C: Catalog, I: LineSource> Menu<C, I> {
    pub fn new(service: LookupService<C>, input: I, text_file: PathBuf) -> Self {
        Menu {
            service,
            input,
            text_file,
        }
    }

    pub fn service(&self) -> &LookupService<C> {
        &self.service
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn text_file(&self) -> &Path {
        &self.text_file
    }

    /// Shows the menu and runs one lookup per iteration until the user
    /// picks Exit.
    ///
    /// Each iteration waits for the lookup to complete before prompting
    /// again. Running out of input, or failing to read it, is treated like
    /// Exit so a closed stdin cannot spin the loop.
    pub async fn run(&mut self) {
        let mut state = MenuState::Idle;

        loop {
            state = match state {
                MenuState::Idle => {
                    println!("{}", MENU_TEXT);
                    let line = match self.input.read_line(CHOICE_PROMPT).await {
                        Ok(Some(line)) => Some(line),
                        Ok(None) => {
                            info!("End of input, exiting.");
                            None
                        }
                        Err(e) => {
                            error!("Cannot read menu choice: {}", e);
                            None
                        }
                    };
                    state.next(line.as_deref())
                }
                MenuState::Dispatching(choice) => {
                    self.dispatch(choice).await;
                    state.next(None)
                }
                MenuState::Exited => return,
            };
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) {
        match choice {
            MenuChoice::Song => {
                self.service.song_lookup(&mut self.input).await;
            }
            MenuChoice::TextFile => {
                self.service.text_file_artist_lookup(&self.text_file).await;
            }
            MenuChoice::Invalid => warning!("{}", INVALID_CHOICE),
            // Exit never reaches dispatch, see MenuState::next
            MenuChoice::Exit => {}
        }
    }
}
