use std::{
    collections::VecDeque,
    io::{self, Write},
};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// A source of user input, read one line at a time.
#[allow(async_fn_in_trait)]
pub trait LineSource {
    /// Shows `prompt` and waits for the next line, returned without its line
    /// terminator. Returns `Ok(None)` once the input is exhausted.
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads lines from standard input, blocking the current lookup until the
/// user presses enter.
pub struct ConsoleInput {
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleInput {
    pub fn new() -> Self {
        ConsoleInput {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for ConsoleInput {
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        self.lines.next_line().await
    }
}

/// Replays a fixed list of answers; useful for scripting and tests.
///
/// Every prompt that was shown is recorded in order.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineSource for ScriptedInput {
    async fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
