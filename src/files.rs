use std::path::Path;

use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};

use crate::{errors::LookupError, types::FileLines};

/// Number of leading lines consumed from the lookup text file.
pub const LINES_TO_READ: usize = 3;

/// Reads the first three lines of a UTF-8 text file.
///
/// Lines are pulled one at a time from a buffered reader and reading stops
/// as soon as three lines were collected, so the rest of the file is never
/// touched. Empty lines count as lines; `\n` and `\r\n` terminators are
/// stripped. The file handle is dropped when this function returns, whether
/// it succeeded, hit the end of the file early, or failed mid-read.
///
/// # Errors
///
/// - [`LookupError::FileTooShort`] if the file ends before three lines
/// - [`LookupError::Io`] if the file cannot be opened or read (including
///   invalid UTF-8)
///
/// # Example
///
/// ```
/// let lines = read_first_three_lines(Path::new("random.txt")).await?;
/// println!("{} / {}", lines.artist(), lines.fallback());
/// ```
pub async fn read_first_three_lines(path: &Path) -> Result<FileLines, LookupError> {
    let file = File::open(path).await?;
    let mut lines = BufReader::new(file).lines();

    let mut collected: Vec<String> = Vec::with_capacity(LINES_TO_READ);
    while collected.len() < LINES_TO_READ {
        match lines.next_line().await? {
            Some(line) => collected.push(line),
            None => break,
        }
    }

    let found = collected.len();
    let first: [String; LINES_TO_READ] = collected.try_into().map_err(|_| {
        LookupError::FileTooShort {
            path: path.to_path_buf(),
            found,
        }
    })?;

    Ok(FileLines::new(first))
}
