use minesweep_core::{Coord, Coord2};
use thiserror::Error;

pub const USAGE: &str =
    "commands: r ROW COL (reveal), f ROW COL (flag), h (hint), n (new round), q (quit)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Hint,
    NewGame,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}")]
    Unknown(String),
    #[error("Expected a row and a column")]
    MissingCoords,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Unexpected trailing input {0:?}")]
    Trailing(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "h" | "hint" => Self::Hint,
            "n" | "new" => Self::NewGame,
            "q" | "quit" => Self::Quit,
            _ => return Err(ParseCommandError::Unknown(verb.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseCommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, ParseCommandError> {
    let mut next = || -> Result<Coord, ParseCommandError> {
        let word = words.next().ok_or(ParseCommandError::MissingCoords)?;
        word.parse()
            .map_err(|_| ParseCommandError::InvalidCoord(word.to_string()))
    };
    Ok((next()?, next()?))
}
