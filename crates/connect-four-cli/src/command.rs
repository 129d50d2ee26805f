//! Console commands typed by the players.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty input")]
    Empty,

    #[error("Columns are numbered from 1")]
    ColumnZero,

    #[error("Unknown command: {0} (type 'help')")]
    Unknown(String),
}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Drop a piece in a zero-based column
    Drop { column: usize },

    /// Start a game; `size` holds raw width/height text when given
    NewGame { size: Option<(String, String)> },

    /// Answer to the restart confirmation prompt
    Confirm(bool),

    /// Re-render the board
    Board,

    Help,

    Quit,
}

impl Command {
    /// Parse a line. Columns are entered one-based, as shown on screen.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandError::Empty);
        };

        if let Ok(number) = first.parse::<usize>() {
            return match number {
                0 => Err(CommandError::ColumnZero),
                n => Ok(Command::Drop { column: n - 1 }),
            };
        }

        match first.to_ascii_lowercase().as_str() {
            "new" | "start" | "restart" => {
                let size = words.next().map(|width| {
                    (
                        width.to_string(),
                        words.next().unwrap_or_default().to_string(),
                    )
                });
                Ok(Command::NewGame { size })
            }
            "y" | "yes" => Ok(Command::Confirm(true)),
            "n" | "no" => Ok(Command::Confirm(false)),
            "board" | "show" => Ok(Command::Board),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(first.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  <column>             drop a piece (columns are numbered from 1)
  new [width height]   start a new game (sizes 1-20, default 7x6)
  board                show the board
  help                 show this help
  quit                 leave the game";
