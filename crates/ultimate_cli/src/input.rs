//! Parsing of prompt lines into moves and commands.

use derive_more::{Display, From};
use strum::IntoEnumIterator;
use ultimate_tictactoe::{IllegalMove, Move, Position};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play a move.
    Play(Move),
    /// List legal moves.
    Moves,
    /// Start a fresh game.
    Reset,
    /// Show the input help.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum InputError {
    /// Nothing but whitespace.
    #[display("Enter a move or a command (type help)")]
    #[from(ignore)]
    Empty,

    /// A token that is neither a position nor a command.
    #[display("Not a position or command: {_0:?}")]
    #[from(ignore)]
    Unrecognized(String),

    /// Too many or too few tokens for a move.
    #[display("A move is a board and a cell, e.g. \"4 0\" or \"center top-left\"")]
    #[from(ignore)]
    Arity,

    /// A number outside 0-8.
    #[display("{_0}")]
    Index(IllegalMove),
}

impl std::error::Error for InputError {}

/// Text shown for `help`.
pub const HELP: &str = "\
Moves: board then cell, each 0-8 in reading order (0 = top-left, 8 = bottom-right).
  4 0            board 4 (center), cell 0 (top-left)
  40             same, without the space
  center top-left
Commands: moves, reset, help, quit";

/// Numbers and labels of the nine positions, three per line.
pub fn legend() -> String {
    let entries: Vec<String> = Position::iter()
        .map(|pos| format!("{} {:<14}", pos.to_u8(), pos.label()))
        .collect();
    entries
        .chunks(3)
        .map(|row| row.concat().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses one prompt line.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    match line.to_ascii_lowercase().as_str() {
        "moves" | "m" => return Ok(Input::Moves),
        "reset" | "restart" | "new" => return Ok(Input::Reset),
        "help" | "h" | "?" => return Ok(Input::Help),
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [pair] if pair.len() == 2 && pair.bytes().all(|b| b.is_ascii_digit()) => {
            let bytes = pair.as_bytes();
            Ok(Input::Play(Move::from_indices(
                bytes[0] - b'0',
                bytes[1] - b'0',
            )?))
        }
        [board, cell] => Ok(Input::Play(Move::new(
            parse_position(board)?,
            parse_position(cell)?,
        ))),
        [single]
            if single.parse::<u32>().is_err()
                && Position::from_label_or_number(single).is_none() =>
        {
            Err(InputError::Unrecognized((*single).to_string()))
        }
        _ => Err(InputError::Arity),
    }
}

fn parse_position(token: &str) -> Result<Position, InputError> {
    if let Ok(n) = token.parse::<u8>() {
        return Ok(Position::try_from(n)?);
    }
    Position::from_label_or_number(token)
        .ok_or_else(|| InputError::Unrecognized(token.to_string()))
}
