#![cfg(feature = "std")]

//! Move input parsing.
//!
//! One line of text per move: `"<row> <col>"` with 1-based integers, or
//! `quit`/`exit`/`q` (case-insensitive) to abort the session.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::game::GameState;

/// A successfully parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A move at 0-based (row, col).
    Move(usize, usize),
    /// Abort the session.
    Quit,
}

/// Why a line of input was rejected. Each variant carries the exact
/// re-prompt message shown to the player via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two whitespace-separated tokens.
    Format,
    /// A token failed integer parsing.
    NotANumber,
    /// Coordinate outside 1..=3.
    OutOfRange,
    /// Target cell already holds a mark.
    Occupied,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Format => {
                write!(f, "Please enter two numbers separated by a space (row col)")
            }
            InputError::NotANumber => write!(f, "Please enter valid numbers"),
            InputError::OutOfRange => write!(f, "Please enter numbers between 1 and 3"),
            InputError::Occupied => {
                write!(f, "That position is already taken! Choose another.")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse one raw input line against the current game state.
///
/// Rules, in order: trimmed quit keywords win outright; then token
/// count, integer parsing, 1-based to 0-based conversion, range check,
/// and finally occupancy via [`GameState::is_valid_move`].
pub fn parse_line(line: &str, game: &GameState) -> Result<Command, InputError> {
    let line = line.trim();
    if matches!(
        line.to_ascii_lowercase().as_str(),
        "quit" | "exit" | "q"
    ) {
        return Ok(Command::Quit);
    }

    let mut parts = line.split_whitespace();
    let (first, second) = match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => return Err(InputError::Format),
    };

    let row: i64 = first.parse().map_err(|_| InputError::NotANumber)?;
    let col: i64 = second.parse().map_err(|_| InputError::NotANumber)?;

    // user-facing coordinates are 1-based
    let (row, col) = (row - 1, col - 1);
    let range = 0..BOARD_SIZE as i64;
    if !range.contains(&row) || !range.contains(&col) {
        return Err(InputError::OutOfRange);
    }
    let (row, col) = (row as usize, col as usize);

    if !game.is_valid_move(row, col) {
        return Err(InputError::Occupied);
    }
    Ok(Command::Move(row, col))
}
