//! Core game state: board plus turn tracking.
//!
//! `apply_move` deliberately does not switch players or evaluate the
//! winner. The session loop performs those as separate steps because a
//! win must be detected before deciding whether to hand the turn over.

use crate::board::Board;
use crate::common::{Mark, Outcome};

/// State of a single game in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Mark,
}

impl GameState {
    /// Start a fresh game: empty board, X to move.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current: Mark::X,
        }
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// Evaluate terminal conditions. A win is checked strictly before a
    /// draw, so a move that completes a line while filling the last
    /// cell reports `Win`, never `Draw`.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.board.winner() {
            Outcome::Win(mark)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// True iff (row, col) is an in-range empty cell and the game has
    /// not already ended. Total over all inputs.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        !self.outcome().is_terminal() && self.board.is_valid_move(row, col)
    }

    /// Place the current player's mark at (row, col). Returns false and
    /// changes nothing if the move is invalid or the game is over. Does
    /// not switch players; see the module docs.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }
        self.board.place(row, col, self.current)
    }

    /// The mark holding a full line, if any.
    pub fn check_winner(&self) -> Option<Mark> {
        self.board.winner()
    }

    /// True iff all nine cells are occupied.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Hand the turn to the other player. Always legal.
    pub fn switch_player(&mut self) {
        self.current = self.current.other();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
