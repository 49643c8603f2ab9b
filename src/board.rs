//! Game board state, tracking each player's marks in a `BitGrid`.

use crate::bitgrid::BitGrid;
use crate::common::{Cell, Mark};
use crate::config::{BOARD_SIZE, LINE_MASKS, NUM_CELLS};

type BG = BitGrid<u16, BOARD_SIZE>;

/// The 3×3 board: one grid of X marks, one of O marks. The two grids
/// are disjoint because marks only land on empty cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    xs: BG,
    os: BG,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            xs: BG::new(),
            os: BG::new(),
        }
    }

    /// Contents of the cell at (row, col). Out-of-range coordinates
    /// read as `Empty`.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if self.xs.get(row, col).unwrap_or(false) {
            Cell::X
        } else if self.os.get(row, col).unwrap_or(false) {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// Grid of cells occupied by the given mark.
    pub fn mark_grid(&self, mark: Mark) -> BG {
        match mark {
            Mark::X => self.xs,
            Mark::O => self.os,
        }
    }

    /// True iff (row, col) is on the board and the cell is empty.
    /// Total: out-of-range coordinates return false rather than panic.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        !self.xs.get(row, col).unwrap_or(false) && !self.os.get(row, col).unwrap_or(false)
    }

    /// Place `mark` at (row, col) if the move is valid. Returns false
    /// and leaves the board untouched otherwise.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }
        // bounds already checked above
        match mark {
            Mark::X => self.xs.set(row, col).is_ok(),
            Mark::O => self.os.set(row, col).is_ok(),
        }
    }

    /// True iff all cells are occupied.
    pub fn is_full(&self) -> bool {
        (self.xs | self.os).count_ones() == NUM_CELLS
    }

    /// Scan the winning lines in fixed order (rows, columns, main
    /// diagonal, anti diagonal) and return the mark holding the first
    /// fully occupied line, if any.
    pub fn winner(&self) -> Option<Mark> {
        for mask in LINE_MASKS {
            let line = BG::from_raw(mask);
            if self.xs.contains(line) {
                return Some(Mark::X);
            }
            if self.os.contains(line) {
                return Some(Mark::O);
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
