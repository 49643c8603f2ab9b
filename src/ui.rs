#![cfg(feature = "std")]

//! Board rendering.

use std::io::{self, Write};

use crate::board::Board;
use crate::config::BOARD_SIZE;

/// Write the board to `w` with 1-based row and column headers:
///
/// ```text
///    1   2   3
/// 1  X | O | X
///   -----------
/// 2  O | X |
///   -----------
/// 3    |   | O
/// ```
///
/// A blank line precedes and follows the board.
pub fn render_board<W: Write>(w: &mut W, board: &Board) -> io::Result<()> {
    writeln!(w, "\n   1   2   3")?;
    for r in 0..BOARD_SIZE {
        writeln!(
            w,
            "{}  {} | {} | {}",
            r + 1,
            board.cell(r, 0).as_char(),
            board.cell(r, 1).as_char(),
            board.cell(r, 2).as_char(),
        )?;
        if r + 1 < BOARD_SIZE {
            writeln!(w, "  -----------")?;
        }
    }
    writeln!(w)
}
