/// Side length of the board.
pub const BOARD_SIZE: usize = 3;
/// Total number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
/// Number of winning lines: three rows, three columns, two diagonals.
pub const NUM_LINES: usize = 8;

/// Raw bit masks for the winning lines, in scan order: rows top to
/// bottom, columns left to right, main diagonal, anti diagonal.
/// Bit index for a cell is `row * BOARD_SIZE + col`.
pub const LINE_MASKS: [u16; NUM_LINES] = [
    0b000_000_111, // row 0
    0b000_111_000, // row 1
    0b111_000_000, // row 2
    0b001_001_001, // col 0
    0b010_010_010, // col 1
    0b100_100_100, // col 2
    0b100_010_001, // main diagonal (0,0)-(1,1)-(2,2)
    0b001_010_100, // anti diagonal (0,2)-(1,1)-(2,0)
];
