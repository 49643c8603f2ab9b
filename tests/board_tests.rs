use tictactoe::{Board, Cell, Mark, BOARD_SIZE};

/// The eight winning lines as coordinate triples, in the documented
/// scan order.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(board.cell(r, c), Cell::Empty);
            assert!(board.is_valid_move(r, c));
        }
    }
    assert!(!board.is_full());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_place_and_cell() {
    let mut board = Board::new();
    assert!(board.place(1, 2, Mark::X));
    assert_eq!(board.cell(1, 2), Cell::X);
    assert!(board.place(0, 0, Mark::O));
    assert_eq!(board.cell(0, 0), Cell::O);

    // occupied cell rejected, board unchanged
    assert!(!board.place(1, 2, Mark::O));
    assert_eq!(board.cell(1, 2), Cell::X);
}

#[test]
fn test_invalid_move_rejections() {
    let mut board = Board::new();
    board.place(1, 1, Mark::X);

    assert!(!board.is_valid_move(3, 0));
    assert!(!board.is_valid_move(0, 3));
    assert!(!board.is_valid_move(3, 3));
    assert!(!board.is_valid_move(usize::MAX, 0));
    assert!(!board.is_valid_move(1, 1)); // occupied

    // every in-range empty cell accepted
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            assert_eq!(board.is_valid_move(r, c), (r, c) != (1, 1));
        }
    }

    // out-of-range placement is a no-op
    assert!(!board.place(3, 3, Mark::O));
    assert_eq!(board.cell(3, 3), Cell::Empty);
}

#[test]
fn test_winner_all_eight_lines() {
    for mark in [Mark::X, Mark::O] {
        for line in LINES {
            let mut board = Board::new();
            for (r, c) in line {
                assert!(board.place(r, c, mark));
            }
            assert_eq!(board.winner(), Some(mark), "line {:?} for {:?}", line, mark);
        }
    }
}

#[test]
fn test_two_cells_of_a_line_do_not_win() {
    for line in LINES {
        let mut board = Board::new();
        board.place(line[0].0, line[0].1, Mark::X);
        board.place(line[1].0, line[1].1, Mark::X);
        assert_eq!(board.winner(), None);
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    // X X O across row 0
    let mut board = Board::new();
    board.place(0, 0, Mark::X);
    board.place(0, 1, Mark::X);
    board.place(0, 2, Mark::O);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_full_board_no_winner() {
    // X O X / O X O / O X O: full, no uniform line
    let mut board = Board::new();
    let layout = [
        [Mark::X, Mark::O, Mark::X],
        [Mark::O, Mark::X, Mark::O],
        [Mark::O, Mark::X, Mark::O],
    ];
    for (r, row) in layout.iter().enumerate() {
        for (c, &mark) in row.iter().enumerate() {
            assert!(board.place(r, c, mark));
        }
    }
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_is_full_over_partial_boards() {
    let mut board = Board::new();
    let marks = [Mark::X, Mark::O];
    for i in 0..9 {
        assert!(!board.is_full(), "board with {} cells is not full", i);
        board.place(i / 3, i % 3, marks[i % 2]);
    }
    assert!(board.is_full());
}
