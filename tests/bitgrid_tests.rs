use tictactoe::{BitGrid, BitGridError};

#[test]
fn test_get_set_count() {
    let mut grid = BitGrid::<u16, 3>::new();
    assert!(grid.is_empty());
    assert_eq!(grid.count_ones(), 0);

    grid.set(1, 1).unwrap();
    assert!(grid.get(1, 1).unwrap());
    assert!(!grid.get(0, 0).unwrap());

    grid.set(2, 0).unwrap();
    assert_eq!(grid.count_ones(), 2);
    assert!(!grid.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut grid = BitGrid::<u16, 3>::new();
    assert_eq!(
        grid.get(3, 0).unwrap_err(),
        BitGridError::OutOfBounds { row: 3, col: 0 }
    );
    assert_eq!(
        grid.set(0, 3).unwrap_err(),
        BitGridError::OutOfBounds { row: 0, col: 3 }
    );
}

#[test]
fn test_contains_and_union() {
    // row 0 plus the centre cell
    let mut grid = BitGrid::<u16, 3>::new();
    grid.set(0, 0).unwrap();
    grid.set(0, 1).unwrap();
    grid.set(0, 2).unwrap();
    grid.set(1, 1).unwrap();

    let row0 = BitGrid::<u16, 3>::from_raw(0b000_000_111);
    let col0 = BitGrid::<u16, 3>::from_raw(0b001_001_001);
    assert!(grid.contains(row0));
    assert!(!grid.contains(col0));

    let union = grid | col0;
    assert_eq!(union.count_ones(), 6);
    assert!(union.contains(col0));
}

#[test]
fn test_from_raw_masks_upper_bits() {
    // bits above N*N must not survive construction
    let grid = BitGrid::<u16, 3>::from_raw(0xFFFF);
    assert_eq!(grid.count_ones(), 9);
    assert_eq!(grid.into_raw(), 0b111_111_111);
}
