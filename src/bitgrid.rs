//! A fixed-size N×N cell set packed into an unsigned integer.
//!
//! `no_std` friendly and allocation free. Bit index for a cell is
//! `row * N + col`. The game only instantiates `BitGrid<u16, 3>`, but the
//! type stays generic over the backing integer so the board size is a
//! compile-time property rather than a scattering of magic numbers.

use core::ops::{BitAnd, BitOr};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An N×N set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the grid (`N * N`).
    const GRID_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::GRID_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::GRID_BITS) - T::one()
        }
    }

    /// Create an empty grid (all bits cleared).
    #[inline]
    pub fn new() -> Self {
        BitGrid { bits: T::zero() }
    }

    /// Number of occupied cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cells are occupied.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Reads the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Marks the cell at (row, col) occupied.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * N + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Returns true when every cell of `other` is also occupied in `self`.
    #[inline]
    pub fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitGridError> {
        if row >= N || col >= N {
            Err(BitGridError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Consumes the grid and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a grid from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitGrid {
            bits: raw & Self::mask(),
        }
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Union of two grids.
impl<T, const N: usize> BitOr for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitGrid::from_raw(self.into_raw() | rhs.into_raw())
    }
}

/// Intersection of two grids.
impl<T, const N: usize> BitAnd for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitGrid::from_raw(self.into_raw() & rhs.into_raw())
    }
}
