//! A board-sized bit set keyed by `Coordinate`.
//!
//! The grid is `BOARD_SIZE × BOARD_SIZE` packed row-major into an unsigned
//! integer `T`. Since every `Coordinate` is already on the board, reads and
//! writes cannot fail. The width of `T` is checked at compile time by the
//! infallible constructors and at run time by `try_new`.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;

/// Errors returned by bitboard construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// The board needs more bits than `T` provides.
    SizeTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed T::BITS={}", cells, capacity)
            }
        }
    }
}

/// Set of board cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// Bitboard wide enough for the configured board.
pub type CellMask = BitBoard<u128>;

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits (`BOARD_SIZE * BOARD_SIZE`).
    pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

    /// Compile-time guard: every cell needs a bit in `T`.
    const FITS: () = assert!(
        BOARD_SIZE * BOARD_SIZE <= mem::size_of::<T>() * 8,
        "BitBoard storage type is too narrow for the board"
    );

    /// Create an empty board. Fails to compile when `T` is too narrow.
    ///
    /// ```compile_fail
    /// let _ = battleship_rules::BitBoard::<u64>::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: `Err(SizeTooLarge)` if the board does not fit in `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge {
                cells: Self::CELLS,
                capacity,
            })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `coord` is in the set.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        ((self.bits >> coord.index()) & T::one()) != T::zero()
    }

    /// Add `coord`; returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let bit = T::one() << coord.index();
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        fresh
    }

    /// Whether the two sets share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Iterator over the cells in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<T> {
        Cells {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T> Default for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Coordinate> for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for coord in iter {
            board.insert(coord);
        }
        board
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", any::type_name::<T>())?;
        for idx in 0..Self::CELLS {
            let bit = if self.contains(Coordinate::from_index(idx)) {
                '■'
            } else {
                '□'
            };
            write!(f, "{} ", bit)?;
            if (idx + 1) % BOARD_SIZE == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells of a bitboard.
#[derive(Clone, Copy)]
pub struct Cells<T> {
    bits: T,
    idx: usize,
}

impl<T> Iterator for Cells<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < BOARD_SIZE * BOARD_SIZE {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::from_index(idx));
            }
        }
        None
    }
}

impl<T> BitAnd for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T> BitOr for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T> BitOrAssign for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
