//! Board coordinates and stepping directions.

use core::fmt;

use crate::common::RulesError;
use crate::config::BOARD_SIZE;

/// Direction in which consecutive vessel cells are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Column increases.
    Horizontal,
    /// Row increases.
    Vertical,
    /// Row and column increase together.
    Diagonal,
}

impl Direction {
    /// All directions, in declaration order.
    pub const ALL: [Direction; 3] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];

    /// `(row, column)` delta of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }
}

/// A validated cell on the `BOARD_SIZE × BOARD_SIZE` board.
///
/// Ordering is row-major, so coordinates sort the way the board reads.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(i32, i32)", into = "(i32, i32)")
)]
pub struct Coordinate {
    row: u8,
    column: u8,
}

impl Coordinate {
    /// Create a coordinate, failing with `OutOfBounds` when off the board.
    pub fn new(row: i32, column: i32) -> Result<Self, RulesError> {
        if !Self::is_on_board(row, column) {
            return Err(RulesError::OutOfBounds { row, column });
        }
        Ok(Coordinate {
            row: row as u8,
            column: column as u8,
        })
    }

    /// Returns `true` if `(row, column)` lies on the board.
    pub const fn is_on_board(row: i32, column: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && column >= 0 && column < BOARD_SIZE as i32
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn column(&self) -> usize {
        self.column as usize
    }

    /// The coordinate one step along `direction`.
    pub fn next(&self, direction: Direction) -> Result<Self, RulesError> {
        let (dr, dc) = direction.delta();
        Coordinate::new(self.row as i32 + dr, self.column as i32 + dc)
    }

    /// Every on-board cell within Chebyshev distance 1, the cell itself included.
    pub fn neighborhood(&self) -> impl Iterator<Item = Coordinate> {
        let (row, column) = (self.row as i32, self.column as i32);
        (row - 1..=row + 1)
            .flat_map(move |r| (column - 1..=column + 1).map(move |c| (r, c)))
            .filter_map(|(r, c)| Coordinate::new(r, c).ok())
    }

    /// Position in the row-major bit layout used by `BitBoard`.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.column as usize
    }

    /// Inverse of `index`; callers guarantee `idx < BOARD_SIZE * BOARD_SIZE`.
    #[inline]
    pub(crate) fn from_index(idx: usize) -> Self {
        Coordinate {
            row: (idx / BOARD_SIZE) as u8,
            column: (idx % BOARD_SIZE) as u8,
        }
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {} | Column {}", self.row, self.column)
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = RulesError;

    fn try_from((row, column): (i32, i32)) -> Result<Self, Self::Error> {
        Coordinate::new(row, column)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.row as i32, c.column as i32)
    }
}
