//! Vessel geometry, strike tracking and conflict detection.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellMask;
use crate::common::{AttackResult, RulesError};
use crate::config::{vessel_class, BOARD_SIZE};
use crate::coordinate::{Coordinate, Direction};

/// Damage state of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselState {
    /// No cell struck.
    Intact,
    /// Some but not all cells struck.
    Damaged,
    /// Every cell struck. Terminal.
    Destroyed,
}

/// A vessel placed on the board, with strikes tracked in a `CellMask`.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    origin: Coordinate,
    direction: Direction,
    cells: Vec<Coordinate>,
    mask: CellMask,
    struck: CellMask,
}

impl Vessel {
    /// Place a vessel of `length` cells starting at `origin` and stepping
    /// along `direction`.
    pub fn new(
        origin: Coordinate,
        direction: Direction,
        length: usize,
    ) -> Result<Self, RulesError> {
        if length == 0 || length > BOARD_SIZE {
            return Err(RulesError::InvalidSize { length });
        }

        let mut cells = Vec::with_capacity(length);
        let mut cell = origin;
        cells.push(cell);
        for _ in 1..length {
            cell = cell.next(direction).map_err(|_| RulesError::InvalidPlacement)?;
            cells.push(cell);
        }

        let mask = cells.iter().copied().collect();
        Ok(Vessel {
            origin,
            direction,
            cells,
            mask,
            struck: CellMask::new(),
        })
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cells the vessel occupies.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells, in order from the origin.
    pub fn occupied_cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Struck cells in row-major order.
    pub fn struck_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.struck.iter()
    }

    /// Occupancy mask of the vessel.
    pub fn mask(&self) -> CellMask {
        self.mask
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.mask.contains(coord)
    }

    pub fn is_destroyed(&self) -> bool {
        self.struck.count_ones() == self.cells.len()
    }

    pub fn has_been_hit(&self) -> bool {
        !self.struck.is_empty()
    }

    pub fn state(&self) -> VesselState {
        if self.is_destroyed() {
            VesselState::Destroyed
        } else if self.has_been_hit() {
            VesselState::Damaged
        } else {
            VesselState::Intact
        }
    }

    /// Strike the vessel at `coord`.
    ///
    /// A destroyed vessel reports `Miss` for every further attack. Striking
    /// the same cell twice records it once.
    pub fn attack(&mut self, coord: Coordinate) -> AttackResult {
        if !self.contains(coord) || self.is_destroyed() {
            return AttackResult::Miss;
        }
        self.struck.insert(coord);
        if self.is_destroyed() {
            AttackResult::Destroyed
        } else {
            AttackResult::Hit
        }
    }

    /// Every cell no other vessel may occupy: the clipped 3×3 neighbourhood
    /// of each occupied cell.
    pub fn blocked_zone(&self) -> CellMask {
        self.cells.iter().flat_map(|c| c.neighborhood()).collect()
    }

    /// Two vessels conflict when they touch, diagonally included, or overlap.
    pub fn conflicts_with(&self, other: &Vessel) -> bool {
        self.blocked_zone().intersects(&other.mask)
    }

    /// Whether the two vessels share a cell.
    pub fn overlaps(&self, other: &Vessel) -> bool {
        self.mask.intersects(&other.mask)
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ class: \"{}\", origin: {:?}, direction: {:?}, length: {}, struck: {} }}",
            vessel_class(self.size()).unwrap_or("Custom"),
            self.origin,
            self.direction,
            self.size(),
            self.struck.count_ones(),
        )
    }
}
