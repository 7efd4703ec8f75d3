//! Common types for the rules engine: construction errors and attack results.

/// Outcome of an attack against a vessel or fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// No living vessel occupies the coordinate.
    Miss,
    /// A vessel segment was struck and the vessel is still afloat.
    Hit,
    /// The strike completed the vessel.
    Destroyed,
}

/// Errors returned when constructing coordinates, vessels or fleets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Row or column lies outside `[0, BOARD_SIZE)`.
    OutOfBounds { row: i32, column: i32 },
    /// Vessel length is zero or larger than the board.
    InvalidSize { length: usize },
    /// Vessel runs off the board before reaching its length.
    InvalidPlacement,
    /// Vessel sizes do not satisfy the composition rule.
    IncompleteFleet,
    /// Vessels at indices `first` and `second` touch or overlap.
    ConflictingPlacement { first: usize, second: usize },
    /// Random placement found no legal position for a vessel of `length`.
    UnableToPlace { length: usize },
}

impl core::fmt::Display for RulesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RulesError::OutOfBounds { row, column } => {
                write!(f, "Coordinate ({}, {}) is not on the board", row, column)
            }
            RulesError::InvalidSize { length } => write!(f, "Invalid vessel length {}", length),
            RulesError::InvalidPlacement => write!(f, "Vessel placement runs off the board"),
            RulesError::IncompleteFleet => {
                write!(f, "This set of vessels is not a complete fleet")
            }
            RulesError::ConflictingPlacement { first, second } => {
                write!(f, "Vessels {} and {} touch or overlap", first, second)
            }
            RulesError::UnableToPlace { length } => {
                write!(f, "Unable to place vessel of length {}", length)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RulesError {}
