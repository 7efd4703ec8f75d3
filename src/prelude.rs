//! Commonly used types for ease of import.

pub use crate::{
    AttackResult, CompositionRule, ConflictPolicy, Coordinate, Direction, Fleet, RulesError,
    Vessel, VesselState, BOARD_SIZE,
};

pub use crate::placement::{random_fleet, random_standard_fleet};
