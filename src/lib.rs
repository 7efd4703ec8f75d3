#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod coordinate;
mod fleet;
#[cfg(feature = "std")]
pub mod logging;
pub mod placement;
pub mod prelude;
mod vessel;

pub use bitboard::{BitBoard, BitBoardError, CellMask, Cells};
pub use common::*;
pub use config::*;
pub use coordinate::{Coordinate, Direction};
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::{random_fleet, random_standard_fleet};
pub use vessel::{Vessel, VesselState};
