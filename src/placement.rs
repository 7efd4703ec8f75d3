//! Random legal fleet layouts.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::CellMask;
use crate::common::RulesError;
use crate::config::{standard_fleet_sizes, BOARD_SIZE};
use crate::coordinate::{Coordinate, Direction};
use crate::fleet::{AnyComposition, ConflictPolicy, Fleet, StandardComposition};
use crate::vessel::Vessel;

/// Whole-fleet restarts before giving up.
pub const MAX_FLEET_ATTEMPTS: usize = 1000;

/// Every legal placement of a vessel of `length` that does not conflict
/// with `placed` under `policy`.
pub fn candidate_placements(
    length: usize,
    placed: &[Vessel],
    policy: ConflictPolicy,
) -> Result<Vec<Vessel>, RulesError> {
    if length == 0 || length > BOARD_SIZE {
        return Err(RulesError::InvalidSize { length });
    }
    let forbidden = placed
        .iter()
        .fold(CellMask::new(), |acc, p| acc | policy.zone(p));
    let mut candidates = Vec::new();
    for row in 0..BOARD_SIZE as i32 {
        for column in 0..BOARD_SIZE as i32 {
            let origin = Coordinate::new(row, column)?;
            for direction in Direction::ALL {
                // off-board placements are simply not candidates
                let Ok(vessel) = Vessel::new(origin, direction, length) else {
                    continue;
                };
                if !vessel.mask().intersects(&forbidden) {
                    candidates.push(vessel);
                }
            }
        }
    }
    Ok(candidates)
}

/// Pick a random placement for each of `sizes`, largest first, restarting
/// the layout on dead ends. The fleet is assembled with a composition rule
/// that accepts any sizes.
pub fn random_fleet<R: Rng>(
    rng: &mut R,
    sizes: &[usize],
    policy: ConflictPolicy,
) -> Result<Fleet, RulesError> {
    let vessels = random_layout(rng, sizes, policy)?;
    Fleet::with_rules(vessels, &AnyComposition, policy)
}

/// Random standard fleet whose vessels do not touch.
pub fn random_standard_fleet<R: Rng>(rng: &mut R) -> Result<Fleet, RulesError> {
    let vessels = random_layout(rng, &standard_fleet_sizes(), ConflictPolicy::Touching)?;
    Fleet::with_rules(vessels, &StandardComposition, ConflictPolicy::Touching)
}

fn random_layout<R: Rng>(
    rng: &mut R,
    sizes: &[usize],
    policy: ConflictPolicy,
) -> Result<Vec<Vessel>, RulesError> {
    let mut order: Vec<usize> = sizes.to_vec();
    order.sort_unstable_by(|a, b| b.cmp(a));

    let mut stuck_on = None;
    for attempt in 0..MAX_FLEET_ATTEMPTS {
        let mut placed: Vec<Vessel> = Vec::with_capacity(order.len());
        stuck_on = None;
        for &length in &order {
            let mut candidates = candidate_placements(length, &placed, policy)?;
            if candidates.is_empty() {
                stuck_on = Some(length);
                break;
            }
            let pick = rng.random_range(0..candidates.len());
            placed.push(candidates.swap_remove(pick));
        }
        match stuck_on {
            None => {
                log::debug!("random layout found after {} attempt(s)", attempt + 1);
                return Ok(placed);
            }
            Some(length) => {
                log::trace!("layout attempt {} stuck on length {}", attempt + 1, length)
            }
        }
    }
    Err(RulesError::UnableToPlace {
        length: stuck_on.unwrap_or(0),
    })
}
