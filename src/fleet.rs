//! Fleet assembly, composition rules and bombardment dispatch.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellMask;
use crate::common::{AttackResult, RulesError};
use crate::config::STANDARD_FLEET;
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

/// Decides whether a multiset of vessel sizes forms a complete fleet.
pub trait CompositionRule {
    fn is_complete(&self, sizes: &[usize]) -> bool;
}

/// Exactly the sizes listed in `STANDARD_FLEET`, nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardComposition;

impl CompositionRule for StandardComposition {
    fn is_complete(&self, sizes: &[usize]) -> bool {
        let expected: usize = STANDARD_FLEET.iter().map(|&(_, count)| count).sum();
        sizes.len() == expected
            && STANDARD_FLEET
                .iter()
                .all(|&(length, count)| sizes.iter().filter(|&&s| s == length).count() == count)
    }
}

/// Accepts any set of vessels.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyComposition;

impl CompositionRule for AnyComposition {
    fn is_complete(&self, _sizes: &[usize]) -> bool {
        true
    }
}

impl<F> CompositionRule for F
where
    F: Fn(&[usize]) -> bool,
{
    fn is_complete(&self, sizes: &[usize]) -> bool {
        self(sizes)
    }
}

/// Which vessel pairs count as conflicting when a fleet is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Vessels may neither overlap nor touch, diagonals included.
    #[default]
    Touching,
    /// Vessels may touch but not share a cell.
    Overlapping,
    /// No conflict check.
    Ignored,
}

impl ConflictPolicy {
    /// Cells around `vessel` that no other vessel may occupy.
    pub fn zone(self, vessel: &Vessel) -> CellMask {
        match self {
            ConflictPolicy::Touching => vessel.blocked_zone(),
            ConflictPolicy::Overlapping => vessel.mask(),
            ConflictPolicy::Ignored => CellMask::new(),
        }
    }

    /// Whether `a` and `b` conflict under this policy.
    pub fn in_conflict(self, a: &Vessel, b: &Vessel) -> bool {
        self.zone(a).intersects(&b.mask())
    }
}

/// A validated set of one player's vessels.
#[derive(Clone)]
pub struct Fleet {
    vessels: Vec<Vessel>,
    occupancy: CellMask,
}

impl Fleet {
    /// Assemble a standard fleet whose vessels must not touch.
    pub fn new(vessels: Vec<Vessel>) -> Result<Self, RulesError> {
        Self::with_rules(vessels, &StandardComposition, ConflictPolicy::Touching)
    }

    /// Assemble a fleet under a custom composition rule and conflict policy.
    pub fn with_rules(
        vessels: Vec<Vessel>,
        composition: &dyn CompositionRule,
        policy: ConflictPolicy,
    ) -> Result<Self, RulesError> {
        let sizes: Vec<usize> = vessels.iter().map(Vessel::size).collect();
        if !composition.is_complete(&sizes) {
            return Err(RulesError::IncompleteFleet);
        }
        if let Some((first, second)) = first_conflict(&vessels, policy) {
            return Err(RulesError::ConflictingPlacement { first, second });
        }

        let mut occupancy = CellMask::new();
        for vessel in &vessels {
            occupancy |= vessel.mask();
        }
        log::debug!(
            "fleet assembled: {} vessels, {} cells, {:?}",
            vessels.len(),
            occupancy.count_ones(),
            policy
        );
        Ok(Fleet { vessels, occupancy })
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Union of every vessel's cells.
    pub fn occupancy(&self) -> CellMask {
        self.occupancy
    }

    /// First vessel occupying `coord`.
    pub fn vessel_at(&self, coord: Coordinate) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.contains(coord))
    }

    /// Route an attack to the vessel at `coord`, if any.
    pub fn attack(&mut self, coord: Coordinate) -> AttackResult {
        if !self.occupancy.contains(coord) {
            log::trace!("attack {:?}: {:?}", coord, AttackResult::Miss);
            return AttackResult::Miss;
        }
        let result = match self.vessels.iter_mut().find(|v| v.contains(coord)) {
            Some(vessel) => vessel.attack(coord),
            None => AttackResult::Miss,
        };
        log::trace!("attack {:?}: {:?}", coord, result);
        result
    }

    /// Number of vessels not yet destroyed.
    pub fn afloat(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_destroyed()).count()
    }

    /// Returns `true` when every vessel is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.vessels.iter().all(Vessel::is_destroyed)
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fleet")
            .field("vessels", &self.vessels)
            .field("afloat", &self.afloat())
            .finish()
    }
}

/// First unordered pair of distinct vessels in conflict.
fn first_conflict(vessels: &[Vessel], policy: ConflictPolicy) -> Option<(usize, usize)> {
    if policy == ConflictPolicy::Ignored {
        return None;
    }
    for (i, a) in vessels.iter().enumerate() {
        for (j, b) in vessels.iter().enumerate().skip(i + 1) {
            if policy.in_conflict(a, b) {
                return Some((i, j));
            }
        }
    }
    None
}
