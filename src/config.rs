//! Board dimensions and the standard fleet composition.

/// Side length of the square board shared by every bounds check.
pub const BOARD_SIZE: usize = 10;

/// Standard fleet as `(vessel length, required count)` pairs.
pub const STANDARD_FLEET: [(usize, usize); 4] = [(2, 2), (3, 4), (4, 2), (5, 1)];

/// Class names for the standard vessel lengths.
pub const VESSEL_CLASSES: [(usize, &str); 4] = [
    (2, "Submarine"),
    (3, "Destroyer"),
    (4, "Cruiser"),
    (5, "Battleship"),
];

/// Class name for a vessel of `length`, if it is a standard length.
pub fn vessel_class(length: usize) -> Option<&'static str> {
    VESSEL_CLASSES
        .iter()
        .find(|(len, _)| *len == length)
        .map(|(_, name)| *name)
}

/// Number of vessels in a standard fleet.
pub const fn total_standard_vessels() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < STANDARD_FLEET.len() {
        total += STANDARD_FLEET[i].1;
        i += 1;
    }
    total
}

/// Vessel lengths of the standard fleet, largest first.
pub fn standard_fleet_sizes() -> [usize; total_standard_vessels()] {
    let mut sizes = [0usize; total_standard_vessels()];
    let mut idx = 0;
    for &(length, count) in STANDARD_FLEET.iter().rev() {
        for _ in 0..count {
            sizes[idx] = length;
            idx += 1;
        }
    }
    sizes
}
