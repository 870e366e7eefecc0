use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];
pub const SHIP_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];
pub const TOTAL_SHIP_CELLS: usize = 17;

/// Board center used by distance-weighted strategies.
pub const CENTER: (f64, f64) = (4.5, 4.5);

/// Number of layouts sampled per Monte Carlo evaluation.
pub const DENSITY_SAMPLES: usize = 100;

/// Attempt bound for rejection-sampling a single ship placement.
pub const MAX_PLACE_ATTEMPTS: usize = 1000;
