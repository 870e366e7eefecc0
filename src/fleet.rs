//! Fleets: validated collections of placed ships.

use crate::common::GameError;
use crate::config::{NUM_SHIPS, SHIPS, SHIP_LENGTHS};
use crate::grid::ShotGrid;
use crate::sampler;
use crate::ship::Ship;
use rand::Rng;

/// One player's ships. Occupied cells of any two ships are disjoint.
#[derive(Debug, Clone)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Build a fleet from preconstructed ships, validating disjointness.
    ///
    /// The canonical fleet is the `{5,4,3,3,2}` set from [`SHIPS`]; custom
    /// fleets are accepted so scenario tests and replay tooling can stage
    /// exact positions.
    pub fn from_ships(ships: Vec<Ship>) -> Result<Self, GameError> {
        let mut seen = std::collections::HashSet::new();
        for ship in &ships {
            for cell in ship.cells() {
                if !seen.insert(cell) {
                    return Err(GameError::ShipOverlap);
                }
            }
        }
        Ok(Fleet { ships })
    }

    /// Generate the canonical fleet from one unconstrained placement sample.
    ///
    /// A sample can come back partial when rejection sampling exhausts its
    /// attempt bound; a real fleet must be complete, so the whole sample is
    /// re-rolled until all five ships land. On a blank board that virtually
    /// always succeeds first try.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let blank = ShotGrid::new();
        loop {
            let sample = sampler::sample_fleet(&blank, &SHIP_LENGTHS, rng);
            if !sample.is_complete(NUM_SHIPS) {
                log::debug!("fleet generation drew a partial sample, re-rolling");
                continue;
            }
            // Lengths are consumed in SHIPS order on a blank board, so the
            // i-th placement carries the i-th class.
            let mut ships = Vec::with_capacity(NUM_SHIPS);
            for (class, p) in SHIPS.iter().zip(&sample.placements) {
                match Ship::new(*class, p.orientation, p.row, p.col) {
                    Ok(ship) => ships.push(ship),
                    Err(_) => break,
                }
            }
            if ships.len() == NUM_SHIPS {
                return Fleet { ships };
            }
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying (row, col), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(row, col))
    }

    pub(crate) fn ship_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.contains(row, col))
    }

    /// `true` once every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Lengths of ships not yet sunk.
    pub fn remaining_lengths(&self) -> Vec<usize> {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .map(|s| s.class().length())
            .collect()
    }
}
