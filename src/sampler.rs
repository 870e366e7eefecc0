//! Placement sampling: generate one plausible hidden fleet layout consistent
//! with what a shot grid has revealed.
//!
//! The same routine serves two callers. The Monte Carlo strategy draws many
//! constrained samples against its live shot grid and accumulates them into a
//! density estimate; fleet generation draws a single unconstrained sample
//! against a blank grid.

use crate::common::CellState;
use crate::config::{BOARD_CELLS, BOARD_SIZE, MAX_PLACE_ATTEMPTS};
use crate::grid::ShotGrid;
use crate::ship::Orientation;
use rand::Rng;

/// One tentative ship placement inside a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    /// Cells covered by the placement, bow to stern.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }
}

/// A sampled fleet hypothesis: accepted placements plus their combined
/// occupancy mask in row-major cell order.
///
/// A sample may be partial: rejection sampling gives up on a ship after
/// [`MAX_PLACE_ATTEMPTS`] draws, and a hit with no remaining anchor stays
/// uncovered. Partial samples are retained and scored as-is; only real fleet
/// generation re-rolls until complete.
#[derive(Debug, Clone)]
pub struct FleetSample {
    pub placements: Vec<Placement>,
    pub occupied: [bool; BOARD_CELLS],
}

impl FleetSample {
    /// Whether every requested ship length was placed.
    pub fn is_complete(&self, requested: usize) -> bool {
        self.placements.len() == requested
    }
}

/// Draw one fleet layout hypothesis consistent with `known`: spans never cover
/// `Miss` or `Sunk` cells and never overlap each other.
///
/// Ships are first anchored over still-unexplained `Hit` cells (row-major),
/// consuming `lengths` in list order with horizontal tried before vertical;
/// the remaining lengths are placed by bounded rejection sampling over uniform
/// start cells and orientations.
pub fn sample_fleet<R: Rng>(known: &ShotGrid, lengths: &[usize], rng: &mut R) -> FleetSample {
    let mut sample = FleetSample {
        placements: Vec::with_capacity(lengths.len()),
        occupied: [false; BOARD_SIZE * BOARD_SIZE],
    };
    // zero entries (already-sunk ships in a remaining-length list) place nothing
    let mut remaining: Vec<usize> = lengths.iter().copied().filter(|&len| len > 0).collect();

    // Anchor ships over observed hits with minimal overhang.
    for ((row, col), state) in known.iter() {
        if state != CellState::Hit || sample.occupied[row * BOARD_SIZE + col] {
            continue;
        }
        let mut chosen = None;
        'lengths: for (i, &len) in remaining.iter().enumerate() {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let (start_row, start_col) = match orientation {
                    Orientation::Horizontal => (row, col.saturating_sub(len - 1)),
                    Orientation::Vertical => (row.saturating_sub(len - 1), col),
                };
                if let Some(p) = clear_span(start_row, start_col, len, orientation, known, &sample.occupied)
                {
                    chosen = Some((i, p));
                    break 'lengths;
                }
            }
        }
        // A hit no remaining ship can explain stays uncovered; the sampler
        // tolerates that rather than failing the sample.
        if let Some((i, placement)) = chosen {
            remaining.remove(i);
            commit(&mut sample, placement);
        }
    }

    // Place whatever is left by rejection sampling.
    for &len in &remaining {
        let mut placed = false;
        for _ in 0..MAX_PLACE_ATTEMPTS {
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if let Some(p) = clear_span(row, col, len, orientation, known, &sample.occupied) {
                commit(&mut sample, p);
                placed = true;
                break;
            }
        }
        if !placed {
            log::debug!(
                "sampler: length-{} ship unplaced after {} attempts, sample left partial",
                len,
                MAX_PLACE_ATTEMPTS
            );
        }
    }

    sample
}

/// Validate a span: on-board, off every `Miss`/`Sunk` cell and disjoint from
/// already committed placements.
fn clear_span(
    row: usize,
    col: usize,
    len: usize,
    orientation: Orientation,
    known: &ShotGrid,
    occupied: &[bool; BOARD_CELLS],
) -> Option<Placement> {
    let (end_row, end_col) = match orientation {
        Orientation::Horizontal => (row, col + len - 1),
        Orientation::Vertical => (row + len - 1, col),
    };
    if end_row >= BOARD_SIZE || end_col >= BOARD_SIZE {
        return None;
    }
    let placement = Placement {
        row,
        col,
        orientation,
        length: len,
    };
    for (r, c) in placement.cells() {
        match known.get(r, c) {
            CellState::Miss | CellState::Sunk => return None,
            _ => {}
        }
        if occupied[r * BOARD_SIZE + c] {
            return None;
        }
    }
    Some(placement)
}

fn commit(sample: &mut FleetSample, placement: Placement) {
    for (r, c) in placement.cells() {
        sample.occupied[r * BOARD_SIZE + c] = true;
    }
    sample.placements.push(placement);
}
