//! Targeting strategies: pure functions from a shot grid to the next target.
//!
//! Four strategies of increasing sophistication. All of them read only the
//! acting player's own shot grid plus the canonical fleet length list, and
//! every returned cell is `Unknown` at call time while any remains; once none
//! does, the fallback chain bottoms out at `(0, 0)`.

use crate::common::CellState;
use crate::config::{BOARD_SIZE, DENSITY_SAMPLES, SHIP_LENGTHS};
use crate::grid::{center_distance, neighbors, ShotGrid};
use crate::sampler;
use rand::Rng;

/// Dense 10×10 score grid for diagnostics and visualization. `-1.0` marks
/// cells excluded from targeting (anything not `Unknown`).
pub type ScoreMatrix = [[f64; BOARD_SIZE]; BOARD_SIZE];

/// Closed set of targeting strategies, selected at match construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniformly random over unresolved cells.
    Uniform,
    /// After a hit, search its orthogonal neighbors; otherwise probe the
    /// central 4×4 sub-board before falling back to uniform.
    HuntTarget,
    /// Argmax of a local neighbor/center/parity heuristic.
    GreedyScore,
    /// Occupancy-density estimate built from repeated placement sampling,
    /// with hit-adjacency and center bonuses layered on top.
    MonteCarloDensity,
}

impl Strategy {
    /// Choose the next target on `shots`.
    pub fn select_target<R: Rng>(&self, shots: &ShotGrid, rng: &mut R) -> (usize, usize) {
        match self {
            Strategy::Uniform => uniform_target(shots, rng),
            Strategy::HuntTarget => hunt_neighbor(shots)
                .or_else(|| center_target(shots, rng))
                .unwrap_or_else(|| uniform_target(shots, rng)),
            Strategy::GreedyScore => argmax(&greedy_scores(shots), shots)
                .unwrap_or_else(|| uniform_target(shots, rng)),
            Strategy::MonteCarloDensity => {
                // Adjacent follow-up on open hits takes priority over sampling.
                if let Some(cell) = hunt_neighbor(shots) {
                    return cell;
                }
                argmax(&monte_carlo_scores(shots, rng), shots)
                    .or_else(|| center_target(shots, rng))
                    .unwrap_or_else(|| uniform_target(shots, rng))
            }
        }
    }

    /// Reproduce the strategy's score grid without choosing a target, for
    /// external visualization. Strategies that do not score (`Uniform`,
    /// `HuntTarget`) yield the base matrix: `0` on open cells, `-1` elsewhere.
    pub fn score_grid<R: Rng>(&self, shots: &ShotGrid, rng: &mut R) -> ScoreMatrix {
        match self {
            Strategy::GreedyScore => greedy_scores(shots),
            Strategy::MonteCarloDensity => monte_carlo_scores(shots, rng),
            Strategy::Uniform | Strategy::HuntTarget => base_matrix(shots),
        }
    }
}

/// `0.0` on `Unknown` cells, `-1.0` on everything already resolved.
fn base_matrix(shots: &ShotGrid) -> ScoreMatrix {
    let mut scores = [[0.0; BOARD_SIZE]; BOARD_SIZE];
    for ((r, c), state) in shots.iter() {
        if !state.is_unknown() {
            scores[r][c] = -1.0;
        }
    }
    scores
}

/// First `Unknown` orthogonal neighbor of any open hit, scanning hits in
/// row-major order.
fn hunt_neighbor(shots: &ShotGrid) -> Option<(usize, usize)> {
    for (row, col) in shots.hits() {
        for (r, c) in neighbors(row, col) {
            if shots.get(r, c).is_unknown() {
                return Some((r, c));
            }
        }
    }
    None
}

/// Random `Unknown` cell inside the central 4×4 sub-board `[3..6]×[3..6]`.
fn center_target<R: Rng>(shots: &ShotGrid, rng: &mut R) -> Option<(usize, usize)> {
    let candidates: Vec<(usize, usize)> = (3..7)
        .flat_map(|r| (3..7).map(move |c| (r, c)))
        .filter(|&(r, c)| shots.get(r, c).is_unknown())
        .collect();
    if candidates.is_empty() {
        None
    } else {
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}

/// Random `Unknown` cell anywhere; `(0, 0)` on a fully resolved board.
fn uniform_target<R: Rng>(shots: &ShotGrid, rng: &mut R) -> (usize, usize) {
    let candidates = shots.unknown_cells();
    if candidates.is_empty() {
        (0, 0)
    } else {
        candidates[rng.random_range(0..candidates.len())]
    }
}

/// Greedy heuristic: neighbor evidence (+3 per adjacent hit, -2 per adjacent
/// miss), closeness to center, and a parity nudge favoring the even-sum
/// checkerboard no length-2 ship can dodge.
fn greedy_scores(shots: &ShotGrid) -> ScoreMatrix {
    let mut scores = base_matrix(shots);
    for ((row, col), state) in shots.iter() {
        if !state.is_unknown() {
            continue;
        }
        let mut score = 0.0;
        for (r, c) in neighbors(row, col) {
            match shots.get(r, c) {
                CellState::Hit => score += 3.0,
                CellState::Miss => score -= 2.0,
                _ => {}
            }
        }
        score += (9.0 - center_distance(row, col)) / 2.0;
        if (row + col) % 2 == 0 {
            score += 0.5;
        }
        scores[row][col] = score;
    }
    scores
}

/// Monte Carlo density estimate: accumulate occupancy counts over repeated
/// placement samples, then layer on hit-adjacency, center and second-ring
/// bonuses. Partial samples degrade the estimate silently rather than failing
/// the call.
fn monte_carlo_scores<R: Rng>(shots: &ShotGrid, rng: &mut R) -> ScoreMatrix {
    let mut scores = base_matrix(shots);

    for _ in 0..DENSITY_SAMPLES {
        let sample = sampler::sample_fleet(shots, &SHIP_LENGTHS, rng);
        for ((r, c), state) in shots.iter() {
            if state.is_unknown() && sample.occupied[r * BOARD_SIZE + c] {
                scores[r][c] += 1.0;
            }
        }
    }

    let hits = shots.hits();

    // Direct neighbors of open hits.
    for &(row, col) in &hits {
        for (r, c) in neighbors(row, col) {
            if shots.get(r, c).is_unknown() {
                scores[r][c] += 20.0;
            }
        }
    }

    // Center-weighted prior over open cells.
    for ((r, c), state) in shots.iter() {
        if state.is_unknown() {
            scores[r][c] += (9.0 - center_distance(r, c)) * 3.0;
        }
    }

    // Second ring around open hits, reached through an open neighbor.
    for &(row, col) in &hits {
        for (r, c) in neighbors(row, col) {
            if !shots.get(r, c).is_unknown() {
                continue;
            }
            for (r2, c2) in neighbors(r, c) {
                if shots.get(r2, c2).is_unknown() {
                    scores[r2][c2] += 10.0;
                }
            }
        }
    }

    scores
}

/// Highest-scoring open cell, first found in row-major order. Exclusion is
/// decided by the grid, not the score sign: greedy scores can dip below the
/// `-1` sentinel when a cell sits among misses.
fn argmax(scores: &ScoreMatrix, shots: &ShotGrid) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), f64)> = None;
    for ((r, c), state) in shots.iter() {
        if !state.is_unknown() {
            continue;
        }
        let score = scores[r][c];
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some(((r, c), score)),
        }
    }
    best.map(|(cell, _)| cell)
}
