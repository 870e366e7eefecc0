//! The 100-cell symbolic shot grid and small coordinate helpers.
//!
//! Cells are addressed as `index = row * 10 + col` with `row, col ∈ [0, 9]`,
//! matching the wire convention consumed by renderers.

use crate::common::CellState;
use crate::config::{BOARD_CELLS, BOARD_SIZE, CENTER};
use core::fmt;

/// Per-player symbolic view of a board: what is known about every cell.
///
/// Each player owns two of these — one tracking their own shots against the
/// opponent and one mirroring what the opponent has revealed about them. Only
/// the match's shot resolution writes to either.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ShotGrid {
    cells: [CellState; BOARD_CELLS],
}

impl ShotGrid {
    /// Fresh grid with every cell `Unknown`.
    pub fn new() -> Self {
        ShotGrid {
            cells: [CellState::Unknown; BOARD_CELLS],
        }
    }

    #[inline]
    fn index(row: usize, col: usize) -> usize {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        row * BOARD_SIZE + col
    }

    /// State of the cell at (row, col). Callers keep indices in range; the
    /// match surface validates external coordinates before they reach here.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.cells[Self::index(row, col)]
    }

    /// Overwrite the cell at (row, col). Grids held inside a [`Match`] are
    /// written only through shot resolution; standalone grids are fair game
    /// for strategy evaluation and tests.
    ///
    /// [`Match`]: crate::Match
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[Self::index(row, col)] = state;
    }

    /// Raw cell slice in row-major order, for snapshot consumers.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Row-major iterator over `((row, col), state)`.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &s)| ((i / BOARD_SIZE, i % BOARD_SIZE), s))
    }

    /// Coordinates of cells still marked `Hit` (sunk cells excluded), in
    /// row-major scan order.
    pub fn hits(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|&(_, s)| s == CellState::Hit)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Coordinates of unresolved cells, in row-major scan order.
    pub fn unknown_cells(&self) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|&(_, s)| s == CellState::Unknown)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }
}

impl Default for ShotGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShotGrid:")?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ShotGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let glyph = match self.get(r, c) {
                    CellState::Unknown => '□',
                    CellState::Miss => '○',
                    CellState::Hit => '■',
                    CellState::Sunk => '▣',
                };
                write!(f, "{} ", glyph)?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Orthogonal neighbors of (row, col) clamped to the board, in
/// up/down/left/right order.
pub fn neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let (r, c) = (row as isize, col as isize);
    [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
        .into_iter()
        .filter_map(|(nr, nc)| {
            (nr >= 0 && nr < BOARD_SIZE as isize && nc >= 0 && nc < BOARD_SIZE as isize)
                .then(|| (nr as usize, nc as usize))
        })
}

/// Manhattan distance from (row, col) to the board center.
pub fn center_distance(row: usize, col: usize) -> f64 {
    (row as f64 - CENTER.0).abs() + (col as f64 - CENTER.1).abs()
}
