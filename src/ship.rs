//! Ship classes and placed ships.

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Static class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board: origin, orientation and accumulated hits.
///
/// All occupied cells lie within the 10×10 board; `new` rejects spans that
/// would not. The ship is sunk once every segment has been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    row: usize,
    col: usize,
    hits: usize,
}

impl Ship {
    /// Place a ship of `class` at (`row`, `col`) with `orientation`.
    pub fn new(
        class: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GameError> {
        let len = class.length();
        let fits = match orientation {
            Orientation::Horizontal => col + len <= BOARD_SIZE,
            Orientation::Vertical => row + len <= BOARD_SIZE,
        };
        if row >= BOARD_SIZE || col >= BOARD_SIZE || !fits {
            return Err(GameError::ShipOutOfBounds);
        }
        Ok(Ship {
            class,
            orientation,
            row,
            col,
            hits: 0,
        })
    }

    /// Cells occupied by the ship, bow to stern.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.class.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Whether the ship occupies (row, col).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }

    /// Register a hit at (`row`, `col`). Returns `true` when the ship occupies
    /// the cell. Callers resolve each cell at most once, so hits are counted
    /// rather than tracked per segment.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.contains(row, col) {
            self.hits += 1;
            true
        } else {
            false
        }
    }

    /// Sunk once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits == self.class.length()
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) {:?}, {}/{} hit",
            self.class.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits,
            self.class.length(),
        )
    }
}
