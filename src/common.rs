//! Common types shared across the engine: cell symbols, shot outcomes and
//! error values.

use serde::{Deserialize, Serialize};

/// Knowledge about a single board cell, as seen by the player shooting at it.
///
/// The symbol alphabet is closed: a cell starts `Unknown`, becomes `Hit` or
/// `Miss` exactly once, and `Hit` cells are upgraded to `Sunk` atomically for
/// a whole ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Unknown,
    Miss,
    Hit,
    Sunk,
}

impl CellState {
    pub fn is_unknown(self) -> bool {
        self == CellState::Unknown
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit an undepleted ship segment.
    Hit,
    /// Shot sank a ship, carrying its class name.
    Sunk(&'static str),
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Row or column index is outside the 10×10 board.
    OutOfBounds { row: usize, col: usize },
    /// Target cell was already resolved to hit, miss or sunk.
    CellAlreadyResolved,
    /// Match already has a winner; no further shots are accepted.
    MatchOver,
    /// Ship span would leave the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship in the fleet.
    ShipOverlap,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
            GameError::CellAlreadyResolved => write!(f, "Cell was already resolved"),
            GameError::MatchOver => write!(f, "Match is already over"),
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipOverlap => write!(f, "Ship placement overlaps with another ship"),
        }
    }
}

impl std::error::Error for GameError {}
