//! The match state machine: two players, strict turn alternation, shot
//! resolution and terminal detection.

use crate::common::{CellState, GameError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::grid::ShotGrid;
use crate::strategy::{ScoreMatrix, Strategy};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifies one of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based player number, for display and reports.
    pub fn number(self) -> usize {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    fn index(self) -> usize {
        self.number() - 1
    }
}

/// Who controls a seat: an external (human/UI) caller driving `resolve_shot`,
/// or an AI with a fixed targeting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Ai(Strategy),
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Over(PlayerId),
}

struct PlayerState {
    fleet: Fleet,
    /// What this player has learned about the opponent's waters.
    shots: ShotGrid,
    /// Mirror of what the opponent has revealed about this player's waters.
    revealed: ShotGrid,
    seat: Seat,
}

impl PlayerState {
    fn new(fleet: Fleet, seat: Seat) -> Self {
        PlayerState {
            fleet,
            shots: ShotGrid::new(),
            revealed: ShotGrid::new(),
            seat,
        }
    }
}

/// A running game. Owns both fleets and both players' knowledge grids
/// exclusively; all mutation goes through [`Match::fire`].
pub struct Match {
    players: [PlayerState; 2],
    active: PlayerId,
    status: MatchStatus,
}

impl Match {
    /// Start a match with freshly generated canonical fleets.
    pub fn new<R: Rng>(seat1: Seat, seat2: Seat, rng: &mut R) -> Self {
        let fleet1 = Fleet::random(rng);
        let fleet2 = Fleet::random(rng);
        Self::with_fleets(fleet1, fleet2, seat1, seat2)
    }

    /// Start a match around preconstructed fleets, for staged scenarios and
    /// replay tooling.
    pub fn with_fleets(fleet1: Fleet, fleet2: Fleet, seat1: Seat, seat2: Seat) -> Self {
        Match {
            players: [PlayerState::new(fleet1, seat1), PlayerState::new(fleet2, seat2)],
            active: PlayerId::One,
            status: MatchStatus::InProgress,
        }
    }

    /// Resolve a shot by the active player at (`row`, `col`).
    ///
    /// Rejections (terminal match, out-of-bounds target, already resolved
    /// cell) leave the match untouched. On a hit that depletes a ship, every
    /// cell of that ship is upgraded to `Sunk` on both players' grids
    /// atomically. The turn passes to the opponent unless the shot ended the
    /// match.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        if matches!(self.status, MatchStatus::Over(_)) {
            return Err(GameError::MatchOver);
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        let shooter = self.active;
        let (attacker, defender) = self.split_active();
        if !attacker.shots.get(row, col).is_unknown() {
            return Err(GameError::CellAlreadyResolved);
        }

        let outcome = match defender.fleet.ship_at_mut(row, col) {
            Some(ship) => {
                ship.register_hit(row, col);
                if ship.is_sunk() {
                    let name = ship.class().name();
                    let cells: Vec<(usize, usize)> = ship.cells().collect();
                    for (r, c) in cells {
                        attacker.shots.set(r, c, CellState::Sunk);
                        defender.revealed.set(r, c, CellState::Sunk);
                    }
                    ShotOutcome::Sunk(name)
                } else {
                    attacker.shots.set(row, col, CellState::Hit);
                    defender.revealed.set(row, col, CellState::Hit);
                    ShotOutcome::Hit
                }
            }
            None => {
                attacker.shots.set(row, col, CellState::Miss);
                defender.revealed.set(row, col, CellState::Miss);
                ShotOutcome::Miss
            }
        };
        let defeated = defender.fleet.all_sunk();

        log::debug!(
            "player{} fired at ({}, {}): {:?}",
            shooter.number(),
            row,
            col,
            outcome
        );

        if defeated {
            self.status = MatchStatus::Over(shooter);
            log::debug!("match over, player{} wins", shooter.number());
        } else {
            self.active = shooter.opponent();
        }
        Ok(outcome)
    }

    /// Boolean surface over [`Match::fire`]: `false` means the shot was
    /// rejected and nothing changed.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> bool {
        self.fire(row, col).is_ok()
    }

    /// Let the active player's AI take its turn. Returns `false` when the
    /// match is over or the active seat is not AI-controlled.
    pub fn ai_move<R: Rng>(&mut self, rng: &mut R) -> bool {
        if matches!(self.status, MatchStatus::Over(_)) {
            return false;
        }
        let state = &self.players[self.active.index()];
        let strategy = match state.seat {
            Seat::Ai(strategy) => strategy,
            Seat::Human => return false,
        };
        let (row, col) = strategy.select_target(&state.shots, rng);
        self.resolve_shot(row, col)
    }

    /// Reproduce `player`'s current score grid without mutating the match.
    /// Non-scoring seats (uniform, hunt, human) yield the base matrix.
    pub fn score_grid<R: Rng>(&self, player: PlayerId, rng: &mut R) -> ScoreMatrix {
        let state = &self.players[player.index()];
        match state.seat {
            Seat::Ai(strategy) => strategy.score_grid(&state.shots, rng),
            Seat::Human => Strategy::Uniform.score_grid(&state.shots, rng),
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            MatchStatus::Over(winner) => Some(winner),
            MatchStatus::InProgress => None,
        }
    }

    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// What `player` knows about the opponent's waters.
    pub fn shots(&self, player: PlayerId) -> &ShotGrid {
        &self.players[player.index()].shots
    }

    /// What the opponent has revealed about `player`'s own waters.
    pub fn revealed(&self, player: PlayerId) -> &ShotGrid {
        &self.players[player.index()].revealed
    }

    /// `player`'s fleet, e.g. for renderers drawing their own ships.
    pub fn fleet(&self, player: PlayerId) -> &Fleet {
        &self.players[player.index()].fleet
    }

    pub fn seat(&self, player: PlayerId) -> Seat {
        self.players[player.index()].seat
    }

    fn split_active(&mut self) -> (&mut PlayerState, &mut PlayerState) {
        let (left, right) = self.players.split_at_mut(1);
        match self.active {
            PlayerId::One => (&mut left[0], &mut right[0]),
            PlayerId::Two => (&mut right[0], &mut left[0]),
        }
    }
}
