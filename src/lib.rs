//! Battleship-style grid combat with a probabilistic targeting AI.
//!
//! The crate covers the core of the game: fleet placement, the turn/shot
//! state machine, and four targeting strategies topped by a Monte Carlo
//! occupancy-density estimator. Rendering, heatmap export and batch
//! statistics live outside and consume the snapshots and score matrices
//! exposed here.

mod common;
mod config;
mod fleet;
mod game;
mod grid;
mod logging;
mod sampler;
mod ship;
mod strategy;

pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use sampler::*;
pub use ship::*;
pub use strategy::*;
