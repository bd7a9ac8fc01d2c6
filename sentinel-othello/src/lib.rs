//! `sentinel-othello` is a small, complete Othello library for engines and UIs.
//!
//! The board is a classic "mailbox" representation: the 8x8 playing area is
//! embedded in a 10x10 grid whose outer ring is made of permanent [`Cell::Border`]
//! sentinels. Directional scans walk the flat index space in steps of
//! {±1, ±9, ±10, ±11} and are guaranteed to hit a sentinel before running off
//! the grid, so move generation needs no bounds checks.
//!
//! Two levels of abstraction are provided:
//!
//!  - [`Board`] owns occupancy state and implements move generation,
//!    application, terminal detection and scoring.
//!  - [`Game`] adds turn state (side to move, forced passes, last move) and
//!    drives one game to completion against any pair of [`MoveSource`]s.

mod board;
mod game;
mod square;

pub use board::*;
pub use game::*;
pub use square::*;

/// The number of playable spaces on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of playable spaces on the board.
pub const NUM_SPACES: usize = 64;

/// The width of one row of the bordered grid.
pub const GRID_WIDTH: usize = 10;

/// The total number of cells in the bordered grid, playable or not.
pub const GRID_CELLS: usize = 100;
