//! Game engine logic and state management.
//!
//! This module drives the core data structures through a random-play game:
//!
//! - [`Game`] - Board, turn counter, history and outcome of one match
//! - [`History`] / [`Record`] - Append-only log of the turns played
//! - [`CellSource`] - Where each turn's cell comes from
//! - [`ShuffledCells`] - Seeded random permutation of the 9 cells
//! - [`FixedCells`] - Caller-supplied cell order for tests and replay
//! - [`CellSeed`] / [`SeedStream`] - Seeds for reproducible games
//!
//! # Game Flow
//!
//! 1. Create a [`Game`] with a cell source (random by default)
//! 2. Each turn, the mover marks the next cell drawn from the source
//! 3. From turn 5 on, both players are checked against all 8 lines
//! 4. The game ends on the first complete line, or as a draw after turn 9
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Outcome};
//!
//! let mut game = Game::new();
//! let outcome = game.play();
//!
//! match outcome {
//!     Outcome::Draw => assert_eq!(game.history().len(), 9),
//!     Outcome::Win(player) => {
//!         assert_eq!(game.history().last().unwrap().player(), player);
//!     }
//! }
//! ```

pub use self::{cell_source::*, game::*, history::*};

mod cell_source;
mod game;
mod history;
