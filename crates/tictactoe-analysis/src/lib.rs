//! Offline handling of generated game records
//!
//! This crate sits between the game engine and everything that consumes its
//! output:
//!
//! - [`row::GameRow`]: one finished game flattened into the 19-column CSV row
//!   format, parsed back, and replayed through the engine for validation
//! - [`summary::OutcomeSummary`]: outcome, game length and winning line counts
//!   over many games
//!
//! # Example
//!
//! ```
//! use tictactoe_analysis::{row::GameRow, summary::OutcomeSummary};
//! use tictactoe_engine::Game;
//!
//! let mut summary = OutcomeSummary::new();
//! let mut lines = vec![GameRow::header()];
//! for _ in 0..10 {
//!     let mut game = Game::new();
//!     game.play();
//!     summary.record_game(&game);
//!     lines.push(GameRow::from_game(&game).unwrap().to_string());
//! }
//!
//! // Reading the rows back gives the same summary.
//! let mut reread = OutcomeSummary::new();
//! for line in &lines[1..] {
//!     let row: GameRow = line.parse().unwrap();
//!     reread.record_game(&row.replay().unwrap());
//! }
//! assert_eq!(reread, summary);
//! ```

pub mod row;
pub mod summary;
