//! Reversegam: an Othello-style board game engine.
//!
//! This crate provides the board and move rules, a set of one-ply
//! move-selection strategies, a turn driver, and a batch harness that pits
//! two strategies against each other over many games.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and heuristic squares
//! - [`board`] - Cells and the 8x8 board value
//! - [`position`] - Coordinates and the `a1`..`h8` notation
//! - [`rules`] - Legality, flipping, and move generation
//! - [`strategy`] - Corner-first, side-first, best-score, worst-score, random
//! - [`game`] - Turn sequencing, passes, and end-of-game detection
//! - [`simulation`] - Parallel strategy-vs-strategy runs with statistics
//! - [`session`] - Line-based interactive play
//!
//! ## Example
//!
//! ```
//! use reversegam::game::GameState;
//! use reversegam::simulation::{SimulationConfig, run_simulation};
//! use reversegam::strategy::Strategy;
//!
//! // Play a move by hand
//! let mut game = GameState::new();
//! game.play("d3".parse().unwrap()).unwrap();
//!
//! // Compare two strategies over a batch of games
//! let config = SimulationConfig::new(Strategy::CornerFirst, Strategy::Random)
//!     .games(10)
//!     .seed(7);
//! let stats = run_simulation(&config).unwrap();
//! assert_eq!(stats.wins_a + stats.wins_b + stats.ties, 10);
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod position;
pub mod rules;
pub mod session;
pub mod simulation;
pub mod strategy;
