//! Pure tic-tac-toe board model and move-decision engine.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`legal_moves`], [`apply`], [`evaluate`].
//!   Boards are `Copy` values; nothing here holds state between calls.
//! - **Decision engine**: [`decide`] / [`Engine`] choose a move for a
//!   [`Difficulty`]: random, blended, or exhaustive minimax with
//!   alpha-beta pruning.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Difficulty, Outcome, Player, apply, decide, evaluate};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let board: Board = "XX./OO./...".parse()?;
//! let position = decide(&board, Difficulty::Hard, Player::X, &mut rng)?;
//! let board = apply(&board, position, Player::X)?;
//! assert_eq!(evaluate(&board), Outcome::Win(Player::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use engine::{
    DEFAULT_BLEND_PROBABILITY, DecisionError, Difficulty, Engine, EngineSettings, ScoringPolicy,
    SearchReport, SettingsError, decide, pick_random,
};
pub use invariants::{Invariant, InvariantViolation, MarkBalance};
pub use position::Position;
pub use rules::{apply, apply_index, evaluate, legal_moves};
pub use types::{Board, BoardParseError, Outcome, Player, Square};
