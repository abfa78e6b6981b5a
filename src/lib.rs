//! Noughts library - tic-tac-toe matches on top of `noughts_core`.
//!
//! # Architecture
//!
//! - **Core** (`noughts_core`): board model and move-decision engine
//! - **Session**: one match between two seats, human or engine
//! - **Scoreboard**: per-mode win/loss/draw tallies
//! - **Config**: TOML engine settings and random seed
//!
//! # Example
//!
//! ```
//! use noughts::{AppConfig, Difficulty, GameMode, Match, Position};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::default().with_seed(Some(7));
//! let engine = config.build_engine()?;
//! let mut rng = config.rng();
//!
//! let mut game = Match::new(GameMode::PlayerVsComputer(Difficulty::Hard), 0);
//! game.play(Position::Center)?;
//! let (reply, _outcome) = game.computer_move(&engine, &mut rng)?;
//! assert_ne!(reply, Position::Center);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod scoreboard;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Scoreboard
pub use scoreboard::{Record, Scoreboard};

// Crate-level exports - Match driver
pub use session::{GameMode, Match, MatchError, MatchResult, Seat, self_play};

// Crate-level exports - Core types
pub use noughts_core::{
    Board, DecisionError, Difficulty, Engine, EngineSettings, Move, MoveError, Outcome, Player,
    Position, ScoringPolicy, SearchReport, decide, evaluate, legal_moves,
};
