//! Move-decision engine.
//!
//! Three strategies sit behind one entry point, [`decide`]:
//!
//! - [`Difficulty::Easy`] picks uniformly among legal moves.
//! - [`Difficulty::Medium`] plays the Hard move with probability
//!   [`EngineSettings::blend_probability`] and a random move otherwise.
//! - [`Difficulty::Hard`] runs an exhaustive minimax search with
//!   alpha-beta pruning and never loses.
//!
//! The engine keeps no state between calls. Randomness comes in through
//! an explicit [`Rng`] so tests can seed it.

mod minimax;
mod random;

pub use minimax::SearchReport;
pub use random::pick_random;

use crate::{Board, InvariantViolation, MarkBalance, Outcome, Player, Position, evaluate};
use minimax::Search;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, warn};

/// Difficulty tier selecting the move strategy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform-random legal move.
    Easy,
    /// Blend of optimal and random play.
    Medium,
    /// Optimal play.
    Hard,
}

/// How terminal positions are scored by the search.
///
/// Both policies are optimal in the win/draw/loss sense. They differ in
/// which of several equally winning moves gets picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Win +1, loss -1, draw 0, regardless of how far away.
    Flat,
    /// Win `10 - plies`, loss `plies - 10`, draw 0: faster wins and
    /// slower losses score higher.
    #[default]
    DepthAdjusted,
}

/// Tunable engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Probability that a Medium decision uses the Hard move.
    pub blend_probability: f64,
    /// Terminal scoring used by the Hard search.
    pub scoring: ScoringPolicy,
}

/// Default share of optimal moves at Medium difficulty.
pub const DEFAULT_BLEND_PROBABILITY: f64 = 0.7;

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            blend_probability: DEFAULT_BLEND_PROBABILITY,
            scoring: ScoringPolicy::default(),
        }
    }
}

/// Rejected engine settings.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub enum SettingsError {
    /// Blend probability is not a number in [0, 1].
    #[display("Blend probability {} is outside [0, 1]", _0)]
    BlendProbability(f64),
}

impl std::error::Error for SettingsError {}

impl EngineSettings {
    /// Checks that the settings can drive an engine.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if (0.0..=1.0).contains(&self.blend_probability) {
            Ok(())
        } else {
            Err(SettingsError::BlendProbability(self.blend_probability))
        }
    }
}

/// The engine was asked for a move it cannot give.
///
/// Both variants mean the caller skipped an [`evaluate`] check; they are
/// bugs in the surrounding game loop, not conditions to recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DecisionError {
    /// The board is already won or drawn.
    #[display("Cannot decide a move: game is over ({})", _0)]
    PreconditionViolation(Outcome),

    /// No empty square remains.
    #[display("Cannot decide a move: no legal move")]
    NoLegalMove,
}

impl std::error::Error for DecisionError {}

/// A configured decision engine.
///
/// Holds only settings; every call works on the board it is given.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Engine {
    settings: EngineSettings,
}

impl Engine {
    /// Creates an engine from validated settings.
    pub fn new(settings: EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Chooses a move for `ai_player` at the given difficulty.
    ///
    /// # Errors
    ///
    /// [`DecisionError::PreconditionViolation`] if the board is terminal.
    #[instrument(skip(self, board, rng), fields(board = %board))]
    pub fn decide<R: Rng + ?Sized>(
        &self,
        board: &Board,
        difficulty: Difficulty,
        ai_player: Player,
        rng: &mut R,
    ) -> Result<Position, DecisionError> {
        let outcome = evaluate(board);
        if outcome.is_terminal() {
            error!(%outcome, "Move requested on a finished board");
            return Err(DecisionError::PreconditionViolation(outcome));
        }
        let balanced = match InvariantViolation::check::<Board, MarkBalance>(board) {
            Ok(()) => true,
            Err(violation) => {
                warn!(%violation, "Deciding on an unbalanced board");
                false
            }
        };

        let position = match difficulty {
            Difficulty::Easy => self.random_move(board, rng)?,
            Difficulty::Medium => {
                if rng.gen_bool(self.settings.blend_probability) {
                    debug!("Medium decision takes the optimal branch");
                    self.search(board, ai_player)?.position
                } else {
                    debug!("Medium decision takes the random branch");
                    self.random_move(board, rng)?
                }
            }
            Difficulty::Hard => self.search(board, ai_player)?.position,
        };

        debug!(%position, index = position.to_index(), balanced, "Engine chose move");
        Ok(position)
    }

    /// Runs the exhaustive search and reports the best move.
    ///
    /// # Errors
    ///
    /// [`DecisionError::PreconditionViolation`] if the board is terminal.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn search(
        &self,
        board: &Board,
        ai_player: Player,
    ) -> Result<SearchReport, DecisionError> {
        let outcome = evaluate(board);
        if outcome.is_terminal() {
            return Err(DecisionError::PreconditionViolation(outcome));
        }

        let mut search = Search::new(ai_player, self.settings.scoring);
        let scored = search.root(board);
        let position = scored.position.ok_or(DecisionError::NoLegalMove)?;
        let report = SearchReport {
            position,
            score: scored.score,
            nodes: search.nodes(),
        };
        debug!(
            %position,
            score = report.score,
            nodes = report.nodes,
            "Search complete"
        );
        Ok(report)
    }

    fn random_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Position, DecisionError> {
        pick_random(board, rng).ok_or(DecisionError::NoLegalMove)
    }
}

/// Chooses a move with default [`EngineSettings`].
///
/// See [`Engine::decide`].
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    ai_player: Player,
    rng: &mut R,
) -> Result<Position, DecisionError> {
    Engine::default().decide(board, difficulty, ai_player, rng)
}
