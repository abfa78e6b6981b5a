//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable on their own and back debug assertions in the
//! engine and the match driver.

use super::{Board, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Checks `I` against `state`, turning a failure into a violation.
    pub fn check<S, I: Invariant<S>>(state: &S) -> Result<(), Self> {
        if I::holds(state) {
            Ok(())
        } else {
            Err(Self::new(I::description()))
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Invariant: X moves first, so X has as many marks as O or one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}

impl MarkBalance {
    /// The player whose turn it is on a balanced board.
    pub fn to_move(board: &Board) -> Player {
        if board.count(Player::X) > board.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }
}
