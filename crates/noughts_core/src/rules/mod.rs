//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values: legal-move enumeration, move
//! application and outcome evaluation. None of them keep state between
//! calls.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

use super::{Board, MoveError, Outcome, Player, Position, Square};
use tracing::{instrument, trace};

/// Returns every empty position in ascending index order.
///
/// An empty vector means the board is full.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}

/// Places `player`'s mark at `position`, returning the new board.
///
/// Turn order is not checked here; the caller owns turn discipline.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the square is not empty.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn apply(board: &Board, position: Position, player: Player) -> Result<Board, MoveError> {
    if !board.is_empty(position) {
        trace!(%position, "Rejected move on occupied square");
        return Err(MoveError::SquareOccupied(position));
    }

    let mut next = *board;
    next.set(position, Square::Occupied(player));
    Ok(next)
}

/// Like [`apply`] but takes a raw board index.
///
/// # Errors
///
/// Returns [`MoveError::OutOfRange`] for an index above 8, otherwise
/// whatever [`apply`] returns.
pub fn apply_index(board: &Board, index: usize, player: Player) -> Result<Board, MoveError> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
    apply(board, position, player)
}

/// Derives the outcome of a board.
///
/// A winning line takes priority; otherwise a full board is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

impl Board {
    /// See [`legal_moves`].
    pub fn legal_moves(&self) -> Vec<Position> {
        legal_moves(self)
    }

    /// See [`apply`].
    pub fn apply(&self, position: Position, player: Player) -> Result<Board, MoveError> {
        apply(self, position, player)
    }

    /// See [`evaluate`].
    pub fn evaluate(&self) -> Outcome {
        evaluate(self)
    }
}
