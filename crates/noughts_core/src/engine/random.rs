//! Uniform-random move selection.

use crate::{Board, Position, legal_moves};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks a legal move uniformly at random.
///
/// Candidates are drawn from [`legal_moves`], which is ordered by index,
/// so a seeded `rng` replays the same choice. Returns `None` on a full
/// board.
pub fn pick_random<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    legal_moves(board).choose(rng).copied()
}
