//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The 3x3 tree is small enough to search to the end from any position,
//! so only terminal boards are scored. There is no depth limit and no
//! heuristic evaluation.

use super::ScoringPolicy;
use crate::{Board, Outcome, Player, Position, Square, evaluate, legal_moves};
use serde::{Deserialize, Serialize};

/// Score of a position together with the move that achieves it.
///
/// `position` is `None` at terminal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Score from the searching player's point of view.
    pub score: i32,
    /// Best move found at this node.
    pub position: Option<Position>,
}

impl Scored {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            position: None,
        }
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move.
    pub position: Position,
    /// Its minimax score for the searching player.
    pub score: i32,
    /// Nodes visited, root included.
    pub nodes: u64,
}

/// One search from the point of view of `ai`.
#[derive(Debug)]
pub(crate) struct Search {
    ai: Player,
    policy: ScoringPolicy,
    nodes: u64,
}

impl Search {
    pub(crate) fn new(ai: Player, policy: ScoringPolicy) -> Self {
        Self {
            ai,
            policy,
            nodes: 0,
        }
    }

    pub(crate) fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores a won position at `plies` below the root.
    fn win_score(&self, winner: Player, plies: i32) -> i32 {
        let magnitude = match self.policy {
            ScoringPolicy::Flat => 1,
            ScoringPolicy::DepthAdjusted => 10 - plies,
        };
        if winner == self.ai { magnitude } else { -magnitude }
    }

    /// Minimax over the subtree rooted at `board` with `to_move` on turn.
    ///
    /// Maximises where `to_move` is the searching player, minimises
    /// elsewhere. Children are visited in ascending index order and only a
    /// strictly better score replaces the incumbent, so ties resolve to
    /// the lowest index.
    pub(crate) fn minimax(
        &mut self,
        board: &Board,
        to_move: Player,
        plies: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Scored {
        self.nodes += 1;

        match evaluate(board) {
            Outcome::Win(winner) => return Scored::leaf(self.win_score(winner, plies)),
            Outcome::Draw => return Scored::leaf(0),
            Outcome::InProgress => {}
        }

        let maximizing = to_move == self.ai;
        let mut best = Scored::leaf(if maximizing { i32::MIN } else { i32::MAX });

        for position in legal_moves(board) {
            let mut child = *board;
            child.set(position, Square::Occupied(to_move));

            let score = self
                .minimax(&child, to_move.opponent(), plies + 1, alpha, beta)
                .score;

            if maximizing {
                if score > best.score {
                    best = Scored {
                        score,
                        position: Some(position),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = Scored {
                        score,
                        position: Some(position),
                    };
                }
                beta = beta.min(best.score);
            }

            if alpha >= beta {
                break;
            }
        }

        best
    }

    /// Root search: the searching player is on move at `board`.
    pub(crate) fn root(&mut self, board: &Board) -> Scored {
        self.minimax(board, self.ai, 0, i32::MIN, i32::MAX)
    }
}
