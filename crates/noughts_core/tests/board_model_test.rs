//! Tests for the board model: legal moves, apply and evaluate.

use noughts_core::{
    Board, MoveError, Outcome, Player, Position, Square, apply, apply_index, evaluate,
    legal_moves, rules::LINES,
};
use std::collections::HashSet;

/// Every board reachable from the empty board by legal play, X first.
fn reachable_boards() -> Vec<Board> {
    fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board) {
            return;
        }
        out.push(board);
        if evaluate(&board) != Outcome::InProgress {
            return;
        }
        for position in legal_moves(&board) {
            let next = apply(&board, position, to_move).unwrap();
            walk(next, to_move.opponent(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), Player::X, &mut seen, &mut out);
    out
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_evaluate_is_idempotent() {
    for board in reachable_boards() {
        let snapshot = board;
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_legal_moves_cover_exactly_the_empty_squares() {
    for board in reachable_boards() {
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 9 - board.occupied_count());
        assert!(moves.iter().all(|pos| board.get(*pos) == Square::Empty));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_apply_then_evaluate_detects_completed_line() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            board = apply(&board, line[0], player).unwrap();
            board = apply(&board, line[1], player).unwrap();
            assert_eq!(evaluate(&board), Outcome::InProgress);
            board = apply(&board, line[2], player).unwrap();
            assert_eq!(evaluate(&board), Outcome::Win(player));
        }
    }
}

#[test]
fn test_win_reported_only_for_uniform_full_lines() {
    for board in reachable_boards() {
        let uniform_line = LINES.iter().find_map(|[a, b, c]| match board.get(*a) {
            Square::Occupied(p)
                if board.get(*b) == Square::Occupied(p) && board.get(*c) == Square::Occupied(p) =>
            {
                Some(p)
            }
            _ => None,
        });
        match evaluate(&board) {
            Outcome::Win(winner) => assert_eq!(uniform_line, Some(winner)),
            Outcome::Draw => {
                assert!(uniform_line.is_none());
                assert!(board.is_full());
            }
            Outcome::InProgress => {
                assert!(uniform_line.is_none());
                assert!(!board.is_full());
            }
        }
    }
}

#[test]
fn test_apply_rejects_invalid_moves() {
    let board = apply(&Board::new(), Position::TopLeft, Player::X).unwrap();
    assert_eq!(
        apply(&board, Position::TopLeft, Player::O),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(
        apply_index(&board, 42, Player::O),
        Err(MoveError::OutOfRange(42))
    );
    let err = apply_index(&board, 0, Player::O).unwrap_err();
    assert!(err.to_string().contains("occupied"));
}
