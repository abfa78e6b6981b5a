//! Tests for the match driver and scoreboard working together.

use noughts::{
    Difficulty, Engine, GameMode, Match, MatchResult, Outcome, Player, Position, Scoreboard,
    legal_moves, self_play,
};
use noughts_core::MarkBalance;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Plays the human side by always taking the lowest free square.
fn play_against_computer(difficulty: Difficulty, seed: u64) -> Match {
    let engine = Engine::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Match::new(GameMode::PlayerVsComputer(difficulty), 0);
    while !game.is_over() {
        if game.to_move() == Player::X {
            let position = legal_moves(&game.board())[0];
            game.play(position).unwrap();
        } else {
            game.computer_move(&engine, &mut rng).unwrap();
        }
    }
    game
}

fn x_wins_top_row(game: &mut Match) {
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomRight,
        Position::TopRight,
    ] {
        game.play(pos).unwrap();
    }
}

#[test]
fn test_hard_computer_never_loses_to_scripted_human() {
    for seed in 0..5 {
        let game = play_against_computer(Difficulty::Hard, seed);
        assert_ne!(game.result(), Some(MatchResult::Win), "seed {}", seed);
        assert_ne!(game.outcome(), Outcome::InProgress);
    }
}

#[test]
fn test_every_difficulty_finishes_a_game() {
    let mut scoreboard = Scoreboard::new();
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let game = play_against_computer(difficulty, 21);
        let result = game.result().unwrap();
        scoreboard.record(game.mode(), result);
        assert_eq!(scoreboard.record_for(game.mode()).total(), 1);
    }
    assert_eq!(scoreboard.record_for(GameMode::PlayerVsPlayer).total(), 0);
}

#[test]
fn test_history_matches_board() {
    let game = play_against_computer(Difficulty::Easy, 4);
    for mv in game.history() {
        assert_eq!(
            game.board().get(mv.position()),
            noughts_core::Square::Occupied(mv.player())
        );
    }
    assert_eq!(game.history()[0].player(), Player::X);
}

#[test]
fn test_turn_follows_mark_count() {
    let engine = Engine::default();
    let mut rng = StdRng::seed_from_u64(13);
    let game = self_play(&engine, Difficulty::Easy, Difficulty::Easy, &mut rng).unwrap();

    let mut replay = Match::new(GameMode::PlayerVsPlayer, 0);
    for mv in game.history() {
        assert_eq!(replay.to_move(), MarkBalance::to_move(&replay.board()));
        assert_eq!(replay.to_move(), mv.player());
        replay.play(mv.position()).unwrap();
    }
    assert_eq!(replay.board(), game.board());
}

#[test]
fn test_pvp_results_follow_alternating_seats() {
    let mut scoreboard = Scoreboard::new();
    for games_played in 0..2 {
        let mut game = Match::new(GameMode::PlayerVsPlayer, games_played);
        x_wins_top_row(&mut game);
        scoreboard.record(game.mode(), game.result().unwrap());
    }
    let record = scoreboard.record_for(GameMode::PlayerVsPlayer);
    assert_eq!(*record.wins(), 1);
    assert_eq!(*record.losses(), 1);
    assert_eq!(record.win_rate(), 50.0);
}

#[test]
fn test_scoreboard_json_shape() {
    let mut scoreboard = Scoreboard::new();
    scoreboard.record(
        GameMode::PlayerVsComputer(Difficulty::Medium),
        MatchResult::Loss,
    );
    let json: serde_json::Value = serde_json::from_str(&scoreboard.to_json().unwrap()).unwrap();
    assert_eq!(json["pve_medium"]["losses"], 1);
    assert_eq!(json["pvp"]["wins"], 0);

    let partial =
        Scoreboard::from_json(r#"{"pvp": {"wins": 2, "losses": 0, "draws": 1}}"#).unwrap();
    assert_eq!(partial.record_for(GameMode::PlayerVsPlayer).total(), 3);
    assert_eq!(
        partial
            .record_for(GameMode::PlayerVsComputer(Difficulty::Hard))
            .total(),
        0
    );
}

#[test]
fn test_easy_against_hard_self_play_never_favours_easy() {
    let engine = Engine::default();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let game = self_play(&engine, Difficulty::Easy, Difficulty::Hard, &mut rng).unwrap();
        assert_ne!(game.outcome(), Outcome::Win(Player::X));
    }
}
