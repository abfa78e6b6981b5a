//! Noughts - command-line front end for the move engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{
    AppConfig, Board, Difficulty, Engine, GameMode, MatchResult, Player, Scoreboard, self_play,
};
use noughts_core::MarkBalance;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_seed(cli.seed);
    let engine = config.build_engine()?;
    let mut rng = config.rng();

    match cli.command {
        Command::Decide {
            board,
            difficulty,
            ai,
        } => {
            let ai = ai.unwrap_or_else(|| MarkBalance::to_move(&board));
            run_decide(&engine, &board, difficulty, ai, &mut rng)
        }
        Command::Selfplay { x, o, games, json } => {
            run_selfplay(&engine, x, o, games, json, &mut rng)
        }
    }
}

/// Prints the chosen square index for one board.
#[instrument(skip(engine, board, rng), fields(board = %board))]
fn run_decide(
    engine: &Engine,
    board: &Board,
    difficulty: Difficulty,
    ai: Player,
    rng: &mut StdRng,
) -> Result<()> {
    let position = engine.decide(board, difficulty, ai, rng)?;
    info!(%position, "Decision made");
    println!("{}", position.to_index());
    Ok(())
}

/// Plays `games` engine games and prints the tally from X's side.
#[instrument(skip(engine, rng))]
fn run_selfplay(
    engine: &Engine,
    x: Difficulty,
    o: Difficulty,
    games: u32,
    json: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let mut scoreboard = Scoreboard::new();
    for game_number in 0..games {
        let game = self_play(engine, x, o, rng)?;
        let result = game
            .result()
            .ok_or_else(|| anyhow::anyhow!("Game {} ended without a result", game_number))?;
        scoreboard.record(GameMode::PlayerVsPlayer, result);
        if result == MatchResult::Loss {
            info!(game_number, board = %game.board(), "O won");
        }
    }

    if json {
        println!("{}", scoreboard.to_json()?);
    } else {
        let record = scoreboard.record_for(GameMode::PlayerVsPlayer);
        println!(
            "X ({x}) vs O ({o}) over {} games: \
             {} X wins ({:.1}%), {} O wins ({:.1}%), {} draws ({:.1}%)",
            record.total(),
            record.wins(),
            record.win_rate(),
            record.losses(),
            record.loss_rate(),
            record.draws(),
            record.draw_rate(),
        );
    }
    Ok(())
}
