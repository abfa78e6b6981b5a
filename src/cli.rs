//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::{Board, Difficulty, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe move engine
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe move engine with three difficulty tiers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the random source (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Choose a move for one board
    Decide {
        /// Board as nine cells, row by row: X, O, or . for empty ("XO./.X./...")
        #[arg(short, long)]
        board: Board,

        /// Difficulty tier: easy, medium, or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Mark the engine plays: X or O (default: the side to move)
        #[arg(short, long)]
        ai: Option<Player>,
    },

    /// Play engine against engine and tally the results
    Selfplay {
        /// Difficulty for X
        #[arg(long, default_value = "hard")]
        x: Difficulty,

        /// Difficulty for O
        #[arg(long, default_value = "hard")]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Print the scoreboard as JSON
        #[arg(long)]
        json: bool,
    },
}
