//! Win/loss/draw tallies per game mode.
//!
//! Kept in memory. [`Scoreboard::to_json`] and [`Scoreboard::from_json`]
//! give callers a stable shape to store wherever they like.

use crate::session::{GameMode, MatchResult};
use derive_getters::Getters;
use noughts_core::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tally for one game mode, from player 1's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Record {
    /// Games won.
    wins: u32,
    /// Games lost.
    losses: u32,
    /// Games drawn.
    draws: u32,
}

impl Record {
    /// Games played.
    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Wins as a percentage of games played, 0 when none were played.
    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    /// Losses as a percentage of games played.
    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    /// Draws as a percentage of games played.
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    fn rate(&self, count: u32) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(count) * 100.0 / f64::from(total),
        }
    }

    fn add(&mut self, result: MatchResult) {
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Loss => self.losses += 1,
            MatchResult::Draw => self.draws += 1,
        }
    }
}

/// Records for every game mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pvp: Record,
    #[serde(default)]
    pve_easy: Record,
    #[serde(default)]
    pve_medium: Record,
    #[serde(default)]
    pve_hard: Record,
}

impl Scoreboard {
    /// Empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished game to the tally for `mode`.
    #[instrument(skip(self))]
    pub fn record(&mut self, mode: GameMode, result: MatchResult) {
        let record = self.record_mut(mode);
        record.add(result);
        debug!(score_key = mode.score_key(), total = record.total(), "Result recorded");
    }

    /// Tally for `mode`.
    pub fn record_for(&self, mode: GameMode) -> &Record {
        match mode {
            GameMode::PlayerVsPlayer => &self.pvp,
            GameMode::PlayerVsComputer(Difficulty::Easy) => &self.pve_easy,
            GameMode::PlayerVsComputer(Difficulty::Medium) => &self.pve_medium,
            GameMode::PlayerVsComputer(Difficulty::Hard) => &self.pve_hard,
        }
    }

    /// Serializes as `{"pvp": {"wins": .., "losses": .., "draws": ..}, ...}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses the shape produced by [`Scoreboard::to_json`]. Missing modes
    /// start at zero.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn record_mut(&mut self, mode: GameMode) -> &mut Record {
        match mode {
            GameMode::PlayerVsPlayer => &mut self.pvp,
            GameMode::PlayerVsComputer(Difficulty::Easy) => &mut self.pve_easy,
            GameMode::PlayerVsComputer(Difficulty::Medium) => &mut self.pve_medium,
            GameMode::PlayerVsComputer(Difficulty::Hard) => &mut self.pve_hard,
        }
    }
}
