//! Match record and point history
//!
//! A `Match` is mutated only through `record_point` and `undo_last_point`.
//! The game score is maintained incrementally and is never re-derived from
//! history, so a clamped undo can leave the two out of step.

use crate::score::{GameScore, PlayerIndex, SetScore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point won, as recorded in the match history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointEvent {
    /// Index of the player who won the point
    pub point: PlayerIndex,
    /// When the point was recorded
    pub time: DateTime<Utc>,
}

/// Live state of a single two-player match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Player names, index 0 and 1 fixed for the match lifetime
    ///
    /// Stored exactly as supplied at creation; arity is not enforced.
    pub players: Vec<String>,
    /// Per-set scores; starts with a single `[0, 0]` entry and is not advanced
    pub sets: Vec<SetScore>,
    /// Points in the current game
    pub game_score: GameScore,
    /// Points won, oldest first
    pub history: Vec<PointEvent>,
    /// Creation time
    pub start_time: DateTime<Utc>,
}

impl Match {
    /// Create a fresh match with zeroed scores and empty history
    pub fn new(players: Vec<String>, start_time: DateTime<Utc>) -> Self {
        Self {
            players,
            sets: vec![[0, 0]],
            game_score: GameScore::default(),
            history: Vec::new(),
            start_time,
        }
    }

    /// Credit a point to `player` and append it to history
    pub fn record_point(&mut self, player: PlayerIndex, at: DateTime<Utc>) {
        self.game_score.increment(player);
        self.history.push(PointEvent {
            point: player,
            time: at,
        });
    }

    /// Remove the most recent point and take it back from its winner
    ///
    /// Returns `None` when there is no history. The winner's score is
    /// clamped at zero; the history entry is removed either way.
    pub fn undo_last_point(&mut self) -> Option<PointEvent> {
        let last = self.history.pop()?;
        self.game_score.decrement_clamped(last.point);
        Some(last)
    }

    /// Number of history entries won by `player`
    pub fn points_won(&self, player: PlayerIndex) -> usize {
        self.history.iter().filter(|e| e.point == player).count()
    }

    /// Name of the player at `index`, if one was supplied
    pub fn player_name(&self, index: PlayerIndex) -> Option<&str> {
        self.players.get(index.as_usize()).map(String::as_str)
    }
}


// ── Property-Based Tests ────────────────────────────────────────────
