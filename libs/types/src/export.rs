//! Export projection of a match
//!
//! A reporting view shaped differently from the live snapshot: only the
//! first set is surfaced, the game score is flattened to `"p0-p1"`, and
//! history becomes a 1-based list of events naming the winner.

use crate::ids::MatchId;
use crate::record::Match;
use crate::score::SetScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match status as reported in the export view
///
/// Nothing transitions a match out of `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    InProgress,
}

/// Set scores surfaced by the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportScore {
    pub set1: SetScore,
}

/// One history entry in export form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEvent {
    /// 1-based position in the history
    pub point: usize,
    /// Name of the player who won the point; `None` if no name was supplied
    /// at that index
    pub winner: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Summary view of a match for external reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchExport {
    pub match_id: MatchId,
    pub players: Vec<String>,
    pub score: ExportScore,
    pub current_game_score: String,
    pub start_time: DateTime<Utc>,
    pub events: Vec<ExportEvent>,
    pub status: MatchStatus,
}

impl MatchExport {
    /// Build the export view of `record`
    pub fn from_match(match_id: MatchId, record: &Match) -> Self {
        let events = record
            .history
            .iter()
            .enumerate()
            .map(|(i, event)| ExportEvent {
                point: i + 1,
                winner: record.player_name(event.point).map(str::to_string),
                timestamp: event.time,
            })
            .collect();

        Self {
            match_id,
            players: record.players.clone(),
            score: ExportScore {
                set1: record.sets.first().copied().unwrap_or_default(),
            },
            current_game_score: record.game_score.to_string(),
            start_time: record.start_time,
            events,
            status: MatchStatus::InProgress,
        }
    }
}
