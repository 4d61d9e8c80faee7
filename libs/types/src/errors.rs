//! Error types for the match store
//!
//! Two kinds only. Undo on an empty history deliberately reports the same
//! `NotFound` as an unknown match id.

use thiserror::Error;

/// Match operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Match not found or has no history: {match_id}")]
    NotFound { match_id: String },

    #[error("Invalid player index: {index} (expected 0 or 1)")]
    InvalidPlayer { index: String },
}

impl MatchError {
    pub fn not_found(match_id: impl ToString) -> Self {
        MatchError::NotFound {
            match_id: match_id.to_string(),
        }
    }
}
