//! Unique identifier types for scoreboard entities
//!
//! IDs use UUID v7 so matches sort by creation time when listed or logged.

use crate::errors::MatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a match
///
/// Opaque to clients: it is handed out by the store on creation and
/// echoed back on every subsequent request. Only the exact spelling that
/// was handed out (lowercase, hyphenated) names the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    /// Create a new MatchId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| MatchError::not_found(s))?;
        // Uuid also accepts uppercase, simple and urn spellings
        if id.to_string() != s {
            return Err(MatchError::not_found(s));
        }
        Ok(id)
    }
}
