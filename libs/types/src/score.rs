//! Player indices and score pairs

use crate::errors::MatchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of players in a match
pub const PLAYER_COUNT: usize = 2;

/// Per-set score pair, one entry per player index
pub type SetScore = [u32; PLAYER_COUNT];

/// Position of a player within a match (0 or 1)
///
/// Serialized as a bare integer. Anything outside {0, 1} is rejected
/// with `MatchError::InvalidPlayer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PlayerIndex(u8);

impl PlayerIndex {
    pub const FIRST: PlayerIndex = PlayerIndex(0);
    pub const SECOND: PlayerIndex = PlayerIndex(1);

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<i64> for PlayerIndex {
    type Error = MatchError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::FIRST),
            1 => Ok(Self::SECOND),
            _ => Err(MatchError::InvalidPlayer {
                index: index.to_string(),
            }),
        }
    }
}

impl From<PlayerIndex> for i64 {
    fn from(player: PlayerIndex) -> Self {
        player.0 as i64
    }
}

impl fmt::Display for PlayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Point tally of the game currently in progress
///
/// Counts are unsigned; decrements saturate at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameScore([u32; PLAYER_COUNT]);

impl GameScore {
    pub fn new(first: u32, second: u32) -> Self {
        Self([first, second])
    }

    pub fn get(&self, player: PlayerIndex) -> u32 {
        self.0[player.as_usize()]
    }

    pub fn as_array(&self) -> [u32; PLAYER_COUNT] {
        self.0
    }

    /// Add one point for `player`
    pub fn increment(&mut self, player: PlayerIndex) {
        let slot = &mut self.0[player.as_usize()];
        *slot = slot.saturating_add(1);
    }

    /// Take one point from `player`, never going below zero
    ///
    /// Returns false when the score was already zero and nothing changed.
    pub fn decrement_clamped(&mut self, player: PlayerIndex) -> bool {
        let slot = &mut self.0[player.as_usize()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// Renders as `"<p0>-<p1>"`, e.g. `"3-1"`
impl fmt::Display for GameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}
