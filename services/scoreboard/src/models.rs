use serde::{Deserialize, Serialize};
use types::errors::MatchError;
use types::ids::MatchId;
use types::score::PlayerIndex;

#[derive(Debug, Clone, Deserialize)]
pub struct StartMatchRequest {
    pub players: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartMatchResponse {
    pub match_id: MatchId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointRequest {
    pub match_id: String,
    pub player: PlayerField,
}

/// Raw `player` value of a point request
///
/// Any JSON number is accepted here, however large, so that out-of-range
/// values reach the store and come back as 400 rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PlayerField(serde_json::Number);

impl TryFrom<PlayerField> for PlayerIndex {
    type Error = MatchError;

    fn try_from(field: PlayerField) -> Result<Self, Self::Error> {
        match field.0.as_i64() {
            Some(index) => PlayerIndex::try_from(index),
            None => Err(MatchError::InvalidPlayer {
                index: field.0.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UndoRequest {
    pub match_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const OK: StatusResponse = StatusResponse { status: "ok" };
    pub const UNDONE: StatusResponse = StatusResponse { status: "undone" };
}
