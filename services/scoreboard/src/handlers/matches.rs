use crate::error::AppError;
use crate::models::{PointRequest, StartMatchRequest, StartMatchResponse, StatusResponse, UndoRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use types::errors::MatchError;
use types::export::MatchExport;
use types::ids::MatchId;
use types::record::Match;

/// Resolve a client-supplied match id
///
/// Anything other than the exact id handed out by `start_match` cannot
/// name a match, so it is reported as not found.
fn parse_match_id(raw: &str) -> Result<MatchId, AppError> {
    raw.parse().map_err(|err: MatchError| {
        tracing::warn!(match_id = raw, "Malformed match id");
        AppError::from(err)
    })
}

fn log_rejection(match_id: &MatchId, err: MatchError) -> AppError {
    tracing::warn!(%match_id, error = %err, "Request rejected");
    err.into()
}

pub async fn start_match(
    State(state): State<AppState>,
    Json(payload): Json<StartMatchRequest>,
) -> Json<StartMatchResponse> {
    let match_id = state.store.create(payload.players);
    Json(StartMatchResponse { match_id })
}

pub async fn add_point(
    State(state): State<AppState>,
    Json(payload): Json<PointRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let match_id = parse_match_id(&payload.match_id)?;
    state
        .store
        .add_point(&match_id, payload.player)
        .map_err(|e| log_rejection(&match_id, e))?;

    Ok(Json(StatusResponse::OK))
}

pub async fn undo_point(
    State(state): State<AppState>,
    Json(payload): Json<UndoRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let match_id = parse_match_id(&payload.match_id)?;
    state
        .store
        .undo_point(&match_id)
        .map_err(|e| log_rejection(&match_id, e))?;

    Ok(Json(StatusResponse::UNDONE))
}

pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<Match>, AppError> {
    let match_id = parse_match_id(&match_id)?;
    let snapshot = state
        .store
        .get(&match_id)
        .map_err(|e| log_rejection(&match_id, e))?;

    Ok(Json(snapshot))
}

pub async fn export_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchExport>, AppError> {
    let match_id = parse_match_id(&match_id)?;
    let export = state
        .store
        .export(&match_id)
        .map_err(|e| log_rejection(&match_id, e))?;

    Ok(Json(export))
}
