//! Types library for the live match scoreboard
//!
//! This library provides the match state model shared by the scoreboard
//! service: identifiers, the match record with its mutation rules, the
//! export projection and the error taxonomy.
//!
//! # Modules
//! - `ids`: Unique identifiers (MatchId)
//! - `score`: Player indices and score pairs (PlayerIndex, GameScore, SetScore)
//! - `record`: The match record and its point history (Match, PointEvent)
//! - `export`: Reporting projection of a match (MatchExport)
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod score;
pub mod record;
pub mod export;
pub mod errors;
