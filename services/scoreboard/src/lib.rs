//! Scoreboard service
//!
//! Tracks live score state for two-player matches over HTTP: start a match,
//! record points, undo the last point, read the current state and export a
//! summary. All state is held in memory by [`store::MatchStore`] for the
//! lifetime of the process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
pub mod store;

// Service version
pub const SERVICE_VERSION: &str = "0.1.0";
