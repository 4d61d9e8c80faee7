//! In-memory match store
//!
//! Holds every live match for the lifetime of the process. There is no
//! eviction and no delete.
//!
//! Each mutation runs while holding the `DashMap` entry guard for its match,
//! so concurrent requests against the same match are serialized and no
//! point is lost. Requests against different matches only contend when they
//! hash to the same shard.

use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info};
use types::errors::MatchError;
use types::export::MatchExport;
use types::ids::MatchId;
use types::record::{Match, PointEvent};
use types::score::{GameScore, PlayerIndex};

pub struct MatchStore {
    matches: DashMap<MatchId, Match>,
}

impl MatchStore {
    pub fn new() -> Self {
        Self {
            matches: DashMap::new(),
        }
    }

    /// Start a new match and return its id
    ///
    /// `players` is stored as given, whatever its length.
    pub fn create(&self, players: Vec<String>) -> MatchId {
        let match_id = MatchId::new();
        info!(%match_id, players = ?players, "Match started");
        self.matches.insert(match_id, Match::new(players, Utc::now()));
        match_id
    }

    /// Credit a point to `player` (which must resolve to 0 or 1)
    ///
    /// The raw value is only converted once the match is found, so an
    /// unknown match is reported before an invalid player index.
    pub fn add_point<P>(&self, match_id: &MatchId, player: P) -> Result<GameScore, MatchError>
    where
        P: TryInto<PlayerIndex, Error = MatchError>,
    {
        let mut entry = self
            .matches
            .get_mut(match_id)
            .ok_or_else(|| MatchError::not_found(match_id))?;
        let player = player.try_into()?;

        entry.record_point(player, Utc::now());
        debug!(
            %match_id,
            %player,
            score = %entry.game_score,
            history_len = entry.history.len(),
            "Point recorded"
        );
        Ok(entry.game_score)
    }

    /// Remove the most recent point of a match
    ///
    /// An empty history yields the same `NotFound` as an unknown match.
    pub fn undo_point(&self, match_id: &MatchId) -> Result<PointEvent, MatchError> {
        let mut entry = self
            .matches
            .get_mut(match_id)
            .ok_or_else(|| MatchError::not_found(match_id))?;
        let undone = entry
            .undo_last_point()
            .ok_or_else(|| MatchError::not_found(match_id))?;

        debug!(
            %match_id,
            player = %undone.point,
            score = %entry.game_score,
            history_len = entry.history.len(),
            "Point undone"
        );
        Ok(undone)
    }

    /// Snapshot of the current match state
    pub fn get(&self, match_id: &MatchId) -> Result<Match, MatchError> {
        self.matches
            .get(match_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| MatchError::not_found(match_id))
    }

    /// Export view of a match
    pub fn export(&self, match_id: &MatchId) -> Result<MatchExport, MatchError> {
        self.matches
            .get(match_id)
            .map(|entry| MatchExport::from_match(*match_id, entry.value()))
            .ok_or_else(|| MatchError::not_found(match_id))
    }

    /// Number of matches held
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl Default for MatchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn players() -> Vec<String> {
        vec!["A".to_string(), "B".to_string()]
    }

    #[test]
    fn test_create_initial_state() {
        let store = MatchStore::new();
        let id = store.create(players());

        let snapshot = store.get(&id).unwrap();
        assert_eq!(snapshot.players, players());
        assert_eq!(snapshot.game_score.as_array(), [0, 0]);
        assert_eq!(snapshot.sets, vec![[0, 0]]);
        assert!(snapshot.history.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_returns_fresh_ids() {
        let store = MatchStore::new();
        let a = store.create(players());
        let b = store.create(players());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_accepts_any_player_list() {
        let store = MatchStore::new();
        let empty = store.create(Vec::new());
        let crowd = store.create(vec!["A".into(), "B".into(), "C".into()]);

        assert!(store.get(&empty).unwrap().players.is_empty());
        assert_eq!(store.get(&crowd).unwrap().players.len(), 3);
    }

    #[test]
    fn test_add_point() {
        let store = MatchStore::new();
        let id = store.create(players());

        store.add_point(&id, 0i64).unwrap();
        store.add_point(&id, 1i64).unwrap();
        let score = store.add_point(&id, 0i64).unwrap();
        assert_eq!(score.as_array(), [2, 1]);

        let snapshot = store.get(&id).unwrap();
        assert_eq!(snapshot.game_score, score);
        assert_eq!(snapshot.history.len(), 3);
        assert_eq!(snapshot.history[1].point, PlayerIndex::SECOND);
    }

    #[test]
    fn test_add_point_unknown_match() {
        let store = MatchStore::new();
        let missing = MatchId::new();
        assert!(matches!(
            store.add_point(&missing, 0i64),
            Err(MatchError::NotFound { .. })
        ));
        // Unknown match wins over a bad index
        assert!(matches!(
            store.add_point(&missing, 7i64),
            Err(MatchError::NotFound { .. })
        ));
    }

    #[test]
    fn test_add_point_invalid_player_leaves_state() {
        let store = MatchStore::new();
        let id = store.create(players());
        store.add_point(&id, 1i64).unwrap();
        let before = store.get(&id).unwrap();

        assert_eq!(
            store.add_point(&id, 2i64),
            Err(MatchError::InvalidPlayer {
                index: "2".to_string()
            })
        );
        assert_eq!(
            store.add_point(&id, -1i64),
            Err(MatchError::InvalidPlayer {
                index: "-1".to_string()
            })
        );
        assert_eq!(store.get(&id).unwrap(), before);
    }

    #[test]
    fn test_undo_restores_previous_score() {
        let store = MatchStore::new();
        let id = store.create(players());
        store.add_point(&id, 1i64).unwrap();
        let before = store.get(&id).unwrap();

        store.add_point(&id, 0i64).unwrap();
        let undone = store.undo_point(&id).unwrap();

        assert_eq!(undone.point, PlayerIndex::FIRST);
        assert_eq!(store.get(&id).unwrap(), before);
    }

    #[test]
    fn test_undo_empty_and_unknown_are_indistinguishable() {
        let store = MatchStore::new();
        let id = store.create(players());
        let missing = MatchId::new();

        let empty_err = store.undo_point(&id).unwrap_err();
        let missing_err = store.undo_point(&missing).unwrap_err();
        assert!(matches!(empty_err, MatchError::NotFound { .. }));
        assert!(matches!(missing_err, MatchError::NotFound { .. }));
        assert_eq!(
            std::mem::discriminant(&empty_err),
            std::mem::discriminant(&missing_err)
        );
    }

    #[test]
    fn test_get_is_idempotent() {
        let store = MatchStore::new();
        let id = store.create(players());
        store.add_point(&id, 0i64).unwrap();

        assert_eq!(store.get(&id).unwrap(), store.get(&id).unwrap());
    }

    #[test]
    fn test_get_and_export_unknown_match() {
        let store = MatchStore::new();
        let missing = MatchId::new();
        assert!(matches!(store.get(&missing), Err(MatchError::NotFound { .. })));
        assert!(matches!(store.export(&missing), Err(MatchError::NotFound { .. })));
    }

    #[test]
    fn test_export_matches_state() {
        let store = MatchStore::new();
        let id = store.create(players());
        for p in [0i64, 0, 1, 0] {
            store.add_point(&id, p).unwrap();
        }

        let snapshot = store.get(&id).unwrap();
        let export = store.export(&id).unwrap();
        assert_eq!(export.match_id, id);
        assert_eq!(export.current_game_score, "3-1");
        assert_eq!(export.events.len(), snapshot.history.len());
        assert_eq!(export.events[2].winner.as_deref(), Some("B"));
    }

    #[test]
    fn test_concurrent_points_are_not_lost() {
        let store = Arc::new(MatchStore::new());
        let id = store.create(players());

        let handles: Vec<_> = (0..8)
            .map(|t: i64| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..250 {
                        store.add_point(&id, t % 2).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = store.get(&id).unwrap();
        assert_eq!(snapshot.game_score.as_array(), [1000, 1000]);
        assert_eq!(snapshot.history.len(), 2000);
    }
}
