// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! In-memory store with typed operations.
//!
//! Provides high-level operations for:
//! - Users, boards and spots (reference entities)
//! - Trips and stages
//! - Track points, replaced wholesale together with calculated metrics
//!
//! Backed by sharded concurrent maps so aggregation reads can run alongside
//! unrelated writes without extra locking. The one operation that needs
//! atomicity — track replacement — holds the stage entry lock while it swaps
//! both the point set and the calculated metrics, so a reader never observes
//! points from one replacement paired with metrics from another.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::error::{AppError, Result};
use crate::models::{Board, Spot, Stage, TrackMetrics, TrackPoint, Trip, User};

/// Application data store.
#[derive(Default)]
pub struct Store {
    users: DashMap<u64, User>,
    boards: DashMap<u64, Board>,
    spots: DashMap<u64, Spot>,
    trips: DashMap<u64, Trip>,
    stages: DashMap<u64, Stage>,
    /// Track points keyed by stage id. Absent entry means "no track data".
    tracks: DashMap<u64, Vec<TrackPoint>>,
    next_id: AtomicU64,
}

impl Store {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Create or update a user (identity comes from the auth layer).
    pub fn upsert_user(&self, user: User) {
        self.users.insert(user.id, user);
    }

    pub fn get_user(&self, user_id: u64) -> Option<User> {
        self.users.get(&user_id).map(|u| u.clone())
    }

    // ─── Board / Spot Operations ─────────────────────────────────

    pub fn upsert_board(&self, board: Board) {
        self.boards.insert(board.id, board);
    }

    pub fn get_board(&self, board_id: u64) -> Option<Board> {
        self.boards.get(&board_id).map(|b| b.clone())
    }

    pub fn upsert_spot(&self, spot: Spot) {
        self.spots.insert(spot.id, spot);
    }

    pub fn get_spot(&self, spot_id: u64) -> Option<Spot> {
        self.spots.get(&spot_id).map(|s| s.clone())
    }

    // ─── Trip Operations ─────────────────────────────────────────

    /// Store a trip, assigning its id. The passed-in id is ignored.
    pub fn create_trip(&self, mut trip: Trip) -> Trip {
        trip.id = self.next_id();
        self.trips.insert(trip.id, trip.clone());
        trip
    }

    pub fn get_trip(&self, trip_id: u64) -> Option<Trip> {
        self.trips.get(&trip_id).map(|t| t.clone())
    }

    pub fn update_trip(&self, trip: Trip) -> Result<()> {
        if !self.trips.contains_key(&trip.id) {
            return Err(AppError::not_found("trip", trip.id));
        }
        self.trips.insert(trip.id, trip);
        Ok(())
    }

    /// All trips where the given user participates, newest first.
    pub fn trips_for_user(&self, user_id: u64) -> Vec<Trip> {
        let mut trips: Vec<Trip> = self
            .trips
            .iter()
            .filter(|t| t.has_participant(user_id))
            .map(|t| t.clone())
            .collect();
        trips.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(a.id.cmp(&b.id)));
        trips
    }

    // ─── Stage Operations ────────────────────────────────────────

    /// Store a stage, assigning its id. Fails if the owning trip is missing.
    pub fn create_stage(&self, mut stage: Stage) -> Result<Stage> {
        if !self.trips.contains_key(&stage.trip_id) {
            return Err(AppError::not_found("trip", stage.trip_id));
        }
        stage.id = self.next_id();
        self.stages.insert(stage.id, stage.clone());
        Ok(stage)
    }

    pub fn get_stage(&self, stage_id: u64) -> Option<Stage> {
        self.stages.get(&stage_id).map(|s| s.clone())
    }

    pub fn update_stage(&self, stage: Stage) -> Result<()> {
        if !self.stages.contains_key(&stage.id) {
            return Err(AppError::not_found("stage", stage.id));
        }
        self.stages.insert(stage.id, stage);
        Ok(())
    }

    /// Stages of one trip, ordered by date then id. Keyed only by trip
    /// membership — the participant relation never enters this query.
    pub fn stages_for_trip(&self, trip_id: u64) -> Vec<Stage> {
        let mut stages: Vec<Stage> = self
            .stages
            .iter()
            .filter(|s| s.trip_id == trip_id)
            .map(|s| s.clone())
            .collect();
        stages.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        stages
    }

    // ─── Track Operations ────────────────────────────────────────

    pub fn track_points(&self, stage_id: u64) -> Vec<TrackPoint> {
        self.tracks
            .get(&stage_id)
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    /// Atomically replace a stage's track and calculated metrics.
    ///
    /// Everything fallible (normalization, metric computation) happens
    /// before this call; here we only swap state under the stage entry
    /// lock. An empty point set clears the stored track.
    pub fn replace_track_atomic(
        &self,
        stage_id: u64,
        points: Vec<TrackPoint>,
        metrics: &TrackMetrics,
    ) -> Result<()> {
        let mut stage = self
            .stages
            .get_mut(&stage_id)
            .ok_or_else(|| AppError::not_found("stage", stage_id))?;

        if points.is_empty() {
            self.tracks.remove(&stage_id);
        } else {
            self.tracks.insert(stage_id, points);
        }
        stage.metrics.apply_calculated(metrics);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityKind, StageMetrics};

    fn test_trip() -> Trip {
        Trip {
            id: 0,
            name: "Dolomites".to_string(),
            description: String::new(),
            start_date: "2025-07-01".parse().unwrap(),
            end_date: "2025-07-05".parse().unwrap(),
            activity: ActivityKind::Hiking,
            creator_id: 1,
            participant_ids: vec![1, 2],
        }
    }

    fn test_stage(trip_id: u64, date: &str) -> Stage {
        Stage {
            id: 0,
            trip_id,
            creator_id: 1,
            name: "Stage".to_string(),
            date: date.parse().unwrap(),
            activity: None,
            metrics: StageMetrics::default(),
            surf: None,
            external_link: None,
        }
    }

    #[test]
    fn test_create_stage_requires_existing_trip() {
        let store = Store::new();
        let err = store.create_stage(test_stage(42, "2025-07-02")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_stages_for_trip_ordered_by_date_then_id() {
        let store = Store::new();
        let trip = store.create_trip(test_trip());
        let s1 = store.create_stage(test_stage(trip.id, "2025-07-03")).unwrap();
        let s2 = store.create_stage(test_stage(trip.id, "2025-07-02")).unwrap();
        let s3 = store.create_stage(test_stage(trip.id, "2025-07-03")).unwrap();

        let ids: Vec<u64> = store
            .stages_for_trip(trip.id)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![s2.id, s1.id, s3.id]);
    }

    #[test]
    fn test_trips_for_user_filters_by_participation() {
        let store = Store::new();
        let trip = store.create_trip(test_trip());
        assert_eq!(store.trips_for_user(1).len(), 1);
        assert_eq!(store.trips_for_user(2).len(), 1);
        assert!(store.trips_for_user(3).is_empty());
        assert_eq!(store.trips_for_user(1)[0].id, trip.id);
    }

    #[test]
    fn test_replace_track_on_missing_stage_is_not_found() {
        let store = Store::new();
        let err = store
            .replace_track_atomic(999, Vec::new(), &TrackMetrics::empty())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
