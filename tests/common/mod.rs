// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

use std::sync::Arc;

use wanderlog::config::Config;
use wanderlog::models::{ActivityKind, Stage, StageMetrics, Trip, User};
use wanderlog::services::ReferenceTable;
use wanderlog::store::Store;
use wanderlog::AppState;

/// Build an application state around a fresh in-memory store.
#[allow(dead_code)]
pub fn test_state() -> AppState {
    AppState::new(
        Config::default(),
        Arc::new(Store::new()),
        ReferenceTable::default(),
    )
}

#[allow(dead_code)]
pub fn seed_user(state: &AppState, id: u64, username: &str) -> User {
    let user = User {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
    };
    state.store.upsert_user(user.clone());
    user
}

/// Create a trip with the given participants.
#[allow(dead_code)]
pub fn seed_trip(
    state: &AppState,
    name: &str,
    start: &str,
    end: &str,
    activity: ActivityKind,
    participants: &[u64],
) -> Trip {
    state.store.create_trip(Trip {
        id: 0,
        name: name.to_string(),
        description: String::new(),
        start_date: start.parse().expect("valid start date"),
        end_date: end.parse().expect("valid end date"),
        activity,
        creator_id: participants.first().copied().unwrap_or(1),
        participant_ids: participants.to_vec(),
    })
}

/// Create a bare stage inside a trip; metrics can be set by the caller.
#[allow(dead_code)]
pub fn seed_stage(state: &AppState, trip: &Trip, name: &str, date: &str) -> Stage {
    state
        .store
        .create_stage(Stage {
            id: 0,
            trip_id: trip.id,
            creator_id: trip.creator_id,
            name: name.to_string(),
            date: date.parse().expect("valid stage date"),
            activity: None,
            metrics: StageMetrics::default(),
            surf: None,
            external_link: None,
        })
        .expect("stage creation should succeed")
}
