// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Dashboard assembly tests: records, years, partners, recent activity.

mod common;

use std::sync::Arc;

use common::{seed_stage, seed_trip, seed_user, test_state};
use wanderlog::config::Config;
use wanderlog::models::{ActivityKind, MetricPair, Spot, SurfSession};
use wanderlog::services::{ReferenceTable, StatsFilter};
use wanderlog::store::Store;
use wanderlog::AppState;

#[test]
fn test_records_are_deterministic_across_calls() {
    let state = test_state();
    seed_user(&state, 1, "alex");
    let trip = seed_trip(
        &state,
        "Ties",
        "2025-07-01",
        "2025-07-05",
        ActivityKind::Hiking,
        &[1],
    );
    // Two stages with identical resolved distance.
    for day in ["2025-07-02", "2025-07-03"] {
        let stage = seed_stage(&state, &trip, "Twin", day);
        let mut stage = state.store.get_stage(stage.id).unwrap();
        stage.metrics.length_km = MetricPair::calculated(15.0);
        state.store.update_stage(stage).unwrap();
    }

    let first = state
        .dashboard
        .dashboard(1, &StatsFilter::default())
        .unwrap();
    let winner = first.records.hiking.longest_by_km.clone().unwrap();
    for _ in 0..5 {
        let again = state
            .dashboard
            .dashboard(1, &StatsFilter::default())
            .unwrap();
        assert_eq!(
            again.records.hiking.longest_by_km.as_ref().unwrap().stage_id,
            winner.stage_id
        );
    }
    // Lowest id wins the tie.
    assert_eq!(winner.value, 15.0);
    let all_ids: Vec<u64> = state
        .store
        .stages_for_trip(trip.id)
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(winner.stage_id, *all_ids.iter().min().unwrap());
}

#[test]
fn test_best_wave_quality_tie_prefers_most_recent() {
    let state = test_state();
    seed_user(&state, 1, "alex");
    let trip = seed_trip(
        &state,
        "Quality",
        "2025-04-01",
        "2025-04-10",
        ActivityKind::Surfing,
        &[1],
    );
    for day in ["2025-04-02", "2025-04-05", "2025-04-03"] {
        let stage = seed_stage(&state, &trip, "Session", day);
        let mut stage = state.store.get_stage(stage.id).unwrap();
        stage.surf = Some(SurfSession {
            wave_quality: Some(5),
            ..SurfSession::default()
        });
        state.store.update_stage(stage).unwrap();
    }

    let dashboard = state
        .dashboard
        .dashboard(1, &StatsFilter::default())
        .unwrap();
    let best = dashboard.records.surfing.best_wave_quality.unwrap();
    assert_eq!(best.date.to_string(), "2025-04-05");
    assert_eq!(best.value, 5.0);
}

#[test]
fn test_available_years_ignore_active_filter() {
    let state = test_state();
    seed_user(&state, 1, "alex");
    for (name, start, end, stage_date) in [
        ("A", "2023-06-01", "2023-06-05", "2023-06-02"),
        ("B", "2024-12-30", "2025-01-02", "2024-12-31"),
        ("C", "2025-04-01", "2025-04-05", "2025-04-02"),
    ] {
        let trip = seed_trip(&state, name, start, end, ActivityKind::Hiking, &[1]);
        seed_stage(&state, &trip, name, stage_date);
    }
    // A stage-less trip contributes no year.
    seed_trip(&state, "Empty", "2020-01-01", "2020-01-03", ActivityKind::Hiking, &[1]);

    let filter = StatsFilter::from_params(None, Some("2023"));
    let dashboard = state.dashboard.dashboard(1, &filter).unwrap();

    assert_eq!(dashboard.selected_year, Some(2023));
    assert_eq!(dashboard.available_years, vec![2025, 2024, 2023]);
    // While totals honor the filter.
    assert_eq!(dashboard.totals.hiking.stage_count, 1);
}

#[test]
fn test_top_partners_ranking_and_last_shared_trip() {
    let state = test_state();
    for (id, name) in [(1, "alex"), (2, "bente"), (3, "chris"), (4, "dora"), (5, "emil")] {
        seed_user(&state, id, name);
    }

    // bente: 3 shared trips; chris: 2; dora and emil: 1 each (tie for the
    // third slot, lower id wins).
    seed_trip(&state, "T1", "2025-01-10", "2025-01-12", ActivityKind::Hiking, &[1, 2]);
    seed_trip(&state, "T2", "2025-02-10", "2025-02-12", ActivityKind::Hiking, &[1, 2, 3]);
    seed_trip(&state, "T3", "2025-03-10", "2025-03-12", ActivityKind::Hiking, &[1, 2, 3]);
    seed_trip(&state, "T4", "2025-04-10", "2025-04-12", ActivityKind::Hiking, &[1, 4]);
    seed_trip(&state, "T5", "2025-05-10", "2025-05-12", ActivityKind::Hiking, &[1, 5]);

    let dashboard = state
        .dashboard
        .dashboard(1, &StatsFilter::default())
        .unwrap();
    let partners = &dashboard.top_partners;
    assert_eq!(partners.len(), 3);

    assert_eq!(partners[0].username, "bente");
    assert_eq!(partners[0].shared_trip_count, 3);
    assert_eq!(
        partners[0].last_shared_trip.as_ref().unwrap().name,
        "T3"
    );

    assert_eq!(partners[1].username, "chris");
    assert_eq!(partners[1].shared_trip_count, 2);

    // Tie between dora (4) and emil (5): lower user id takes the slot.
    assert_eq!(partners[2].username, "dora");
    assert_eq!(partners[2].shared_trip_count, 1);
}

#[test]
fn test_recent_activity_decorates_surf_spot() {
    let reference = ReferenceTable::load_from_json(
        r#"{"countries": [{"code": "PT", "name": "Portugal", "flag": "🇵🇹"}]}"#,
    )
    .unwrap();
    let state = AppState::new(Config::default(), Arc::new(Store::new()), reference);

    seed_user(&state, 1, "alex");
    state.store.upsert_spot(Spot {
        id: 1,
        name: "Ericeira".to_string(),
        country_code: Some("PT".to_string()),
    });

    let hike_trip = seed_trip(&state, "Hike", "2025-06-01", "2025-06-03", ActivityKind::Hiking, &[1]);
    seed_stage(&state, &hike_trip, "Old hike", "2025-06-01");
    seed_stage(&state, &hike_trip, "New hike", "2025-06-02");

    let surf_trip = seed_trip(&state, "Surf", "2025-07-01", "2025-07-05", ActivityKind::Surfing, &[1]);
    let session = seed_stage(&state, &surf_trip, "Evening glass", "2025-07-02");
    let mut session = state.store.get_stage(session.id).unwrap();
    session.surf = Some(SurfSession {
        spot_id: Some(1),
        ..SurfSession::default()
    });
    state.store.update_stage(session).unwrap();

    let dashboard = state
        .dashboard
        .dashboard(1, &StatsFilter::default())
        .unwrap();

    let last_hike = dashboard.recent_activity.last_hike.unwrap();
    assert_eq!(last_hike.name, "New hike");
    assert_eq!(last_hike.location, None);

    let last_surf = dashboard.recent_activity.last_surf.unwrap();
    assert_eq!(last_surf.name, "Evening glass");
    assert_eq!(last_surf.location.as_deref(), Some("🇵🇹 Ericeira"));
}

#[test]
fn test_dashboard_for_unknown_user_is_not_found() {
    let state = test_state();
    assert!(state
        .dashboard
        .dashboard(404, &StatsFilter::default())
        .is_err());
}
