// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Wanderlog demo runner.
//!
//! Seeds an in-memory store with a couple of trips (the same shape the
//! production seed scripts create), runs the metric pipeline on a small
//! track, and prints the demo user's dashboard document as JSON.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wanderlog::{
    config::Config,
    models::{
        ActivityKind, Board, MetricPair, RawTrackPoint, Spot, Stage, StageMetrics, SurfSession,
        TideStage, Trip, User,
    },
    services::{ReferenceTable, StatsFilter},
    store::Store,
    AppState,
};

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env();
    tracing::info!(demo_user = %config.demo_user, "Starting Wanderlog demo");

    // Load reference data; an absent file just means no flags.
    let reference = match ReferenceTable::load_from_file(&config.reference_data_path) {
        Ok(table) => table,
        Err(err) => {
            tracing::warn!(path = %config.reference_data_path, error = %err, "Reference data unavailable");
            ReferenceTable::default()
        }
    };

    let store = Arc::new(Store::new());
    let state = AppState::new(config, store, reference);

    let demo_user_id = seed_demo_data(&state)?;

    let filter = StatsFilter {
        activity: None,
        year: state.config.dashboard_year,
    };
    let stats = state.stats.user_stats(demo_user_id, &filter)?;
    tracing::info!(
        trips = stats.trip_count,
        stages = stats.stage_count,
        distance_km = stats.total_distance_km,
        "Computed demo user stats"
    );

    let dashboard = state.dashboard.dashboard(demo_user_id, &filter)?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}

/// Seed users, one hiking trip with a computed track, and one surf trip.
/// Returns the demo user's id.
fn seed_demo_data(state: &AppState) -> anyhow::Result<u64> {
    let store = &state.store;

    store.upsert_user(User {
        id: 1,
        username: state.config.demo_user.clone(),
        email: format!("{}@example.com", state.config.demo_user),
    });
    store.upsert_user(User {
        id: 2,
        username: "bente".to_string(),
        email: "bente@example.com".to_string(),
    });
    store.upsert_user(User {
        id: 3,
        username: "chris".to_string(),
        email: "chris@example.com".to_string(),
    });

    store.upsert_board(Board {
        id: 1,
        name: "6'2 Shortboard".to_string(),
    });
    store.upsert_spot(Spot {
        id: 1,
        name: "Ericeira".to_string(),
        country_code: Some("PT".to_string()),
    });

    // Hiking trip spanning New Year, so it shows up in two year filters.
    let hike_trip = store.create_trip(Trip {
        id: 0,
        name: "Silvester im Karwendel".to_string(),
        description: "Year-end hut tour".to_string(),
        start_date: "2024-12-30".parse()?,
        end_date: "2025-01-02".parse()?,
        activity: ActivityKind::Hiking,
        creator_id: 1,
        participant_ids: vec![1, 2],
    });

    let stage = store.create_stage(Stage {
        id: 0,
        trip_id: hike_trip.id,
        creator_id: 1,
        name: "Zum Hallerangerhaus".to_string(),
        date: "2024-12-30".parse()?,
        activity: None,
        metrics: StageMetrics::default(),
        surf: None,
        external_link: None,
    })?;

    // A short synthetic climb; the calculator fills the stage's
    // calculated metrics.
    let track_start = "2024-12-30T08:00:00Z".parse::<chrono::DateTime<chrono::Utc>>()?;
    let track: Vec<RawTrackPoint> = (0..20)
        .map(|i| RawTrackPoint {
            lat: 47.30 + 0.002 * f64::from(i),
            lon: 11.45,
            ele: Some(900.0 + 25.0 * f64::from(i)),
            time: Some(track_start + chrono::Duration::minutes(12 * i64::from(i))),
        })
        .collect();
    state.tracks.replace_track(stage.id, track)?;

    // Surf trip with manually entered session data.
    let surf_trip = store.create_trip(Trip {
        id: 0,
        name: "Ericeira Spring".to_string(),
        description: String::new(),
        start_date: "2025-04-12".parse()?,
        end_date: "2025-04-19".parse()?,
        activity: ActivityKind::Surfing,
        creator_id: 1,
        participant_ids: vec![1, 3],
    });

    store.create_stage(Stage {
        id: 0,
        trip_id: surf_trip.id,
        creator_id: 1,
        name: "Ribeira d'Ilhas morning".to_string(),
        date: "2025-04-13".parse()?,
        activity: None,
        metrics: StageMetrics {
            duration_s: MetricPair::manual(2 * 3600),
            ..StageMetrics::default()
        },
        surf: Some(SurfSession {
            wave_height_m: Some(1.4),
            wave_quality: Some(4),
            time_in_water_s: Some(2 * 3600),
            waves_caught: Some(18),
            water_temperature_c: Some(16.5),
            tide: Some(TideStage::Mid),
            board_id: Some(1),
            spot_id: Some(1),
        }),
        external_link: None,
    })?;

    tracing::info!("Demo data seeded");
    Ok(1)
}

/// Initialize structured logging; `RUST_LOG` overrides the defaults.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wanderlog=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
