// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Wanderlog: track multi-day hiking and surfing trips.
//!
//! This crate is the metric-derivation and statistics core behind the
//! Wanderlog API: it turns raw GPS track samples into stage metrics,
//! resolves manual-vs-calculated precedence, and rolls stage metrics up
//! into trip, user and dashboard aggregates.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

use std::sync::Arc;

use config::Config;
use services::{DashboardService, ReferenceTable, StatsService, TrackProcessor};
use store::Store;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<Store>,
    pub tracks: TrackProcessor,
    pub stats: StatsService,
    pub dashboard: DashboardService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<Store>, reference: ReferenceTable) -> Self {
        Self {
            config,
            tracks: TrackProcessor::new(store.clone()),
            stats: StatsService::new(store.clone()),
            dashboard: DashboardService::new(store.clone(), reference),
            store,
        }
    }
}
