// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Aggregate output shapes consumed by the API layer and the dashboard.
//!
//! These are pure presentation structures; all numbers in them come from
//! resolved stage metrics (see `models::metrics`), never from re-derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::trip::ActivityKind;

// ─── Totals ──────────────────────────────────────────────────────

/// Hiking totals over some stage set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HikingTotals {
    pub stage_count: u32,
    pub distance_km: f64,
    pub elevation_gain_m: i64,
    pub elevation_loss_m: i64,
    pub duration_seconds: i64,
}

/// Surfing totals over some stage set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfingTotals {
    pub session_count: u32,
    pub time_in_water_seconds: i64,
    pub waves_caught: u64,
}

/// Per-kind totals, used both at trip level and on the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityTotals {
    pub hiking: HikingTotals,
    pub surfing: SurfingTotals,
}

/// Trip-level aggregate: exactly one contribution per stage, regardless of
/// how many participants the trip has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripTotals {
    pub trip_id: u64,
    #[serde(flatten)]
    pub totals: ActivityTotals,
}

// ─── Per-user statistics ─────────────────────────────────────────

/// Water temperature spread over a user's surf sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterTemperatureStats {
    pub min_c: f64,
    pub avg_c: f64,
    pub max_c: f64,
}

/// The board a user surfed most, with its session count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardUsage {
    pub board_id: u64,
    pub name: String,
    pub session_count: u32,
}

/// Surfing breakdown within [`UserStatsReport`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfingBreakdown {
    #[serde(flatten)]
    pub totals: SurfingTotals,
    pub water_temperature: Option<WaterTemperatureStats>,
    pub most_used_board: Option<BoardUsage>,
}

/// Per-user statistics for the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatsReport {
    pub user_id: u64,
    pub username: String,
    pub trip_count: u32,
    pub stage_count: u32,
    /// Overall resolved-metric sums across all matching stages of any kind.
    pub total_distance_km: f64,
    pub total_elevation_gain_m: i64,
    pub total_elevation_loss_m: i64,
    pub total_duration_seconds: i64,
    pub hiking: HikingTotals,
    pub surfing: SurfingBreakdown,
}

// ─── Dashboard ───────────────────────────────────────────────────

/// A stage holding a record, with the winning resolved value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    pub stage_id: u64,
    pub trip_id: u64,
    pub name: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// Hiking record stages for a filtered stage set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HikingRecords {
    pub longest_by_km: Option<StageRecord>,
    pub highest_by_gain: Option<StageRecord>,
    pub longest_by_duration: Option<StageRecord>,
}

/// Surfing record stages for a filtered stage set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfingRecords {
    pub most_waves: Option<StageRecord>,
    pub best_wave_quality: Option<StageRecord>,
    pub longest_time_in_water: Option<StageRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Records {
    pub hiking: HikingRecords,
    pub surfing: SurfingRecords,
}

/// Lightweight stage reference for "recent activity" display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSummary {
    pub stage_id: u64,
    pub trip_id: u64,
    pub name: String,
    pub date: NaiveDate,
    pub activity: ActivityKind,
    /// Decorated spot label ("🇵🇹 Ericeira") for surf stages, when the spot
    /// and reference data are known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentActivity {
    pub last_hike: Option<StageSummary>,
    pub last_surf: Option<StageSummary>,
}

/// Lightweight trip reference used in partner display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripSummary {
    pub trip_id: u64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub activity: ActivityKind,
}

/// A co-participant ranked by shared trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerStat {
    pub user_id: u64,
    pub username: String,
    pub shared_trip_count: u32,
    pub last_shared_trip: Option<TripSummary>,
}

/// The full dashboard document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub selected_year: Option<i32>,
    /// Distinct years with at least one stage, over the full unfiltered
    /// history, newest first.
    pub available_years: Vec<i32>,
    pub totals: ActivityTotals,
    pub records: Records,
    pub recent_activity: RecentActivity,
    pub top_partners: Vec<PartnerStat>,
}
