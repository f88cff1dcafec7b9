// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Stage/trip aggregation and per-user statistics.
//!
//! The one invariant that matters most here: totals are computed in two
//! passes. Stage sums are keyed only by trip membership; the participant
//! relation is joined afterwards, purely as a filter. Folding both
//! relations into one pass would multiply every stage's contribution once
//! per participant.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::stats::{
    ActivityTotals, BoardUsage, SurfingBreakdown, TripTotals, UserStatsReport,
    WaterTemperatureStats,
};
use crate::models::{ActivityKind, Stage, Trip};
use crate::store::Store;

/// Aggregation filter parameters. Invalid inputs are dropped, never
/// rejected: an unknown activity or a non-numeric year simply means
/// "unfiltered" for that dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatsFilter {
    pub activity: Option<ActivityKind>,
    pub year: Option<i32>,
}

impl StatsFilter {
    pub fn from_params(activity: Option<&str>, year: Option<&str>) -> Self {
        Self {
            activity: activity.and_then(|s| s.parse().ok()),
            year: year.and_then(|s| s.trim().parse().ok()),
        }
    }

    pub fn matches_trip(&self, trip: &Trip) -> bool {
        if let Some(kind) = self.activity {
            if trip.activity != kind {
                return false;
            }
        }
        if let Some(year) = self.year {
            if !trip.touches_year(year) {
                return false;
            }
        }
        true
    }
}

/// Aggregation over stored trips and stages.
pub struct StatsService {
    store: Arc<Store>,
}

impl StatsService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Per-trip totals: one contribution per stage, split by effective
    /// activity kind. The participant list never enters the computation.
    pub fn trip_totals(&self, trip_id: u64) -> Result<TripTotals> {
        let trip = self
            .store
            .get_trip(trip_id)
            .ok_or_else(|| AppError::not_found("trip", trip_id))?;

        let mut totals = ActivityTotals::default();
        for stage in self.store.stages_for_trip(trip_id) {
            accumulate_stage(&mut totals, &trip, &stage);
        }
        Ok(TripTotals { trip_id, totals })
    }

    /// Per-user statistics: totals over the stages of all trips where the
    /// user participates, optionally filtered by activity kind and year.
    pub fn user_stats(&self, user_id: u64, filter: &StatsFilter) -> Result<UserStatsReport> {
        let user = self
            .store
            .get_user(user_id)
            .ok_or_else(|| AppError::not_found("user", user_id))?;

        // Pass 1: participant relation used only to select trips.
        let trips: Vec<Trip> = self
            .store
            .trips_for_user(user_id)
            .into_iter()
            .filter(|t| filter.matches_trip(t))
            .collect();

        // Pass 2: stage sums keyed by trip membership alone.
        let mut totals = ActivityTotals::default();
        let mut stage_count = 0u32;
        let mut overall_distance = 0.0f64;
        let mut overall_gain = 0i64;
        let mut overall_loss = 0i64;
        let mut overall_duration = 0i64;
        let mut temps: Vec<f64> = Vec::new();
        let mut board_sessions: HashMap<u64, u32> = HashMap::new();

        for trip in &trips {
            for stage in self.store.stages_for_trip(trip.id) {
                stage_count += 1;
                overall_distance += stage.metrics.length_km.resolved_or(0.0);
                overall_gain += i64::from(stage.metrics.elevation_gain_m.resolved_or(0));
                overall_loss += i64::from(stage.metrics.elevation_loss_m.resolved_or(0));
                overall_duration += stage.metrics.duration_s.resolved_or(0);

                accumulate_stage(&mut totals, trip, &stage);

                if let Some(surf) = stage
                    .surf
                    .as_ref()
                    .filter(|_| stage.kind(trip) == ActivityKind::Surfing)
                {
                    if let Some(temp) = surf.water_temperature_c {
                        temps.push(temp);
                    }
                    if let Some(board_id) = surf.board_id {
                        *board_sessions.entry(board_id).or_insert(0) += 1;
                    }
                }
            }
        }

        let surfing = SurfingBreakdown {
            totals: totals.surfing.clone(),
            water_temperature: water_temperature_stats(&temps),
            most_used_board: self.most_used_board(&board_sessions),
        };

        tracing::debug!(
            user_id,
            trips = trips.len(),
            stages = stage_count,
            "Computed user stats"
        );

        Ok(UserStatsReport {
            user_id,
            username: user.username,
            trip_count: trips.len() as u32,
            stage_count,
            total_distance_km: round2(overall_distance),
            total_elevation_gain_m: overall_gain,
            total_elevation_loss_m: overall_loss,
            total_duration_seconds: overall_duration,
            hiking: totals.hiking,
            surfing,
        })
    }

    /// Most-used board by session count; ties go to the lowest board id.
    fn most_used_board(&self, sessions: &HashMap<u64, u32>) -> Option<BoardUsage> {
        let (&board_id, &session_count) = sessions
            .iter()
            .max_by(|(id_a, n_a), (id_b, n_b)| n_a.cmp(n_b).then(id_b.cmp(id_a)))?;
        let name = self
            .store
            .get_board(board_id)
            .map(|b| b.name)
            .unwrap_or_else(|| format!("board {}", board_id));
        Some(BoardUsage {
            board_id,
            name,
            session_count,
        })
    }
}

/// Add one stage's resolved metrics to the per-kind totals. This is the
/// single place where stages turn into sums.
pub(crate) fn accumulate_stage(totals: &mut ActivityTotals, trip: &Trip, stage: &Stage) {
    match stage.kind(trip) {
        ActivityKind::Hiking => {
            let h = &mut totals.hiking;
            h.stage_count += 1;
            h.distance_km = round2(h.distance_km + stage.metrics.length_km.resolved_or(0.0));
            h.elevation_gain_m += i64::from(stage.metrics.elevation_gain_m.resolved_or(0));
            h.elevation_loss_m += i64::from(stage.metrics.elevation_loss_m.resolved_or(0));
            h.duration_seconds += stage.metrics.duration_s.resolved_or(0);
        }
        ActivityKind::Surfing => {
            let s = &mut totals.surfing;
            s.session_count += 1;
            if let Some(surf) = &stage.surf {
                s.time_in_water_seconds += surf.time_in_water_s.unwrap_or(0);
                s.waves_caught += u64::from(surf.waves_caught.unwrap_or(0));
            }
        }
    }
}

fn water_temperature_stats(temps: &[f64]) -> Option<WaterTemperatureStats> {
    if temps.is_empty() {
        return None;
    }
    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = temps.iter().sum::<f64>() / temps.len() as f64;
    Some(WaterTemperatureStats {
        min_c: min,
        avg_c: round2(avg),
        max_c: max,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
