// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Dashboard assembly: records, available years, recent activity and top
//! partners.
//!
//! Everything here is read-only and derived from already-resolved stage
//! metrics; no metric is ever re-derived in this module.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Datelike;

use crate::error::{AppError, Result};
use crate::models::stats::{
    ActivityTotals, DashboardData, HikingRecords, PartnerStat, RecentActivity, Records,
    StageRecord, StageSummary, SurfingRecords, TripSummary,
};
use crate::models::{ActivityKind, Stage, Trip};
use crate::services::reference::ReferenceTable;
use crate::services::stats::{accumulate_stage, StatsFilter};
use crate::store::Store;

/// How ties between stages with an identical record value are broken.
/// Either way the choice is deterministic across runs.
enum TieBreak {
    /// First by lowest stage id.
    LowestId,
    /// Most recent stage date, then lowest id. Used for wave quality,
    /// where many sessions share the same rating.
    MostRecent,
}

/// Builds the per-user dashboard document.
pub struct DashboardService {
    store: Arc<Store>,
    reference: ReferenceTable,
}

impl DashboardService {
    pub fn new(store: Arc<Store>, reference: ReferenceTable) -> Self {
        Self { store, reference }
    }

    /// Assemble the dashboard for one user.
    ///
    /// `available_years` always covers the full unfiltered history; the
    /// rest of the document honors the activity/year filter.
    pub fn dashboard(&self, user_id: u64, filter: &StatsFilter) -> Result<DashboardData> {
        if self.store.get_user(user_id).is_none() {
            return Err(AppError::not_found("user", user_id));
        }

        let all_trips = self.store.trips_for_user(user_id);

        // Years come from stage dates over the whole history, independent
        // of whatever year filter is active.
        let mut available_years: Vec<i32> = all_trips
            .iter()
            .flat_map(|t| self.store.stages_for_trip(t.id))
            .map(|s| s.date.year())
            .collect();
        available_years.sort_unstable();
        available_years.dedup();
        available_years.reverse();

        let trips: Vec<Trip> = all_trips
            .into_iter()
            .filter(|t| filter.matches_trip(t))
            .collect();

        // One stage row per stage, fetched per trip; participants were only
        // used above to select trips.
        let mut stage_rows: Vec<(Trip, Stage)> = Vec::new();
        let mut totals = ActivityTotals::default();
        for trip in &trips {
            for stage in self.store.stages_for_trip(trip.id) {
                accumulate_stage(&mut totals, trip, &stage);
                stage_rows.push((trip.clone(), stage));
            }
        }

        let records = self.records(&stage_rows);
        let recent_activity = self.recent_activity(&stage_rows);
        let top_partners = self.top_partners(user_id, &trips);

        Ok(DashboardData {
            selected_year: filter.year,
            available_years,
            totals,
            records,
            recent_activity,
            top_partners,
        })
    }

    fn records(&self, rows: &[(Trip, Stage)]) -> Records {
        let hikes: Vec<&(Trip, Stage)> = rows
            .iter()
            .filter(|(t, s)| s.kind(t) == ActivityKind::Hiking)
            .collect();
        let surfs: Vec<&(Trip, Stage)> = rows
            .iter()
            .filter(|(t, s)| s.kind(t) == ActivityKind::Surfing)
            .collect();

        Records {
            hiking: HikingRecords {
                longest_by_km: record_by(&hikes, TieBreak::LowestId, |s| {
                    s.metrics.length_km.resolved()
                }),
                highest_by_gain: record_by(&hikes, TieBreak::LowestId, |s| {
                    s.metrics.elevation_gain_m.resolved().map(f64::from)
                }),
                longest_by_duration: record_by(&hikes, TieBreak::LowestId, |s| {
                    s.metrics.duration_s.resolved().map(|d| d as f64)
                }),
            },
            surfing: SurfingRecords {
                most_waves: record_by(&surfs, TieBreak::LowestId, |s| {
                    s.surf
                        .as_ref()
                        .and_then(|x| x.waves_caught)
                        .map(f64::from)
                }),
                best_wave_quality: record_by(&surfs, TieBreak::MostRecent, |s| {
                    s.surf
                        .as_ref()
                        .and_then(|x| x.wave_quality)
                        .map(f64::from)
                }),
                longest_time_in_water: record_by(&surfs, TieBreak::LowestId, |s| {
                    s.surf
                        .as_ref()
                        .and_then(|x| x.time_in_water_s)
                        .map(|d| d as f64)
                }),
            },
        }
    }

    fn recent_activity(&self, rows: &[(Trip, Stage)]) -> RecentActivity {
        RecentActivity {
            last_hike: self.latest_of_kind(rows, ActivityKind::Hiking),
            last_surf: self.latest_of_kind(rows, ActivityKind::Surfing),
        }
    }

    fn latest_of_kind(&self, rows: &[(Trip, Stage)], kind: ActivityKind) -> Option<StageSummary> {
        let (_, stage) = rows
            .iter()
            .filter(|(t, s)| s.kind(t) == kind)
            .max_by(|(_, a), (_, b)| a.date.cmp(&b.date).then(a.id.cmp(&b.id)))?;

        let location = stage
            .surf
            .as_ref()
            .and_then(|surf| surf.spot_id)
            .and_then(|spot_id| self.store.get_spot(spot_id))
            .map(|spot| self.reference.spot_label(&spot));

        Some(StageSummary {
            stage_id: stage.id,
            trip_id: stage.trip_id,
            name: stage.name.clone(),
            date: stage.date,
            activity: kind,
            location,
        })
    }

    /// Co-participants ranked by shared trip count over the filtered trip
    /// set; top 3, ties broken by lowest user id. Each partner carries the
    /// most recent shared trip for display.
    fn top_partners(&self, user_id: u64, trips: &[Trip]) -> Vec<PartnerStat> {
        let mut shared: HashMap<u64, Vec<&Trip>> = HashMap::new();
        for trip in trips {
            for &participant in &trip.participant_ids {
                if participant != user_id {
                    shared.entry(participant).or_default().push(trip);
                }
            }
        }

        let mut ranked: Vec<(u64, Vec<&Trip>)> = shared.into_iter().collect();
        ranked.sort_by(|(id_a, trips_a), (id_b, trips_b)| {
            trips_b
                .len()
                .cmp(&trips_a.len())
                .then(id_a.cmp(id_b))
        });
        ranked.truncate(3);

        ranked
            .into_iter()
            .map(|(partner_id, shared_trips)| {
                let username = self
                    .store
                    .get_user(partner_id)
                    .map(|u| u.username)
                    .unwrap_or_else(|| format!("user {}", partner_id));
                let last_shared_trip = shared_trips
                    .iter()
                    .max_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)))
                    .map(|t| TripSummary {
                        trip_id: t.id,
                        name: t.name.clone(),
                        start_date: t.start_date,
                        end_date: t.end_date,
                        activity: t.activity,
                    });
                PartnerStat {
                    user_id: partner_id,
                    username,
                    shared_trip_count: shared_trips.len() as u32,
                    last_shared_trip,
                }
            })
            .collect()
    }
}

/// Select the stage with the maximum resolved value of one metric.
/// Stages where the metric resolves to `None` can never win.
fn record_by<F>(rows: &[&(Trip, Stage)], tie: TieBreak, metric: F) -> Option<StageRecord>
where
    F: Fn(&Stage) -> Option<f64>,
{
    let mut best: Option<(f64, &Stage)> = None;
    for (_, stage) in rows {
        let Some(value) = metric(stage) else { continue };
        best = match best {
            None => Some((value, stage)),
            Some((best_value, best_stage)) => {
                if beats(value, stage, best_value, best_stage, &tie) {
                    Some((value, stage))
                } else {
                    Some((best_value, best_stage))
                }
            }
        };
    }
    best.map(|(value, stage)| StageRecord {
        stage_id: stage.id,
        trip_id: stage.trip_id,
        name: stage.name.clone(),
        date: stage.date,
        value,
    })
}

fn beats(value: f64, stage: &Stage, best_value: f64, best: &Stage, tie: &TieBreak) -> bool {
    if value != best_value {
        return value > best_value;
    }
    match tie {
        TieBreak::LowestId => stage.id < best.id,
        TieBreak::MostRecent => stage
            .date
            .cmp(&best.date)
            .then(best.id.cmp(&stage.id))
            .is_gt(),
    }
}
