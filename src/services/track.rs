// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Track normalization, metric derivation and track replacement.
//!
//! The workflow on every track upload:
//! 1. Normalize the raw samples (validate coordinates, order by time)
//! 2. Derive distance / elevation gain+loss / duration
//! 3. Atomically swap the stage's points and calculated metrics
//!
//! Steps 1 and 2 are pure; anything that goes wrong in them downgrades to
//! "no calculated metrics" instead of surfacing an error to the user.
//! Manually entered metrics are never touched here.

use chrono::{DateTime, Utc};
use geo::{Distance, Haversine, Point};
use std::sync::Arc;

use crate::error::Result;
use crate::models::{RawTrackPoint, TrackMetrics, TrackPoint};
use crate::store::Store;

/// Errors from the track pipeline. Callers treat all of these as "no track
/// data", not as hard failures.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("Track has {0} usable points, need at least 2")]
    TooFewPoints(usize),

    #[error("Track data produced a non-finite result")]
    Corrupt,
}

/// Validate and order raw samples into a stored track.
///
/// Points with non-finite or out-of-range coordinates are discarded.
/// Ordering is ascending by timestamp; a point without a timestamp sorts
/// directly after the nearest preceding timestamped point, and untimed
/// points are never reordered relative to each other.
pub fn normalize_track(raw: Vec<RawTrackPoint>) -> Result<Vec<TrackPoint>, TrackError> {
    let points: Vec<TrackPoint> = raw
        .into_iter()
        .filter(|p| {
            p.lat.is_finite() && p.lon.is_finite() && p.lat.abs() <= 90.0 && p.lon.abs() <= 180.0
        })
        .map(|p| TrackPoint {
            lat: p.lat,
            lon: p.lon,
            // Non-finite elevations are treated as missing, not corrupt.
            elevation: p.ele.filter(|e| e.is_finite()),
            timestamp: p.time,
        })
        .collect();

    if points.len() < 2 {
        return Err(TrackError::TooFewPoints(points.len()));
    }

    // Stable sort: untimed points inherit the timestamp of the previous
    // timestamped point as their key, so they stay glued behind it.
    let mut last_seen: Option<DateTime<Utc>> = None;
    let mut keyed: Vec<(Option<DateTime<Utc>>, TrackPoint)> = points
        .into_iter()
        .map(|p| {
            if p.timestamp.is_some() {
                last_seen = p.timestamp;
            }
            (last_seen, p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, p)| p).collect())
}

/// Derive distance, elevation gain/loss and duration from a normalized
/// track of at least 2 points.
///
/// The three computations are independent; each may be absent without
/// blocking the others:
/// - distance needs ≥2 points (always present here)
/// - gain/loss need ≥2 points carrying elevation
/// - duration needs ≥2 points carrying timestamps
pub fn calculate_metrics(points: &[TrackPoint]) -> Result<TrackMetrics, TrackError> {
    if points.len() < 2 {
        return Err(TrackError::TooFewPoints(points.len()));
    }

    // 3D distance: great-circle segment length with the elevation delta as
    // the second leg of the hypotenuse where both endpoints carry elevation.
    let mut meters = 0.0;
    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let flat = Haversine.distance(Point::new(a.lon, a.lat), Point::new(b.lon, b.lat));
        meters += match (a.elevation, b.elevation) {
            (Some(e1), Some(e2)) => flat.hypot(e2 - e1),
            _ => flat,
        };
    }
    if !meters.is_finite() {
        return Err(TrackError::Corrupt);
    }
    let length_km = Some(round2(meters / 1000.0));

    // Gain/loss over the subsequence of points that carry elevation; points
    // without elevation are skipped for this computation only.
    let elevations: Vec<f64> = points.iter().filter_map(|p| p.elevation).collect();
    let (elevation_gain_m, elevation_loss_m) = if elevations.len() >= 2 {
        let mut gain = 0.0;
        let mut loss = 0.0;
        for pair in elevations.windows(2) {
            let delta = pair[1] - pair[0];
            if delta > 0.0 {
                gain += delta;
            } else {
                loss -= delta;
            }
        }
        if !gain.is_finite() || !loss.is_finite() {
            return Err(TrackError::Corrupt);
        }
        (Some(gain.round() as i32), Some(loss.round() as i32))
    } else {
        (None, None)
    };

    // Duration: span between the earliest and latest timestamped points;
    // absent when fewer than 2 points carry a timestamp.
    let times: Vec<DateTime<Utc>> = points.iter().filter_map(|p| p.timestamp).collect();
    let duration_seconds = if times.len() >= 2 {
        let (min, max) = times[1..]
            .iter()
            .fold((times[0], times[0]), |(lo, hi), &t| (lo.min(t), hi.max(t)));
        Some((max - min).num_seconds())
    } else {
        None
    };

    Ok(TrackMetrics {
        length_km,
        elevation_gain_m,
        elevation_loss_m,
        duration_seconds,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Orchestrates track replacement against the store.
pub struct TrackProcessor {
    store: Arc<Store>,
}

impl TrackProcessor {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Replace a stage's track wholesale (delete-all, bulk-insert) and
    /// recompute its calculated metrics synchronously.
    ///
    /// Degenerate or corrupt track data is not an error: the stage keeps
    /// its manual metrics and the calculated fields become null. Only a
    /// missing stage is surfaced to the caller.
    pub fn replace_track(
        &self,
        stage_id: u64,
        raw: Vec<RawTrackPoint>,
    ) -> Result<TrackMetrics> {
        let (points, metrics) = match normalize_track(raw) {
            Ok(points) => match calculate_metrics(&points) {
                Ok(metrics) => (points, metrics),
                Err(err) => {
                    // Keep the uploaded points but null all calculated
                    // fields, matching the silent-downgrade contract.
                    tracing::warn!(stage_id, error = %err, "Track metrics failed");
                    (points, TrackMetrics::empty())
                }
            },
            Err(err) => {
                tracing::debug!(stage_id, reason = %err, "No usable track data");
                (Vec::new(), TrackMetrics::empty())
            }
        };

        self.store
            .replace_track_atomic(stage_id, points, &metrics)?;

        tracing::info!(
            stage_id,
            length_km = ?metrics.length_km,
            gain_m = ?metrics.elevation_gain_m,
            loss_m = ?metrics.elevation_loss_m,
            duration_s = ?metrics.duration_seconds,
            "Track replaced"
        );
        Ok(metrics)
    }
}
