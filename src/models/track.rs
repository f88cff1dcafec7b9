// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Track point models and the calculated-metric output shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw geodetic sample as submitted by the API layer (parsed GPX upload).
/// Order is arbitrary; elevation and timestamp may be missing per point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrackPoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub ele: Option<f64>,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// Stored, normalized track point. Belongs to exactly one stage; the whole
/// point set is replaced (never patched) when a stage's track changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Metrics derived from a stage's track, as persisted into the calculated
/// half of the stage metrics and returned to the API layer.
///
/// The three computations are independent: any field may be absent without
/// blocking the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackMetrics {
    /// 3D great-circle distance in km, rounded to 2 decimal places.
    pub length_km: Option<f64>,
    /// Cumulative elevation gain in whole meters.
    pub elevation_gain_m: Option<i32>,
    /// Cumulative elevation loss in whole meters (reported positive).
    pub elevation_loss_m: Option<i32>,
    /// Elapsed time between first and last timestamped point, whole seconds.
    pub duration_seconds: Option<i64>,
}

impl TrackMetrics {
    /// The "no calculated metrics" value written when a stage has no usable
    /// track data.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.length_km.is_none()
            && self.elevation_gain_m.is_none()
            && self.elevation_loss_m.is_none()
            && self.duration_seconds.is_none()
    }
}
