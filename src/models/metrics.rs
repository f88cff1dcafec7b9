// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Manual/calculated metric pairs and the precedence rule.
//!
//! Every stage metric exists twice: a manually entered value and a value
//! derived from GPS track points. The precedence rule (manual wins, then
//! calculated, then nothing) lives here and nowhere else — trip totals,
//! user stats and record selection all go through [`MetricPair::resolved`].

use serde::{Deserialize, Serialize};

use crate::models::track::TrackMetrics;

/// A metric that can come from manual entry or from track computation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MetricPair<T: Copy> {
    #[serde(default)]
    pub manual: Option<T>,
    #[serde(default)]
    pub calculated: Option<T>,
}

impl<T: Copy> MetricPair<T> {
    pub fn manual(value: T) -> Self {
        Self {
            manual: Some(value),
            calculated: None,
        }
    }

    pub fn calculated(value: T) -> Self {
        Self {
            manual: None,
            calculated: Some(value),
        }
    }

    /// Manual value wins; falls back to the calculated one. `None` when
    /// neither exists — record selection uses this form so that metricless
    /// stages can never win a record.
    pub fn resolved(&self) -> Option<T> {
        self.manual.or(self.calculated)
    }

    /// Resolution for sum contexts: absent metrics contribute the identity.
    pub fn resolved_or(&self, identity: T) -> T {
        self.resolved().unwrap_or(identity)
    }
}

/// The four manual/calculated metric pairs carried by every stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageMetrics {
    pub length_km: MetricPair<f64>,
    pub elevation_gain_m: MetricPair<i32>,
    pub elevation_loss_m: MetricPair<i32>,
    pub duration_s: MetricPair<i64>,
}

impl StageMetrics {
    /// Overwrite the calculated half wholesale from a track computation.
    /// Called on every track replacement; calculated fields are never
    /// patched incrementally.
    pub fn apply_calculated(&mut self, computed: &TrackMetrics) {
        self.length_km.calculated = computed.length_km;
        self.elevation_gain_m.calculated = computed.elevation_gain_m;
        self.elevation_loss_m.calculated = computed.elevation_loss_m;
        self.duration_s.calculated = computed.duration_seconds;
    }

    /// Null out all calculated fields ("no track data"). Manual values are
    /// untouched.
    pub fn clear_calculated(&mut self) {
        self.apply_calculated(&TrackMetrics::empty());
    }
}
