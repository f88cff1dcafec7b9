// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Stage model: one dated activity session within a trip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::metrics::StageMetrics;
use crate::models::surf::SurfSession;
use crate::models::trip::{ActivityKind, Trip};

/// A single hike or surf session within a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub id: u64,
    pub trip_id: u64,
    pub creator_id: u64,
    pub name: String,
    pub date: NaiveDate,
    /// Stage-level override of the trip's activity kind. Present on mixed
    /// or legacy trips; `None` means "same as the trip".
    #[serde(default)]
    pub activity: Option<ActivityKind>,
    #[serde(default)]
    pub metrics: StageMetrics,
    /// Surf session attributes; only meaningful for surfing stages.
    #[serde(default)]
    pub surf: Option<SurfSession>,
    #[serde(default)]
    pub external_link: Option<String>,
}

impl Stage {
    /// Effective activity kind, falling back to the owning trip's kind.
    pub fn kind(&self, trip: &Trip) -> ActivityKind {
        self.activity.unwrap_or(trip.activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_kind_falls_back_to_trip() {
        let trip = Trip {
            id: 1,
            name: "Algarve".to_string(),
            description: String::new(),
            start_date: "2025-03-01".parse().unwrap(),
            end_date: "2025-03-08".parse().unwrap(),
            activity: ActivityKind::Surfing,
            creator_id: 1,
            participant_ids: vec![1],
        };
        let mut stage = Stage {
            id: 10,
            trip_id: 1,
            creator_id: 1,
            name: "Morning session".to_string(),
            date: "2025-03-02".parse().unwrap(),
            activity: None,
            metrics: StageMetrics::default(),
            surf: None,
            external_link: None,
        };

        assert_eq!(stage.kind(&trip), ActivityKind::Surfing);

        // Legacy data: a hike logged inside a surf trip keeps its own kind.
        stage.activity = Some(ActivityKind::Hiking);
        assert_eq!(stage.kind(&trip), ActivityKind::Hiking);
    }
}
