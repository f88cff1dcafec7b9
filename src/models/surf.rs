// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Surf session attributes and the board/spot reference entities.
//!
//! Everything in here is entered by the user — none of it is ever derived
//! from track points.

use serde::{Deserialize, Serialize};

/// Tide state during a surf session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TideStage {
    Low,
    Mid,
    High,
}

/// Session attributes carried by surfing stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurfSession {
    pub wave_height_m: Option<f64>,
    /// Subjective rating, 1 (poor) to 5 (epic).
    pub wave_quality: Option<u8>,
    pub time_in_water_s: Option<i64>,
    pub waves_caught: Option<u32>,
    pub water_temperature_c: Option<f64>,
    pub tide: Option<TideStage>,
    pub board_id: Option<u64>,
    pub spot_id: Option<u64>,
}

/// A surfboard referenced from surf sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    pub name: String,
}

/// A surf spot referenced from surf sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spot {
    pub id: u64,
    pub name: String,
    /// ISO 3166-1 alpha-2 code, resolved against the reference data table.
    pub country_code: Option<String>,
}
