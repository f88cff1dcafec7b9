// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Data models for the application.

pub mod metrics;
pub mod stage;
pub mod stats;
pub mod surf;
pub mod track;
pub mod trip;
pub mod user;

pub use metrics::{MetricPair, StageMetrics};
pub use stage::Stage;
pub use surf::{Board, Spot, SurfSession, TideStage};
pub use track::{RawTrackPoint, TrackMetrics, TrackPoint};
pub use trip::{ActivityKind, Trip};
pub use user::User;
