// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Service layer.

pub mod dashboard;
pub mod reference;
pub mod stats;
pub mod track;

pub use dashboard::DashboardService;
pub use reference::ReferenceTable;
pub use stats::{StatsFilter, StatsService};
pub use track::TrackProcessor;
