// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Trip model: a date-bounded collection of stages with participants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of activity a trip or stage represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Hiking,
    Surfing,
}

impl std::str::FromStr for ActivityKind {
    type Err = ();

    /// Lenient parse used by filter handling; unknown values are an `Err`
    /// that callers ignore rather than reject.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIKING" => Ok(ActivityKind::Hiking),
            "SURFING" => Ok(ActivityKind::Surfing),
            _ => Err(()),
        }
    }
}

/// A multi-day trip. Participants are a many-to-many relation; stage
/// aggregation must never fan out across this list (see the stats service).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Trip-level activity kind; stages may override for mixed/legacy data.
    pub activity: ActivityKind,
    pub creator_id: u64,
    pub participant_ids: Vec<u64>,
}

impl Trip {
    /// A trip counts for a calendar year if its start OR end date falls in
    /// that year, so year-spanning trips show up in both boundary years.
    pub fn touches_year(&self, year: i32) -> bool {
        use chrono::Datelike;
        self.start_date.year() == year || self.end_date.year() == year
    }

    pub fn has_participant(&self, user_id: u64) -> bool {
        self.participant_ids.contains(&user_id)
    }
}
