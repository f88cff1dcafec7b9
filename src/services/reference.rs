// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Static reference data: countries (flags) and popular destinations.
//!
//! This is injected read-only lookup data, not part of the core domain.
//! A missing file is not fatal — the table degrades to empty lookups.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::Spot;

/// A country entry with its flag emoji.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    pub name: String,
    pub flag: String,
}

/// A curated destination suggestion shown in the trip editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub country_code: String,
}

#[derive(Debug, Default, Deserialize)]
struct ReferenceFile {
    #[serde(default)]
    countries: Vec<Country>,
    #[serde(default)]
    popular_destinations: Vec<Destination>,
}

/// Read-only reference table keyed by country code.
#[derive(Default, Clone)]
pub struct ReferenceTable {
    countries: HashMap<String, Country>,
    destinations: Vec<Destination>,
}

impl ReferenceTable {
    /// Load reference data from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceError> {
        let json_data = fs::read_to_string(path.as_ref())
            .map_err(|e| ReferenceError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load reference data from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, ReferenceError> {
        let file: ReferenceFile = serde_json::from_str(json_data)
            .map_err(|e| ReferenceError::ParseError(e.to_string()))?;

        let countries: HashMap<String, Country> = file
            .countries
            .into_iter()
            .map(|c| (c.code.to_ascii_uppercase(), c))
            .collect();

        tracing::info!(
            countries = countries.len(),
            destinations = file.popular_destinations.len(),
            "Loaded reference data"
        );
        Ok(Self {
            countries,
            destinations: file.popular_destinations,
        })
    }

    pub fn flag_for(&self, country_code: &str) -> Option<&str> {
        self.countries
            .get(&country_code.to_ascii_uppercase())
            .map(|c| c.flag.as_str())
    }

    pub fn country_name(&self, country_code: &str) -> Option<&str> {
        self.countries
            .get(&country_code.to_ascii_uppercase())
            .map(|c| c.name.as_str())
    }

    pub fn popular_destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Display label for a surf spot: flag-prefixed when the country is
    /// known, plain name otherwise.
    pub fn spot_label(&self, spot: &Spot) -> String {
        match spot
            .country_code
            .as_deref()
            .and_then(|code| self.flag_for(code))
        {
            Some(flag) => format!("{} {}", flag, spot.name),
            None => spot.name.clone(),
        }
    }
}

/// Errors from reference data loading.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse reference data: {0}")]
    ParseError(String),
}
