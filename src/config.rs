// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the countries/destinations reference JSON.
    pub reference_data_path: String,
    /// Username seeded and used for the demo dashboard.
    pub demo_user: String,
    /// Optional year preselected on the demo dashboard. Unparseable values
    /// are ignored, matching the filter contract.
    pub dashboard_year: Option<i32>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            reference_data_path: "data/reference.json".to_string(),
            demo_user: "alex".to_string(),
            dashboard_year: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (`.env` honored).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            reference_data_path: env::var("REFERENCE_DATA_PATH")
                .unwrap_or_else(|_| "data/reference.json".to_string()),
            demo_user: env::var("DEMO_USER").unwrap_or_else(|_| "alex".to_string()),
            dashboard_year: env::var("DASHBOARD_YEAR")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.reference_data_path, "data/reference.json");
        assert_eq!(config.dashboard_year, None);
    }

    #[test]
    fn test_invalid_dashboard_year_is_ignored() {
        env::set_var("DASHBOARD_YEAR", "not-a-year");
        let config = Config::from_env();
        assert_eq!(config.dashboard_year, None);
        env::remove_var("DASHBOARD_YEAR");
    }
}
