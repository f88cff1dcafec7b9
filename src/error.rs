// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Application error types.
//!
//! Note the deliberate asymmetry with track handling: malformed or
//! insufficient track data is *not* an [`AppError`] — the track pipeline
//! downgrades it to "no calculated metrics" (see `services::track`).

/// Application error type surfaced to the API layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(entity: &str, id: u64) -> Self {
        AppError::NotFound(format!("{} {}", entity, id))
    }
}

/// Result type alias for fallible core operations. The error parameter
/// defaults to [`AppError`] but can name a local error type (the track
/// pipeline uses its own).
pub type Result<T, E = AppError> = std::result::Result<T, E>;
