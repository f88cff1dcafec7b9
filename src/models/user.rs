// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! User model.

use serde::{Deserialize, Serialize};

/// A registered user. Authentication is handled upstream; the core only
/// needs identity for participation and creator references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}
