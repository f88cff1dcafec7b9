// SPDX-License-Identifier: MIT
// Copyright 2026 The Wanderlog Authors

//! Storage layer.
//!
//! The relational engine itself is an external collaborator; this module
//! provides the typed operations the core needs against an in-memory,
//! concurrently readable store.

pub mod memory;

pub use memory::Store;
