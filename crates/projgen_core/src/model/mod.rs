//! Project-idea domain model.
//!
//! # Responsibility
//! - Define the canonical record stored in the catalog.
//! - Define the closed key sets (domain, experience level, difficulty).
//!
//! # Invariants
//! - Canonical records never carry their own catalog location.
//! - Closed-set wire names are stable identifiers.

pub mod project;
