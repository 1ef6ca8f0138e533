//! Core use-case services.
//!
//! # Responsibility
//! - Select projects from the catalog according to caller criteria.
//! - Export selected projects as portable plan documents.
//! - Summarize catalog contents for overview screens.

pub mod export;
pub mod selection;
pub mod stats;
