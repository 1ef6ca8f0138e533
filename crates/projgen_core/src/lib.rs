//! Core engine for the project idea generator.
//! This crate owns the catalog, selection and export invariants; front ends
//! only render what it returns.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::{Catalog, CatalogError, CatalogResult, RecordQuery};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Difficulty, Domain, ExperienceLevel, ProjectRecord};
pub use service::export::{
    export_plan, plan_file_name, render_markdown, render_plan, ExportError, ExportFormat,
    ExportResult,
};
pub use service::selection::{
    parse_duration_weeks, ProjectGenerator, SelectError, SelectResult, SelectionCriteria,
};
pub use service::stats::CatalogStats;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
