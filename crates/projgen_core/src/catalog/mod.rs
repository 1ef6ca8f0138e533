//! Static project catalog and its load-time checks.
//!
//! # Responsibility
//! - Own the immutable domain → level → records mapping.
//! - Build the built-in catalog from the embedded JSON asset exactly once.
//!
//! # Invariants
//! - No record is created, mutated or removed after construction.
//! - Canonical records never carry `domain` / `experience_level`.
//! - Titles are unique across the whole catalog.

use crate::model::project::{Domain, ExperienceLevel};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod store;

pub use store::{Catalog, RecordQuery};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog construction error.
#[derive(Debug)]
pub enum CatalogError {
    /// Asset is not valid JSON or a record has an invalid shape.
    Parse(serde_json::Error),
    UnknownDomain(String),
    UnknownLevel {
        domain: Domain,
        level: String,
    },
    /// A stored record already carries location keys.
    AttachedLocation {
        title: String,
    },
    DuplicateTitle(String),
    MissingBucket {
        domain: Domain,
        level: ExperienceLevel,
    },
    EmptyBucket {
        domain: Domain,
        level: ExperienceLevel,
    },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid catalog data: {err}"),
            Self::UnknownDomain(key) => write!(f, "catalog contains unknown domain `{key}`"),
            Self::UnknownLevel { domain, level } => write!(
                f,
                "catalog domain `{domain}` contains unknown experience level `{level}`"
            ),
            Self::AttachedLocation { title } => write!(
                f,
                "catalog record `{title}` must not carry domain/experience_level"
            ),
            Self::DuplicateTitle(title) => write!(f, "catalog title is duplicated: {title}"),
            Self::MissingBucket { domain, level } => {
                write!(f, "catalog has no bucket for {domain}/{level}")
            }
            Self::EmptyBucket { domain, level } => {
                write!(f, "catalog bucket {domain}/{level} is empty")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
