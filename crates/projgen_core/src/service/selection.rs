//! Project selection use-case service.
//!
//! # Responsibility
//! - Validate caller criteria against the catalog's closed key sets.
//! - Narrow one bucket by technology and duration preferences.
//! - Pick one survivor with a caller-supplied random source.
//!
//! # Invariants
//! - Each filter that would empty the candidate set is discarded, and the
//!   candidates from before that filter are kept.
//! - An empty technology preference list behaves like no preference.
//! - The catalog is only read; returned records are located copies.
//! - No hidden global RNG: all randomness comes from the `rng` argument.

use crate::catalog::{Catalog, RecordQuery};
use crate::model::project::{Domain, ExperienceLevel, ProjectRecord};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SelectResult<T> = Result<T, SelectError>;

/// Selection failure returned to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// Domain key is outside the closed set or absent from the catalog.
    UnknownDomain(String),
    /// Level key is outside the closed set or absent within the domain.
    UnknownLevel(String),
    /// The requested bucket holds no records.
    NoMatch {
        domain: Domain,
        level: ExperienceLevel,
    },
    /// A catalog-wide draw found no records for its query.
    NoCandidates,
    /// A candidate's duration has no parseable upper bound.
    MalformedDuration { title: String, duration: String },
}

impl Display for SelectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDomain(key) => write!(f, "domain `{key}` not found"),
            Self::UnknownLevel(key) => write!(f, "experience level `{key}` not found"),
            Self::NoMatch { domain, level } => {
                write!(f, "no projects match your criteria ({domain}/{level})")
            }
            Self::NoCandidates => write!(f, "no projects match your criteria"),
            Self::MalformedDuration { title, duration } => write!(
                f,
                "project `{title}` has malformed duration `{duration}` (expected `<min>-<max> weeks`)"
            ),
        }
    }
}

impl Error for SelectError {}

/// Caller intent for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    /// Domain key, e.g. `cybersecurity`.
    pub domain: String,
    /// Experience-level key, e.g. `beginner`.
    pub level: String,
    /// Preferred technologies; empty means no preference.
    pub tech_preferences: Vec<String>,
    /// Upper bound on the project's maximum duration, in weeks.
    pub max_duration_weeks: Option<u32>,
}

impl SelectionCriteria {
    /// Creates criteria with no optional filters.
    pub fn new(domain: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            level: level.into(),
            tech_preferences: Vec::new(),
            max_duration_weeks: None,
        }
    }

    pub fn with_tech_preferences<I, S>(mut self, techs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_preferences = techs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_duration_weeks(mut self, weeks: u32) -> Self {
        self.max_duration_weeks = Some(weeks);
        self
    }
}

/// Selection entry points over a read-only catalog.
#[derive(Debug, Clone, Copy)]
pub struct ProjectGenerator<'c> {
    catalog: &'c Catalog,
}

impl<'c> ProjectGenerator<'c> {
    /// Creates a generator reading from `catalog`.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this generator reads from.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Selects one project matching `criteria`.
    ///
    /// # Contract
    /// - Validates domain first, then level within that domain.
    /// - Technology filter: case-insensitive whole-name equality against
    ///   `tech_stack`; falls back to the whole bucket when nothing matches.
    /// - Duration filter: keeps records whose upper bound is within the
    ///   limit; falls back to the technology-filtered set when nothing fits.
    /// - The pick is uniform over the surviving candidates.
    ///
    /// # Errors
    /// - `UnknownDomain`, `UnknownLevel` for invalid keys.
    /// - `MalformedDuration` when the duration filter meets an unparseable
    ///   candidate.
    /// - `NoMatch` when the bucket itself is empty.
    pub fn select<R>(&self, criteria: &SelectionCriteria, rng: &mut R) -> SelectResult<ProjectRecord>
    where
        R: Rng + ?Sized,
    {
        let domain = Domain::parse(&criteria.domain)
            .filter(|domain| self.catalog.contains_domain(*domain))
            .ok_or_else(|| SelectError::UnknownDomain(criteria.domain.clone()))?;
        let level = ExperienceLevel::parse(&criteria.level)
            .filter(|level| self.catalog.records(domain, *level).is_some())
            .ok_or_else(|| SelectError::UnknownLevel(criteria.level.clone()))?;
        let bucket = self.catalog.records(domain, level).unwrap_or_default();

        let candidates: Vec<&ProjectRecord> = bucket.iter().collect();
        let candidates = filter_by_tech(candidates, &criteria.tech_preferences);
        let candidates = match criteria.max_duration_weeks {
            Some(max_weeks) => filter_by_duration(candidates, max_weeks)?,
            None => candidates,
        };

        let Some(chosen) = candidates.choose(rng) else {
            warn!(
                "event=select module=selection status=error reason=empty_bucket domain={} level={}",
                domain, level
            );
            return Err(SelectError::NoMatch { domain, level });
        };

        debug!(
            "event=select module=selection status=ok domain={} level={} candidates={}",
            domain,
            level,
            candidates.len()
        );
        Ok(chosen.located(domain, level))
    }

    /// Draws one project from every record matching `query`.
    ///
    /// Unlike [`ProjectGenerator::select`], domain and level are optional, so
    /// a draw may span several buckets. The technology and duration filters
    /// and their fallbacks behave exactly as in `select`.
    ///
    /// # Errors
    /// - `UnknownDomain`, `UnknownLevel` for filter keys outside the closed sets.
    /// - `MalformedDuration` as in `select`.
    /// - `NoCandidates` when `query` matches no record.
    pub fn select_from<R>(
        &self,
        query: &RecordQuery,
        tech_preferences: &[String],
        max_duration_weeks: Option<u32>,
        rng: &mut R,
    ) -> SelectResult<ProjectRecord>
    where
        R: Rng + ?Sized,
    {
        if let Some(key) = query.domain.as_deref() {
            if Domain::parse(key).is_none() {
                return Err(SelectError::UnknownDomain(key.to_string()));
            }
        }
        if let Some(key) = query.level.as_deref() {
            if ExperienceLevel::parse(key).is_none() {
                return Err(SelectError::UnknownLevel(key.to_string()));
            }
        }

        let pool = self.catalog.all_records(query);
        let candidates = filter_by_tech(pool.iter().collect(), tech_preferences);
        let candidates = match max_duration_weeks {
            Some(max_weeks) => filter_by_duration(candidates, max_weeks)?,
            None => candidates,
        };

        let chosen = candidates.choose(rng).ok_or(SelectError::NoCandidates)?;
        debug!(
            "event=select_from module=selection status=ok pool={} candidates={}",
            pool.len(),
            candidates.len()
        );
        Ok((*chosen).clone())
    }

    /// Returns located copies of every record matching `query`.
    pub fn all_records(&self, query: &RecordQuery) -> Vec<ProjectRecord> {
        self.catalog.all_records(query)
    }
}

/// Parses the upper bound of a `"<min>-<max> weeks"` duration.
///
/// Takes the text after the last `-` up to the first whitespace. A string
/// without `-` is read from its start, so `"3 weeks"` yields `3`.
pub fn parse_duration_weeks(duration: &str) -> Option<u32> {
    let tail = duration.rsplit('-').next()?;
    tail.split_whitespace().next()?.parse().ok()
}

fn filter_by_tech<'r>(
    candidates: Vec<&'r ProjectRecord>,
    preferences: &[String],
) -> Vec<&'r ProjectRecord> {
    if preferences.is_empty() {
        return candidates;
    }

    let matched: Vec<&ProjectRecord> = candidates
        .iter()
        .copied()
        .filter(|record| preferences.iter().any(|tech| record.uses_tech(tech)))
        .collect();

    if matched.is_empty() {
        info!(
            "event=tech_filter module=selection status=fallback preferences={} candidates={}",
            preferences.len(),
            candidates.len()
        );
        return candidates;
    }
    matched
}

fn filter_by_duration(
    candidates: Vec<&ProjectRecord>,
    max_weeks: u32,
) -> SelectResult<Vec<&ProjectRecord>> {
    let mut matched = Vec::new();
    for record in &candidates {
        let upper = parse_duration_weeks(&record.duration).ok_or_else(|| {
            warn!(
                "event=duration_filter module=selection status=error reason=malformed_duration"
            );
            SelectError::MalformedDuration {
                title: record.title.clone(),
                duration: record.duration.clone(),
            }
        })?;
        if upper <= max_weeks {
            matched.push(*record);
        }
    }

    if matched.is_empty() {
        info!(
            "event=duration_filter module=selection status=fallback max_weeks={} candidates={}",
            max_weeks,
            candidates.len()
        );
        return Ok(candidates);
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::parse_duration_weeks;

    #[test]
    fn parse_duration_reads_upper_bound() {
        assert_eq!(parse_duration_weeks("1-2 weeks"), Some(2));
        assert_eq!(parse_duration_weeks("10-12 weeks"), Some(12));
    }

    #[test]
    fn parse_duration_without_range_reads_leading_number() {
        assert_eq!(parse_duration_weeks("3 weeks"), Some(3));
    }

    #[test]
    fn parse_duration_rejects_malformed_values() {
        assert_eq!(parse_duration_weeks("a few weeks"), None);
        assert_eq!(parse_duration_weeks("2-"), None);
        assert_eq!(parse_duration_weeks(""), None);
        assert_eq!(parse_duration_weeks("1-two weeks"), None);
    }
}
