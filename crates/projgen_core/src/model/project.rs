//! Project record and closed key sets.
//!
//! # Responsibility
//! - Define `ProjectRecord`, the single idea shared by selection and export.
//! - Map closed-set keys to and from their stable wire names.
//!
//! # Invariants
//! - `domain` / `experience_level` are `None` on canonical records and only
//!   set on copies produced by [`ProjectRecord::located`].
//! - `duration` keeps the `"<min>-<max> weeks"` shape; it is parsed lazily
//!   by the selection engine, not here.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Top-level subject-matter category, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Cybersecurity,
    DataAnalytics,
    ArtificialIntelligence,
    CloudSecurity,
}

impl Domain {
    /// All domains in stable catalog order.
    pub const ALL: [Domain; 4] = [
        Domain::Cybersecurity,
        Domain::DataAnalytics,
        Domain::ArtificialIntelligence,
        Domain::CloudSecurity,
    ];

    /// Stable wire key, e.g. `data_analytics`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cybersecurity => "cybersecurity",
            Self::DataAnalytics => "data_analytics",
            Self::ArtificialIntelligence => "artificial_intelligence",
            Self::CloudSecurity => "cloud_security",
        }
    }

    /// Human-readable label, e.g. `Data Analytics`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cybersecurity => "Cybersecurity",
            Self::DataAnalytics => "Data Analytics",
            Self::ArtificialIntelligence => "Artificial Intelligence",
            Self::CloudSecurity => "Cloud Security",
        }
    }

    /// Parses an exact wire key. Matching is case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|domain| domain.as_str() == value)
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Experience-level bucket key inside one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// All levels in stable catalog order.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parses an exact wire key. Matching is case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }
}

impl Display for ExperienceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display difficulty label.
///
/// Kept in lockstep with `ExperienceLevel` by the built-in data, but stored
/// separately because it is part of the record payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Display label with its stored casing, e.g. `Intermediate`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One project idea with its full descriptive payload.
///
/// Field order is the serialization order used by JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique within the catalog.
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub skills: Vec<String>,
    /// Range string such as `2-3 weeks`.
    pub duration: String,
    pub difficulty: Difficulty,
    pub learning_outcomes: Vec<String>,
    pub features: Vec<String>,
    pub extensions: Vec<String>,
    /// Catalog domain key; set only on located copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    /// Catalog level key; set only on located copies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
}

impl ProjectRecord {
    /// Returns a copy of this record tagged with the catalog location it was
    /// found under. The receiver is left untouched.
    pub fn located(&self, domain: Domain, level: ExperienceLevel) -> Self {
        Self {
            domain: Some(domain),
            experience_level: Some(level),
            ..self.clone()
        }
    }

    /// Returns whether this record carries an attached catalog location.
    pub fn is_located(&self) -> bool {
        self.domain.is_some() || self.experience_level.is_some()
    }

    /// Returns whether any `tech_stack` entry equals `tech`, ignoring case.
    pub fn uses_tech(&self, tech: &str) -> bool {
        let wanted = tech.to_lowercase();
        self.tech_stack
            .iter()
            .any(|entry| entry.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, Domain, ExperienceLevel, ProjectRecord};

    fn sample() -> ProjectRecord {
        ProjectRecord {
            title: "Log Parser".to_string(),
            description: "Parse logs.".to_string(),
            tech_stack: vec!["Rust".to_string(), "Serde".to_string()],
            skills: vec!["Parsing".to_string()],
            duration: "1-2 weeks".to_string(),
            difficulty: Difficulty::Beginner,
            learning_outcomes: vec![],
            features: vec![],
            extensions: vec![],
            domain: None,
            experience_level: None,
        }
    }

    #[test]
    fn domain_keys_round_trip_through_parse() {
        for domain in Domain::ALL {
            assert_eq!(Domain::parse(domain.as_str()), Some(domain));
        }
        assert_eq!(Domain::parse("Cybersecurity"), None);
        assert_eq!(Domain::parse("not_a_domain"), None);
    }

    #[test]
    fn level_parse_rejects_unknown_keys() {
        assert_eq!(
            ExperienceLevel::parse("advanced"),
            Some(ExperienceLevel::Advanced)
        );
        assert_eq!(ExperienceLevel::parse("expert"), None);
    }

    #[test]
    fn located_copy_leaves_canonical_record_untouched() {
        let canonical = sample();
        let copy = canonical.located(Domain::CloudSecurity, ExperienceLevel::Beginner);

        assert!(!canonical.is_located());
        assert_eq!(copy.domain, Some(Domain::CloudSecurity));
        assert_eq!(copy.experience_level, Some(ExperienceLevel::Beginner));
        assert_eq!(copy.title, canonical.title);
    }

    #[test]
    fn uses_tech_is_case_insensitive_and_whole_token() {
        let record = sample();
        assert!(record.uses_tech("rust"));
        assert!(record.uses_tech("SERDE"));
        assert!(!record.uses_tech("Ser"));
    }
}
