//! Catalog statistics for overview screens.
//!
//! # Invariants
//! - Domain and difficulty counts follow their closed-set order and omit
//!   zero counts.
//! - Technology ranking is count-descending with first-seen order on ties.

use crate::model::project::{Difficulty, Domain, ProjectRecord};
use std::collections::HashMap;

/// Aggregate counts over a set of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    /// Counts per attached domain; unlocated records are not counted.
    pub by_domain: Vec<(Domain, usize)>,
    pub by_difficulty: Vec<(Difficulty, usize)>,
    /// Most used technologies, at most `top_n` entries.
    pub top_technologies: Vec<(String, usize)>,
}

impl CatalogStats {
    /// Computes statistics for `records`, keeping the `top_n` technologies.
    pub fn from_records(records: &[ProjectRecord], top_n: usize) -> Self {
        let by_domain = Domain::ALL
            .into_iter()
            .map(|domain| {
                let count = records
                    .iter()
                    .filter(|record| record.domain == Some(domain))
                    .count();
                (domain, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        let by_difficulty = Difficulty::ALL
            .into_iter()
            .map(|difficulty| {
                let count = records
                    .iter()
                    .filter(|record| record.difficulty == difficulty)
                    .count();
                (difficulty, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        Self {
            total: records.len(),
            by_domain,
            by_difficulty,
            top_technologies: rank_technologies(records, top_n),
        }
    }
}

fn rank_technologies(records: &[ProjectRecord], top_n: usize) -> Vec<(String, usize)> {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for tech in records.iter().flat_map(|record| record.tech_stack.iter()) {
        let count = counts.entry(tech.as_str()).or_insert_with(|| {
            first_seen.push(tech.as_str());
            0
        });
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|tech| (tech.to_string(), counts[tech]))
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|left, right| right.1.cmp(&left.1));
    ranked.truncate(top_n);
    ranked
}
