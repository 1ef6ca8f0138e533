//! In-memory catalog store.

use super::{CatalogError, CatalogResult};
use crate::model::project::{Domain, ExperienceLevel, ProjectRecord};
use log::info;
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, BTreeSet};

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

static BUILTIN_CATALOG: OnceCell<Catalog> = OnceCell::new();

type RawCatalog = BTreeMap<String, BTreeMap<String, Vec<ProjectRecord>>>;

/// Read filters for [`Catalog::all_records`].
///
/// Filters are raw strings so callers can pass user input through unchanged;
/// an unknown key simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub domain: Option<String>,
    pub level: Option<String>,
}

impl RecordQuery {
    /// Query matching every record in the catalog.
    pub fn all() -> Self {
        Self::default()
    }

    /// Query restricted to one domain.
    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            level: None,
        }
    }

    /// Adds a level restriction.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }
}

/// Immutable project catalog keyed by domain, then experience level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    buckets: BTreeMap<Domain, BTreeMap<ExperienceLevel, Vec<ProjectRecord>>>,
}

impl Catalog {
    /// Returns the built-in catalog, building it on first use.
    ///
    /// # Invariants
    /// - The embedded asset is parsed at most once per process.
    /// - A failed build is not cached; the error is returned to every caller
    ///   that attempts it.
    /// - Never panics.
    pub fn builtin() -> CatalogResult<&'static Catalog> {
        BUILTIN_CATALOG.get_or_try_init(|| {
            let catalog = Catalog::from_json(BUILTIN_CATALOG_JSON)?;
            catalog.ensure_complete()?;
            info!(
                "event=catalog_load module=catalog status=ok source=builtin records={}",
                catalog.len()
            );
            Ok(catalog)
        })
    }

    /// Parses a catalog from its nested JSON form.
    ///
    /// The top-level object maps domain keys to objects mapping level keys to
    /// record arrays. Partial catalogs (missing pairs, empty arrays) are
    /// accepted here; use [`Catalog::ensure_complete`] to require full
    /// coverage.
    ///
    /// # Errors
    /// - `Parse` for malformed JSON or record shape.
    /// - `UnknownDomain` / `UnknownLevel` for keys outside the closed sets.
    /// - `AttachedLocation` when a record carries location keys.
    /// - `DuplicateTitle` when two records share a title.
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        let mut buckets = BTreeMap::new();
        let mut titles = BTreeSet::new();

        for (domain_key, levels) in raw {
            let domain =
                Domain::parse(&domain_key).ok_or(CatalogError::UnknownDomain(domain_key))?;
            let mut by_level = BTreeMap::new();

            for (level_key, records) in levels {
                let level = ExperienceLevel::parse(&level_key).ok_or(
                    CatalogError::UnknownLevel {
                        domain,
                        level: level_key,
                    },
                )?;

                for record in &records {
                    if record.is_located() {
                        return Err(CatalogError::AttachedLocation {
                            title: record.title.clone(),
                        });
                    }
                    if !titles.insert(record.title.clone()) {
                        return Err(CatalogError::DuplicateTitle(record.title.clone()));
                    }
                }
                by_level.insert(level, records);
            }
            buckets.insert(domain, by_level);
        }

        Ok(Self { buckets })
    }

    /// Checks that every (domain, level) pair exists and is non-empty.
    pub fn ensure_complete(&self) -> CatalogResult<()> {
        for domain in Domain::ALL {
            for level in ExperienceLevel::ALL {
                match self.records(domain, level) {
                    None => return Err(CatalogError::MissingBucket { domain, level }),
                    Some([]) => return Err(CatalogError::EmptyBucket { domain, level }),
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }

    /// Returns whether `domain` has a sub-mapping in this catalog.
    pub fn contains_domain(&self, domain: Domain) -> bool {
        self.buckets.contains_key(&domain)
    }

    /// Returns the canonical records of one bucket, without location keys.
    pub fn records(&self, domain: Domain, level: ExperienceLevel) -> Option<&[ProjectRecord]> {
        self.buckets
            .get(&domain)
            .and_then(|levels| levels.get(&level))
            .map(Vec::as_slice)
    }

    /// Returns located copies of every record matching `query`.
    ///
    /// Domains and levels are visited in their stable catalog order. Unknown
    /// filter keys yield an empty list.
    pub fn all_records(&self, query: &RecordQuery) -> Vec<ProjectRecord> {
        let domain_filter = match query.domain.as_deref() {
            Some(key) => match Domain::parse(key) {
                Some(domain) => Some(domain),
                None => return Vec::new(),
            },
            None => None,
        };
        let level_filter = match query.level.as_deref() {
            Some(key) => match ExperienceLevel::parse(key) {
                Some(level) => Some(level),
                None => return Vec::new(),
            },
            None => None,
        };

        self.located()
            .filter(|(domain, _, _)| domain_filter.map_or(true, |wanted| *domain == wanted))
            .filter(|(_, level, _)| level_filter.map_or(true, |wanted| *level == wanted))
            .map(|(domain, level, record)| record.located(domain, level))
            .collect()
    }

    /// Looks up one record by exact title and returns a located copy.
    pub fn find_by_title(&self, title: &str) -> Option<ProjectRecord> {
        self.located()
            .find(|(_, _, record)| record.title == title)
            .map(|(domain, level, record)| record.located(domain, level))
    }

    /// Returns the first intermediate record of every domain, located.
    pub fn featured(&self) -> Vec<ProjectRecord> {
        Domain::ALL
            .into_iter()
            .filter_map(|domain| {
                self.records(domain, ExperienceLevel::Intermediate)
                    .and_then(|records| records.first())
                    .map(|record| record.located(domain, ExperienceLevel::Intermediate))
            })
            .collect()
    }

    /// Total number of records across all buckets.
    pub fn len(&self) -> usize {
        self.buckets
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn located(&self) -> impl Iterator<Item = (Domain, ExperienceLevel, &ProjectRecord)> + '_ {
        self.buckets.iter().flat_map(|(domain, levels)| {
            levels.iter().flat_map(move |(level, records)| {
                records.iter().map(move |record| (*domain, *level, record))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, RecordQuery};
    use crate::catalog::CatalogError;
    use crate::model::project::{Domain, ExperienceLevel};

    const RECORD_FIELDS: &str = r#""description": "d",
        "tech_stack": ["Rust"],
        "skills": [],
        "duration": "1-2 weeks",
        "difficulty": "Beginner",
        "learning_outcomes": [],
        "features": [],
        "extensions": []"#;

    fn record_json(title: &str) -> String {
        format!(r#"{{"title": "{title}", {RECORD_FIELDS}}}"#)
    }

    #[test]
    fn from_json_rejects_unknown_domain_key() {
        let text = format!(r#"{{"robotics": {{"beginner": [{}]}}}}"#, record_json("a"));
        let err = Catalog::from_json(&text).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownDomain(key) if key == "robotics"));
    }

    #[test]
    fn from_json_rejects_unknown_level_key() {
        let text = format!(r#"{{"cybersecurity": {{"expert": [{}]}}}}"#, record_json("a"));
        let err = Catalog::from_json(&text).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownLevel { domain: Domain::Cybersecurity, ref level } if level == "expert"
        ));
    }

    #[test]
    fn from_json_rejects_duplicate_titles_across_buckets() {
        let text = format!(
            r#"{{"cybersecurity": {{"beginner": [{}]}}, "cloud_security": {{"advanced": [{}]}}}}"#,
            record_json("same"),
            record_json("same")
        );
        let err = Catalog::from_json(&text).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTitle(title) if title == "same"));
    }

    #[test]
    fn from_json_rejects_records_carrying_location() {
        let text = format!(
            r#"{{"cybersecurity": {{"beginner": [{{"title": "a", {RECORD_FIELDS}, "domain": "cybersecurity"}}]}}}}"#
        );
        let err = Catalog::from_json(&text).unwrap_err();
        assert!(matches!(err, CatalogError::AttachedLocation { .. }));
    }

    #[test]
    fn ensure_complete_reports_missing_and_empty_buckets() {
        let text = format!(r#"{{"cybersecurity": {{"beginner": [{}]}}}}"#, record_json("a"));
        let catalog = Catalog::from_json(&text).expect("partial catalog should parse");
        let err = catalog.ensure_complete().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingBucket {
                domain: Domain::Cybersecurity,
                level: ExperienceLevel::Intermediate
            }
        ));

        let empty = Catalog::from_json(r#"{"cybersecurity": {"beginner": []}}"#)
            .expect("empty bucket should parse");
        let err = empty.ensure_complete().unwrap_err();
        assert!(matches!(err, CatalogError::EmptyBucket { .. }));
    }

    #[test]
    fn all_records_orders_domains_by_catalog_order_not_key_order() {
        let text = format!(
            r#"{{"cloud_security": {{"beginner": [{}]}}, "data_analytics": {{"beginner": [{}]}}}}"#,
            record_json("cloud"),
            record_json("data")
        );
        let catalog = Catalog::from_json(&text).expect("catalog should parse");
        let titles: Vec<String> = catalog
            .all_records(&RecordQuery::all())
            .into_iter()
            .map(|record| record.title)
            .collect();
        assert_eq!(titles, vec!["data".to_string(), "cloud".to_string()]);
    }
}
