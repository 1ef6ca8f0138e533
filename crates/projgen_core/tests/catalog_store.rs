use projgen_core::{Catalog, Domain, ExperienceLevel, RecordQuery};

#[test]
fn builtin_catalog_covers_every_bucket() {
    let catalog = Catalog::builtin().unwrap();
    catalog.ensure_complete().unwrap();
    assert_eq!(catalog.len(), 32);

    for domain in Domain::ALL {
        for level in ExperienceLevel::ALL {
            let records = catalog.records(domain, level).unwrap();
            assert!(!records.is_empty(), "{domain}/{level} should not be empty");
        }
    }
}

#[test]
fn builtin_catalog_is_built_once() {
    let first = Catalog::builtin().unwrap();
    let second = Catalog::builtin().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn canonical_records_carry_no_location() {
    let catalog = Catalog::builtin().unwrap();
    for domain in Domain::ALL {
        for level in ExperienceLevel::ALL {
            for record in catalog.records(domain, level).unwrap() {
                assert_eq!(record.domain, None);
                assert_eq!(record.experience_level, None);
            }
        }
    }
}

#[test]
fn all_records_attaches_location_keys() {
    let catalog = Catalog::builtin().unwrap();
    let records = catalog.all_records(&RecordQuery::domain("data_analytics"));

    assert_eq!(records.len(), 8);
    for record in &records {
        assert_eq!(record.domain, Some(Domain::DataAnalytics));
        assert!(record.experience_level.is_some());
    }

    // Reading located copies must not leak into canonical records.
    let canonical = catalog
        .records(Domain::DataAnalytics, ExperienceLevel::Beginner)
        .unwrap();
    assert_eq!(canonical[0].domain, None);
}

#[test]
fn all_records_visits_levels_in_stable_order() {
    let catalog = Catalog::builtin().unwrap();
    let titles: Vec<String> = catalog
        .all_records(&RecordQuery::domain("cloud_security"))
        .into_iter()
        .map(|record| record.title)
        .collect();

    assert_eq!(
        titles,
        vec![
            "Cloud Security Posture Management (CSPM) Tool",
            "Serverless Security Scanner",
            "Cloud Access Control Auditor",
            "Cloud-Native Threat Detection System",
            "Container Security & Kubernetes Hardening Platform",
            "Multi-Cloud Data Loss Prevention (DLP) System",
            "Zero Trust Architecture Implementation Platform",
            "Cloud Security Orchestration & Automation Platform (SOAR)",
        ]
    );
}

#[test]
fn all_records_without_filters_starts_with_cybersecurity_beginner() {
    let catalog = Catalog::builtin().unwrap();
    let records = catalog.all_records(&RecordQuery::all());

    assert_eq!(records.len(), 32);
    assert_eq!(records[0].title, "Password Strength Analyzer & Generator");
    assert_eq!(records[0].domain, Some(Domain::Cybersecurity));
    assert_eq!(records[0].experience_level, Some(ExperienceLevel::Beginner));
    assert_eq!(records[31].domain, Some(Domain::CloudSecurity));
    assert_eq!(records[31].experience_level, Some(ExperienceLevel::Advanced));
}

#[test]
fn level_filter_applies_across_domains() {
    let catalog = Catalog::builtin().unwrap();
    let records = catalog.all_records(&RecordQuery {
        domain: None,
        level: Some("advanced".to_string()),
    });

    assert_eq!(records.len(), 8);
    assert!(records
        .iter()
        .all(|record| record.experience_level == Some(ExperienceLevel::Advanced)));
}

#[test]
fn unknown_filters_yield_empty_results() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog
        .all_records(&RecordQuery::domain("not_a_domain"))
        .is_empty());
    assert!(catalog
        .all_records(&RecordQuery::domain("cybersecurity").with_level("expert"))
        .is_empty());
    assert!(catalog
        .all_records(&RecordQuery {
            domain: None,
            level: Some("Beginner".to_string()),
        })
        .is_empty());
}

#[test]
fn find_by_title_returns_located_copy() {
    let catalog = Catalog::builtin().unwrap();
    let record = catalog
        .find_by_title("Serverless Security Scanner")
        .unwrap();
    assert_eq!(record.domain, Some(Domain::CloudSecurity));
    assert_eq!(record.experience_level, Some(ExperienceLevel::Beginner));

    assert!(catalog.find_by_title("serverless security scanner").is_none());
}

#[test]
fn featured_picks_first_intermediate_record_per_domain() {
    let catalog = Catalog::builtin().unwrap();
    let titles: Vec<String> = catalog
        .featured()
        .into_iter()
        .map(|record| record.title)
        .collect();

    assert_eq!(
        titles,
        vec![
            "Web Application Vulnerability Scanner",
            "Real-Time Fraud Detection System",
            "Generative AI Content Creation Platform",
            "Cloud-Native Threat Detection System",
        ]
    );
}
