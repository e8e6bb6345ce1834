mod common;

use std::collections::{BTreeMap, BTreeSet};

use common::event;
use panel_core::{anonymize_dataset, generate_anonymized_id_mapping};
use panel_model::SamplerError;

#[test]
fn generates_one_distinct_token_per_id() {
    let ids: BTreeSet<String> = (0..500).map(|i| format!("prof-{i}")).collect();
    let mapping = generate_anonymized_id_mapping(&ids).expect("generate mapping");

    assert_eq!(mapping.len(), ids.len());
    let tokens: BTreeSet<&String> = mapping.values().collect();
    assert_eq!(tokens.len(), ids.len());
    // tokens are canonical 128-bit identifiers and never echo the input
    for (id, token) in &mapping {
        assert_eq!(token.len(), 36);
        assert_ne!(id, token);
    }
}

#[test]
fn empty_id_set_yields_empty_mapping() {
    let mapping = generate_anonymized_id_mapping(&BTreeSet::new()).expect("generate mapping");
    assert!(mapping.is_empty());
}

#[test]
fn replaces_both_identifier_columns() {
    let events = vec![
        event("org-a", "prof-1", "2019", "2023-03-01T10:00:00", "login"),
        event("org-a", "prof-2", "2019", "2023-03-02T10:00:00", "message"),
    ];
    let professionals = BTreeMap::from([
        ("prof-1".to_string(), "token-p1".to_string()),
        ("prof-2".to_string(), "token-p2".to_string()),
    ]);
    let organizations = BTreeMap::from([("org-a".to_string(), "token-o1".to_string())]);

    let anonymized =
        anonymize_dataset(events, &professionals, &organizations).expect("anonymize");
    assert_eq!(anonymized.len(), 2);
    for event in &anonymized {
        assert_eq!(event.organization_id, "token-o1");
        assert!(event.professional_id.starts_with("token-p"));
    }
    // non-identifier columns are untouched
    assert_eq!(anonymized[1].event_type, "message");
    assert_eq!(anonymized[1].professional_cohort, "2019");
}

#[test]
fn detects_missing_mapping_entry_as_leak() {
    let events = vec![
        event("org-a", "prof-1", "2019", "2023-03-01T10:00:00", "login"),
        event("org-a", "prof-2", "2019", "2023-03-02T10:00:00", "login"),
    ];
    let professionals = BTreeMap::from([("prof-1".to_string(), "token-p1".to_string())]);
    let organizations = BTreeMap::from([("org-a".to_string(), "token-o1".to_string())]);

    let error =
        anonymize_dataset(events, &professionals, &organizations).expect_err("should leak");
    assert!(matches!(
        error,
        SamplerError::DataLeak { ref column } if column == "professional_id"
    ));
}

#[test]
fn detects_identity_mapping_as_leak() {
    let events = vec![event("org-a", "prof-1", "2019", "2023-03-01T10:00:00", "login")];
    let professionals = BTreeMap::from([("prof-1".to_string(), "token-p1".to_string())]);
    // organization maps to itself
    let organizations = BTreeMap::from([("org-a".to_string(), "org-a".to_string())]);

    let error =
        anonymize_dataset(events, &professionals, &organizations).expect_err("should leak");
    assert!(matches!(
        error,
        SamplerError::DataLeak { ref column } if column == "organization_id"
    ));
}
