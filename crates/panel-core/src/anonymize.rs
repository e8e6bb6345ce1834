use std::collections::{BTreeMap, BTreeSet};

use uuid::Uuid;

use panel_model::{Event, Result, SamplerError};

/// Generates a fresh random token for each real identifier.
///
/// Tokens are random 128-bit identifiers in canonical string form. A
/// duplicate token among the generated values is astronomically unlikely but
/// checked: it fails with [`SamplerError::TokenCollision`] and is never
/// retried, since any occurrence points at a generation bug.
pub fn generate_anonymized_id_mapping(ids: &BTreeSet<String>) -> Result<BTreeMap<String, String>> {
    let mapping: BTreeMap<String, String> = ids
        .iter()
        .map(|id| (id.clone(), Uuid::new_v4().to_string()))
        .collect();

    let distinct_tokens: BTreeSet<&str> = mapping.values().map(String::as_str).collect();
    if distinct_tokens.len() != mapping.len() {
        return Err(SamplerError::TokenCollision);
    }
    Ok(mapping)
}

/// Replaces both identifier columns of a dataset using the supplied
/// mappings, then re-verifies that no original identifier survived.
///
/// Values missing from a mapping pass through unchanged; the verification
/// pass then fails with [`SamplerError::DataLeak`], which also catches a
/// mapping entry that maps an identifier to itself.
pub fn anonymize_dataset(
    events: Vec<Event>,
    professional_id_mapping: &BTreeMap<String, String>,
    organization_id_mapping: &BTreeMap<String, String>,
) -> Result<Vec<Event>> {
    let original_professionals: BTreeSet<String> = events
        .iter()
        .map(|event| event.professional_id.clone())
        .collect();
    let original_organizations: BTreeSet<String> = events
        .iter()
        .map(|event| event.organization_id.clone())
        .collect();

    let replaced: Vec<Event> = events
        .into_iter()
        .map(|mut event| {
            if let Some(token) = professional_id_mapping.get(&event.professional_id) {
                event.professional_id = token.clone();
            }
            if let Some(token) = organization_id_mapping.get(&event.organization_id) {
                event.organization_id = token.clone();
            }
            event
        })
        .collect();

    for event in &replaced {
        if original_professionals.contains(&event.professional_id) {
            return Err(SamplerError::DataLeak {
                column: "professional_id".to_string(),
            });
        }
        if original_organizations.contains(&event.organization_id) {
            return Err(SamplerError::DataLeak {
                column: "organization_id".to_string(),
            });
        }
    }
    Ok(replaced)
}
