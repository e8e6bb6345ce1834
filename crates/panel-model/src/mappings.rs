use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The two pseudonymization maps used by a sampling run: real identifier to
/// random token, one map for organizations and one for professionals.
///
/// Mappings loaded from a previous run ("carried forward") are preserved and
/// extended rather than replaced; merging happens in the orchestrator so the
/// precedence rule stays auditable. Serializes to the on-disk JSON shape
/// `{"organizations": {...}, "professionals": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdMappings {
    pub organizations: BTreeMap<String, String>,
    pub professionals: BTreeMap<String, String>,
}

impl IdMappings {
    pub fn new(
        organizations: BTreeMap<String, String>,
        professionals: BTreeMap<String, String>,
    ) -> Self {
        Self {
            organizations,
            professionals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty() && self.professionals.is_empty()
    }
}
