use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::mappings::IdMappings;

/// Run configuration loaded from the JSON config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub number_of_samples: usize,
    pub start_period: NaiveDate,
    pub end_period: NaiveDate,
}

/// Serializable snapshot of the effective parameters of one orchestrator
/// call, exported alongside the sample for reproducibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunArguments {
    pub after: NaiveDate,
    pub until: NaiveDate,
    pub excluded_ids: Vec<String>,
    pub output_sample_count: usize,
    pub include_all_in_output: bool,
    pub input_mappings: IdMappings,
}
