use std::collections::BTreeSet;

use thiserror::Error;

/// Error taxonomy for the sampling pipeline.
///
/// Every variant is fatal: a run either fully succeeds or aborts before any
/// output is written. `DataConsistency`, `TokenCollision` and `DataLeak`
/// signal internal logic bugs rather than bad input and are never silently
/// corrected.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// The input CSV does not carry exactly the expected columns.
    #[error("wrong csv columns; missing: [{}], extra: [{}]", join(.missing), join(.extra))]
    Schema {
        missing: BTreeSet<String>,
        extra: BTreeSet<String>,
    },

    /// A cell failed its expected format for the named column.
    #[error("wrong type in column {column}: {message}")]
    ColumnType { column: String, message: String },

    /// An internal invariant was violated (allocation sum mismatch, sampled
    /// count mismatch, sampled set overlapping exclusions).
    #[error("data consistency violation: {0}")]
    DataConsistency(String),

    /// Two distinct real identifiers were assigned the same token.
    #[error("collision in generated anonymized ids")]
    TokenCollision,

    /// An original identifier survived anonymization.
    #[error("original {column} values found in anonymized output")]
    DataLeak { column: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SamplerError>;

fn join(columns: &BTreeSet<String>) -> String {
    columns
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_names_both_column_sets() {
        let error = SamplerError::Schema {
            missing: BTreeSet::from(["professional_cohort".to_string()]),
            extra: BTreeSet::from(["professional_cohortes".to_string()]),
        };
        let message = error.to_string();
        assert!(message.contains("missing: [professional_cohort]"));
        assert!(message.contains("extra: [professional_cohortes]"));
    }
}
