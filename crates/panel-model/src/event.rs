use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One raw event-log record: an interaction between a professional and an
/// organization. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub organization_id: String,
    pub professional_id: String,
    /// Cohort bucket label, already discretized (see [`crate::bucketize_cohort`]).
    pub professional_cohort: String,
    pub ts: NaiveDateTime,
    pub event_type: String,
}

/// Per-professional event count within the filtered window.
///
/// One record per distinct professional; `history_length` is at least 1 for
/// any professional that appears in the filtered event set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub organization_id: String,
    pub professional_id: String,
    pub professional_cohort: String,
    pub history_length: u64,
}

/// A stratum of professionals sharing organization and cohort.
///
/// Derived from history records and recomputed on every sampling run.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub organization_id: String,
    pub professional_cohort: String,
    /// Number of distinct professionals in the stratum.
    pub bucket_size: u64,
    pub avg_history_length: f64,
}

/// A bucket with its allocated share of the sample budget.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocatedBucket {
    pub organization_id: String,
    pub professional_cohort: String,
    pub bucket_size: u64,
    pub avg_history_length: f64,
    pub expected_samples: u64,
}

impl AllocatedBucket {
    pub fn from_bucket(bucket: &Bucket, expected_samples: u64) -> Self {
        Self {
            organization_id: bucket.organization_id.clone(),
            professional_cohort: bucket.professional_cohort.clone(),
            bucket_size: bucket.bucket_size,
            avg_history_length: bucket.avg_history_length,
            expected_samples,
        }
    }
}
