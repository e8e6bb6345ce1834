//! Sampling core for the panel sampler.
//!
//! The pipeline runs these stages in order, all in memory and single
//! threaded:
//! 1. **Filter**: restrict events to the time window and exclusion set
//! 2. **Aggregate**: per-professional history lengths, then strata sizes
//! 3. **Allocate**: proportional-to-size split of the sample budget
//! 4. **Draw**: uniform sampling without replacement per stratum
//! 5. **Anonymize**: collision-checked token mappings over the output rows
//!
//! The orchestrator in [`sample`] composes the stages and owns all inputs
//! for the duration of one call; repeated runs are sequential, each feeding
//! the previous run's exported mappings back in.

pub mod allocate;
pub mod anonymize;
pub mod history;
pub mod metrics;
pub mod sample;

pub use allocate::assign_sample_count;
pub use anonymize::{anonymize_dataset, generate_anonymized_id_mapping};
pub use history::{calculate_bucket_size, filter_events, history_length_per_professional};
pub use metrics::{
    MeanComparison, PercentileComparison, compare_average_history_length,
    compare_percentiles_history_length,
};
pub use sample::{SampleRequest, SampleResult, sample, sample_from_bucket, sample_professionals};
