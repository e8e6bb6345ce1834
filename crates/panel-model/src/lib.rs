//! Data model definitions for the panel sampler workspace.
//!
//! This crate holds the typed records flowing through the sampling pipeline
//! (events, history records, strata), the identifier mappings used for
//! pseudonymization, run configuration, and the shared error taxonomy.

pub mod cohort;
pub mod config;
pub mod error;
pub mod event;
pub mod mappings;

pub use cohort::bucketize_cohort;
pub use config::{RunArguments, RunConfig};
pub use error::{Result, SamplerError};
pub use event::{AllocatedBucket, Bucket, Event, HistoryRecord};
pub use mappings::IdMappings;
