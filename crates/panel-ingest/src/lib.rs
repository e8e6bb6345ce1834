//! Event-log ingestion for the panel sampler.

pub mod csv_events;

pub use csv_events::{EXPECTED_COLUMNS, read_events};
