//! CLI library components for the panel sampler.

pub mod config;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod summary;
