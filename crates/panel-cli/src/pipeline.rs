//! End-to-end sampling pipeline with explicit stages.
//!
//! The pipeline runs these stages in order:
//! 1. **Load**: read run configuration and optional carried-forward mappings
//! 2. **Ingest**: parse and validate the event dataset CSV
//! 3. **Sample**: filter, stratify, allocate, draw, anonymize
//! 4. **Compare**: history-length statistics of sample versus full data
//! 5. **Export**: write mappings, sample and arguments to the output dir

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info_span;

use panel_core::{
    MeanComparison, PercentileComparison, SampleRequest, compare_average_history_length,
    compare_percentiles_history_length, sample,
};
use panel_ingest::read_events;

use crate::config::{load_id_mappings, load_run_config};
use crate::output::write_result;

/// Inputs of one pipeline invocation, resolved from CLI flags.
#[derive(Debug, Clone)]
pub struct PipelineArgs {
    pub input: PathBuf,
    pub config: PathBuf,
    pub id_mappings: Option<PathBuf>,
    pub include_all_in_output: bool,
    pub output_dir: Option<PathBuf>,
}

/// Summary of a completed run, for terminal reporting.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub output_dir: PathBuf,
    pub sampled_count: usize,
    pub output_rows: usize,
    pub mean: MeanComparison,
    pub percentiles: Vec<PercentileComparison>,
}

/// Runs the whole pipeline once. Nothing is written unless every stage
/// succeeds.
pub fn run(args: &PipelineArgs) -> Result<PipelineOutcome> {
    let config = load_run_config(&args.config)?;

    let ingest_span = info_span!("ingest", input = %args.input.display());
    let events = ingest_span
        .in_scope(|| read_events(&args.input))
        .context("ingest events")?;

    let mut request = SampleRequest::new(config.number_of_samples)
        .with_window(config.start_period, config.end_period)
        .with_include_all_in_output(args.include_all_in_output);
    if let Some(path) = &args.id_mappings {
        let mappings = load_id_mappings(path)?;
        request = request
            .with_excluded_ids(mappings.professionals.keys().cloned())
            .with_mappings(mappings);
    }

    let sample_span = info_span!("sample", requested = config.number_of_samples);
    let result = sample_span
        .in_scope(|| sample(&events, request, &mut rand::rng()))
        .context("draw sample")?;

    let mean = compare_average_history_length(&events, &result.samples);
    let percentiles = compare_percentiles_history_length(&events, &result.samples);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(Path::new("out")));
    let export_span = info_span!("export", output_dir = %output_dir.display());
    export_span.in_scope(|| write_result(&result, &output_dir))?;

    Ok(PipelineOutcome {
        output_dir,
        sampled_count: result.sampled_professionals.len(),
        output_rows: result.samples.len(),
        mean,
        percentiles,
    })
}

fn default_output_dir(base: &Path) -> PathBuf {
    base.join(Local::now().date_naive().to_string())
}
