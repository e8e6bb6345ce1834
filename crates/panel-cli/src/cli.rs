//! CLI argument definitions for the panel sampler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "panel-sampler",
    version,
    about = "Stratified, privacy-preserving sampling of professionals from event logs",
    long_about = "Draw a statistically representative sample of professionals from an \
                  event-log CSV.\n\n\
                  Professionals are stratified by organization and enrollment cohort, the \
                  sample budget is allocated proportionally to stratum size, and all \
                  identifiers in the output are pseudonymized with reusable mappings."
)]
pub struct Cli {
    /// Path to the event dataset CSV file.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// The sampler configuration file (JSON).
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Id-mappings JSON from a previous run; its professionals are excluded
    /// from drawing and their tokens are reused in the output.
    #[arg(long = "id-mappings", value_name = "PATH")]
    pub id_mappings: Option<PathBuf>,

    /// Include previously sampled professionals in the output alongside the
    /// newly drawn sample.
    #[arg(long = "include-all-in-output")]
    pub include_all_in_output: bool,

    /// Output directory for generated files (default: out/<today>).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
