//! Persists one run's results into its output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use panel_core::SampleResult;
use panel_ingest::EXPECTED_COLUMNS;

/// Writes all artifacts of a completed run into `output_dir` (created if
/// absent): `id_mappings.json`, `sampled_professionals.csv`,
/// `sampled_anonymized_dataset.csv` and
/// `arguments_to_sampler_function.json`.
///
/// Called only after the whole run has succeeded, so a failed run never
/// leaves partial output behind.
pub fn write_result(result: &SampleResult, output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir: {}", output_dir.display()))?;

    let mappings_path = output_dir.join("id_mappings.json");
    let mappings_json = serde_json::to_string_pretty(&result.id_mappings)
        .context("serialize id mappings")?;
    fs::write(&mappings_path, mappings_json)
        .with_context(|| format!("write {}", mappings_path.display()))?;

    let professionals_path = output_dir.join("sampled_professionals.csv");
    let mut writer = WriterBuilder::new()
        .from_path(&professionals_path)
        .with_context(|| format!("write {}", professionals_path.display()))?;
    writer.write_record(["professional_id"])?;
    for id in &result.sampled_professionals {
        writer.write_record([id.as_str()])?;
    }
    writer.flush()?;

    let dataset_path = output_dir.join("sampled_anonymized_dataset.csv");
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(&dataset_path)
        .with_context(|| format!("write {}", dataset_path.display()))?;
    writer.write_record(EXPECTED_COLUMNS)?;
    for event in &result.samples {
        writer.serialize(event)?;
    }
    writer.flush()?;

    let arguments_path = output_dir.join("arguments_to_sampler_function.json");
    let arguments_json = serde_json::to_string_pretty(&result.configuration)
        .context("serialize run arguments")?;
    fs::write(&arguments_path, arguments_json)
        .with_context(|| format!("write {}", arguments_path.display()))?;

    info!(
        output_dir = %output_dir.display(),
        professionals = result.sampled_professionals.len(),
        rows = result.samples.len(),
        "wrote sampling outputs"
    );
    Ok(())
}
