//! Terminal summary of a completed sampling run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::pipeline::PipelineOutcome;

/// Prints the run summary and the history-length representativeness tables.
pub fn print_summary(outcome: &PipelineOutcome) {
    println!("Sampled professionals: {}", outcome.sampled_count);
    println!("Output rows: {}", outcome.output_rows);
    println!("Output: {}", outcome.output_dir.display());
    println!(
        "Average history length: full data {:.3}, sample {:.3}, diff {:+.3}",
        outcome.mean.original,
        outcome.mean.sampled,
        outcome.mean.difference()
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Percentile"),
        header_cell("Full Data"),
        header_cell("Sample"),
        header_cell("Difference"),
    ]);
    apply_table_style(&mut table);
    for row in &outcome.percentiles {
        table.add_row(vec![
            Cell::new(row.percentile).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", row.original)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", row.sampled)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", row.difference())).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
