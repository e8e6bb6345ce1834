use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use tracing::info;

use panel_model::{Event, Result, SamplerError, bucketize_cohort};

/// The exact column set the input dataset must carry, in canonical order.
pub const EXPECTED_COLUMNS: [&str; 5] = [
    "organization_id",
    "professional_id",
    "professional_cohort",
    "ts",
    "event_type",
];

/// Reads and validates the event dataset from a CSV file.
///
/// The header must match [`EXPECTED_COLUMNS`] exactly (any order); otherwise
/// a [`SamplerError::Schema`] names both the missing and the extra columns.
/// Cohort dates are validated as `YYYY-MM-DD` and discretized into cohort
/// labels during parsing; timestamps must match `YYYY-MM-DDThh:mm:ss`.
pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect();
    let columns = check_schema(&headers)?;

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or("").trim();

        events.push(Event {
            organization_id: field(columns.organization_id).to_string(),
            professional_id: field(columns.professional_id).to_string(),
            professional_cohort: bucketize_cohort(field(columns.professional_cohort))?,
            ts: parse_timestamp(field(columns.ts))?,
            event_type: field(columns.event_type).to_string(),
        });
    }

    info!(path = %path.display(), rows = events.len(), "parsed event dataset");
    Ok(events)
}

struct ColumnIndexes {
    organization_id: usize,
    professional_id: usize,
    professional_cohort: usize,
    ts: usize,
    event_type: usize,
}

fn check_schema(headers: &[String]) -> Result<ColumnIndexes> {
    let expected: BTreeSet<&str> = EXPECTED_COLUMNS.into_iter().collect();
    let got: BTreeSet<&str> = headers.iter().map(String::as_str).collect();

    let missing: BTreeSet<String> = expected
        .difference(&got)
        .map(|name| (*name).to_string())
        .collect();
    let extra: BTreeSet<String> = got
        .difference(&expected)
        .map(|name| (*name).to_string())
        .collect();
    if !missing.is_empty() || !extra.is_empty() {
        return Err(SamplerError::Schema { missing, extra });
    }

    let index_of = |name: &str| {
        headers
            .iter()
            .position(|header| header == name)
            .expect("checked above")
    };
    Ok(ColumnIndexes {
        organization_id: index_of("organization_id"),
        professional_id: index_of("professional_id"),
        professional_cohort: index_of("professional_cohort"),
        ts: index_of("ts"),
        event_type: index_of("event_type"),
    })
}

/// Parses a strict `YYYY-MM-DDThh:mm:ss` timestamp.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let type_error = || SamplerError::ColumnType {
        column: "ts".to_string(),
        message: format!("expected ISO timestamp YYYY-MM-DDThh:mm:ss, got {raw:?}"),
    };

    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 19
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[10] == b'T'
        && bytes[13] == b':'
        && bytes[16] == b':'
        && bytes.iter().enumerate().all(|(i, b)| {
            matches!(i, 4 | 7 | 10 | 13 | 16) || b.is_ascii_digit()
        });
    if !shape_ok {
        return Err(type_error());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map_err(|_| type_error())
}
