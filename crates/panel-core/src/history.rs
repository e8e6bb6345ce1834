use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use panel_model::{Bucket, Event, HistoryRecord};

/// Restricts events to the inclusive time window and drops excluded
/// professionals.
///
/// Both bounds compare against midnight of the given dates, so an event on
/// the `until` day itself is only kept at exactly `00:00:00`.
pub fn filter_events(
    events: &[Event],
    after: NaiveDate,
    until: NaiveDate,
    excluded_ids: &BTreeSet<String>,
) -> Vec<Event> {
    let lower = after.and_hms_opt(0, 0, 0).unwrap_or_default();
    let upper = until.and_hms_opt(0, 0, 0).unwrap_or_default();
    events
        .iter()
        .filter(|event| {
            event.ts >= lower && event.ts <= upper && !excluded_ids.contains(&event.professional_id)
        })
        .cloned()
        .collect()
}

/// Counts events per distinct professional.
///
/// Groups by (organization, professional, cohort); output is sorted by that
/// key, so the result is deterministic for a given input set.
pub fn history_length_per_professional(events: &[Event]) -> Vec<HistoryRecord> {
    let mut counts: BTreeMap<(&str, &str, &str), u64> = BTreeMap::new();
    for event in events {
        *counts
            .entry((
                &event.organization_id,
                &event.professional_id,
                &event.professional_cohort,
            ))
            .or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(
            |((organization_id, professional_id, professional_cohort), history_length)| {
                HistoryRecord {
                    organization_id: organization_id.to_string(),
                    professional_id: professional_id.to_string(),
                    professional_cohort: professional_cohort.to_string(),
                    history_length,
                }
            },
        )
        .collect()
}

/// Derives the (organization, cohort) strata from per-professional history.
///
/// `bucket_size` counts distinct professionals; `avg_history_length` is the
/// mean of their history lengths.
pub fn calculate_bucket_size(history: &[HistoryRecord]) -> Vec<Bucket> {
    let mut groups: BTreeMap<(&str, &str), (u64, u64)> = BTreeMap::new();
    for record in history {
        let entry = groups
            .entry((&record.organization_id, &record.professional_cohort))
            .or_insert((0, 0));
        entry.0 += 1;
        entry.1 += record.history_length;
    }
    groups
        .into_iter()
        .map(|((organization_id, professional_cohort), (size, total_length))| Bucket {
            organization_id: organization_id.to_string(),
            professional_cohort: professional_cohort.to_string(),
            bucket_size: size,
            avg_history_length: total_length as f64 / size as f64,
        })
        .collect()
}
