use std::collections::BTreeSet;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use panel_model::{
    AllocatedBucket, Event, HistoryRecord, IdMappings, Result, RunArguments, SamplerError,
};

use crate::allocate::assign_sample_count;
use crate::anonymize::{anonymize_dataset, generate_anonymized_id_mapping};
use crate::history::{calculate_bucket_size, filter_events, history_length_per_professional};

/// Historical epoch used when no lower window bound is given.
const DEFAULT_AFTER: (i32, u32, u32) = (2022, 1, 1);

/// Parameters of one orchestrated sampling run.
///
/// `mappings` carries identifier mappings from a previous run; their
/// professionals are excluded from drawing so repeated runs never sample the
/// same professional twice. Reproducibility of the draw itself is the
/// caller's responsibility via the RNG handed to [`sample`].
#[derive(Debug, Clone, Default)]
pub struct SampleRequest {
    pub output_sample_count: usize,
    /// Lower window bound; defaults to 2022-01-01.
    pub after: Option<NaiveDate>,
    /// Upper window bound; defaults to the current date.
    pub until: Option<NaiveDate>,
    pub excluded_ids: BTreeSet<String>,
    pub mappings: IdMappings,
    pub include_all_in_output: bool,
}

impl SampleRequest {
    pub fn new(output_sample_count: usize) -> Self {
        Self {
            output_sample_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_window(mut self, after: NaiveDate, until: NaiveDate) -> Self {
        self.after = Some(after);
        self.until = Some(until);
        self
    }

    #[must_use]
    pub fn with_excluded_ids<I: IntoIterator<Item = String>>(mut self, ids: I) -> Self {
        self.excluded_ids = ids.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_mappings(mut self, mappings: IdMappings) -> Self {
        self.mappings = mappings;
        self
    }

    #[must_use]
    pub fn with_include_all_in_output(mut self, include: bool) -> Self {
        self.include_all_in_output = include;
        self
    }
}

/// Outcome of one sampling run, immutable once built; ownership passes to
/// the exporter.
#[derive(Debug, Clone)]
pub struct SampleResult {
    /// Professionals drawn in this run, in draw order.
    pub sampled_professionals: Vec<String>,
    /// Merged identifier mappings (carried-forward entries preserved).
    pub id_mappings: IdMappings,
    /// Anonymized event rows restricted to the output professionals.
    pub samples: Vec<Event>,
    /// Snapshot of the effective run parameters.
    pub configuration: RunArguments,
}

/// Draws `expected_samples` distinct professionals uniformly without
/// replacement from one (organization, cohort) stratum.
///
/// # Errors
///
/// Returns [`SamplerError::DataConsistency`] when the stratum holds fewer
/// professionals than requested. The counts derive from the same population,
/// so this should never fire; it is checked anyway.
pub fn sample_from_bucket<R: Rng + ?Sized>(
    history: &[HistoryRecord],
    bucket: &AllocatedBucket,
    rng: &mut R,
) -> Result<Vec<String>> {
    let members: Vec<&HistoryRecord> = history
        .iter()
        .filter(|record| {
            record.organization_id == bucket.organization_id
                && record.professional_cohort == bucket.professional_cohort
        })
        .collect();

    let count = bucket.expected_samples as usize;
    if members.len() < count {
        return Err(SamplerError::DataConsistency(format!(
            "bucket ({}, {}) holds {} professionals, cannot draw {count}",
            bucket.organization_id,
            bucket.professional_cohort,
            members.len(),
        )));
    }

    let drawn: Vec<String> = rand::seq::index::sample(rng, members.len(), count)
        .iter()
        .map(|index| members[index].professional_id.clone())
        .collect();
    if drawn.len() != count {
        return Err(SamplerError::DataConsistency(
            "the number of sampled professionals is not equal to the expected samples".to_string(),
        ));
    }
    Ok(drawn)
}

/// Draws every allocated bucket in turn, concatenating the per-stratum
/// samples.
pub fn sample_professionals<R: Rng + ?Sized>(
    history: &[HistoryRecord],
    allocated: &[AllocatedBucket],
    rng: &mut R,
) -> Result<Vec<String>> {
    let mut sampled = Vec::new();
    for bucket in allocated {
        sampled.extend(sample_from_bucket(history, bucket, rng)?);
    }
    Ok(sampled)
}

/// Runs one full sampling pass: filter, stratify, allocate, draw,
/// anonymize.
///
/// Professionals present in the carried-forward mapping are excluded from
/// drawing on top of the explicit exclusions, so repeated runs never sample
/// the same professional twice. With `include_all_in_output`, previously
/// sampled professionals are re-included in the output rows while fresh
/// explicit exclusions still apply; this asymmetry between the two
/// exclusion kinds is deliberate.
pub fn sample<R: Rng + ?Sized>(
    events: &[Event],
    request: SampleRequest,
    rng: &mut R,
) -> Result<SampleResult> {
    let after = request.after.unwrap_or_else(|| {
        let (y, m, d) = DEFAULT_AFTER;
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    });
    let until = request
        .until
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    // Previously mapped professionals join the exclusion set before any
    // bucketing, so they cannot be drawn again.
    let mut excluded_for_sampling = request.excluded_ids.clone();
    excluded_for_sampling.extend(request.mappings.professionals.keys().cloned());

    let filtered_for_sampling = filter_events(events, after, until, &excluded_for_sampling);
    let history = history_length_per_professional(&filtered_for_sampling);
    let buckets = calculate_bucket_size(&history);
    let allocated = assign_sample_count(&buckets, request.output_sample_count)?;
    let sampled_professionals = sample_professionals(&history, &allocated, rng)?;
    info!(
        requested = request.output_sample_count,
        drawn = sampled_professionals.len(),
        strata = allocated.len(),
        "drew stratified sample"
    );

    if sampled_professionals
        .iter()
        .any(|id| excluded_for_sampling.contains(id))
    {
        return Err(SamplerError::DataConsistency(
            "some sampled professionals were found in the excluded ids".to_string(),
        ));
    }

    let mut professionals_in_output: BTreeSet<String> =
        sampled_professionals.iter().cloned().collect();
    if request.include_all_in_output {
        professionals_in_output.extend(request.mappings.professionals.keys().cloned());
        // Only the explicit one-off exclusions are respected here; the
        // carried-forward professionals are exactly what gets re-included.
        for id in &request.excluded_ids {
            professionals_in_output.remove(id);
        }
    }

    // Second filter pass without the carried-forward ids, to recover full
    // event rows for previously sampled professionals as well.
    let filtered = filter_events(events, after, until, &request.excluded_ids);
    let selected: Vec<Event> = filtered
        .into_iter()
        .filter(|event| professionals_in_output.contains(&event.professional_id))
        .collect();
    debug!(rows = selected.len(), "selected output event rows");

    let organization_ids: BTreeSet<String> = selected
        .iter()
        .map(|event| event.organization_id.clone())
        .collect();
    let missing_organizations: BTreeSet<String> = organization_ids
        .into_iter()
        .filter(|id| !request.mappings.organizations.contains_key(id))
        .collect();
    let mut organizations = generate_anonymized_id_mapping(&missing_organizations)?;
    organizations.extend(request.mappings.organizations.clone());

    let missing_professionals: BTreeSet<String> = sampled_professionals
        .iter()
        .filter(|id| !request.mappings.professionals.contains_key(*id))
        .cloned()
        .collect();
    let mut professionals = generate_anonymized_id_mapping(&missing_professionals)?;
    professionals.extend(request.mappings.professionals.clone());

    let samples = anonymize_dataset(selected, &professionals, &organizations)?;

    let configuration = RunArguments {
        after,
        until,
        excluded_ids: request.excluded_ids.iter().cloned().collect(),
        output_sample_count: request.output_sample_count,
        include_all_in_output: request.include_all_in_output,
        input_mappings: request.mappings,
    };

    Ok(SampleResult {
        sampled_professionals,
        id_mappings: IdMappings::new(organizations, professionals),
        samples,
        configuration,
    })
}
