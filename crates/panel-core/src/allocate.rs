use std::cmp::Reverse;

use tracing::debug;

use panel_model::{AllocatedBucket, Bucket, Result, SamplerError};

/// Splits a total sample budget across strata proportionally to their size.
///
/// When the budget covers the whole population, every bucket is returned
/// fully allocated (sample everyone). Otherwise each bucket's raw share is
/// rounded up to a whole count with a minimum of one sample per bucket, the
/// buckets are ordered by (expected samples desc, average history length
/// desc) to break ties deterministically in favor of longer histories, and
/// the running total is clipped against the budget: buckets strictly below
/// the budget keep their rounded count, the first bucket to reach or pass it
/// is clipped to the exact remainder, and everything after it is dropped.
///
/// # Errors
///
/// Returns [`SamplerError::DataConsistency`] if the final counts do not sum
/// to the budget exactly. Ceiling-based rounding combined with clipping is
/// not expected to overshoot, but any mismatch is treated as a logic bug,
/// never corrected.
pub fn assign_sample_count(buckets: &[Bucket], sample_size: usize) -> Result<Vec<AllocatedBucket>> {
    let total_population: u64 = buckets.iter().map(|bucket| bucket.bucket_size).sum();
    let budget = sample_size as u64;

    if budget >= total_population {
        debug!(
            budget,
            total_population, "budget covers the population, sampling everyone"
        );
        return Ok(buckets
            .iter()
            .map(|bucket| AllocatedBucket::from_bucket(bucket, bucket.bucket_size))
            .collect());
    }
    if budget == 0 {
        return Ok(Vec::new());
    }

    // Raw proportional shares, largest first; the ordering only fixes the
    // rounding order, not the final output order.
    let mut shares: Vec<(f64, &Bucket)> = buckets
        .iter()
        .map(|bucket| {
            let proportion = bucket.bucket_size as f64 / total_population as f64;
            (proportion * budget as f64, bucket)
        })
        .collect();
    shares.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut allocated: Vec<AllocatedBucket> = shares
        .into_iter()
        .map(|(share, bucket)| {
            let expected = (share.ceil() as u64).max(1);
            AllocatedBucket::from_bucket(bucket, expected)
        })
        .collect();

    // Ties on expected samples are resolved by average history length.
    allocated.sort_by(|a, b| {
        Reverse(a.expected_samples)
            .cmp(&Reverse(b.expected_samples))
            .then(b.avg_history_length.total_cmp(&a.avg_history_length))
    });

    let mut result = Vec::new();
    let mut cumulative = 0u64;
    for mut bucket in allocated {
        if cumulative + bucket.expected_samples < budget {
            cumulative += bucket.expected_samples;
            result.push(bucket);
        } else {
            // First bucket to reach or pass the budget: clip to the exact
            // remainder and drop everything after it.
            bucket.expected_samples = budget - cumulative;
            cumulative = budget;
            result.push(bucket);
            break;
        }
    }

    let assigned: u64 = result.iter().map(|bucket| bucket.expected_samples).sum();
    if assigned != budget {
        return Err(SamplerError::DataConsistency(format!(
            "sum of expected samples {assigned} is not equal to the sample size {budget}"
        )));
    }

    debug!(budget, strata = result.len(), "allocated sample budget");
    Ok(result)
}
