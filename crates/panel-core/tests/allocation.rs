use panel_core::assign_sample_count;
use panel_model::{Bucket, SamplerError};
use proptest::prelude::*;

fn bucket(org: &str, cohort: &str, size: u64, avg: f64) -> Bucket {
    Bucket {
        organization_id: org.to_string(),
        professional_cohort: cohort.to_string(),
        bucket_size: size,
        avg_history_length: avg,
    }
}

#[test]
fn budget_above_population_selects_everyone() {
    let buckets = vec![bucket("org-a", "2019", 10, 3.0)];
    let allocated = assign_sample_count(&buckets, 50).expect("allocate");
    assert_eq!(allocated.len(), 1);
    assert_eq!(allocated[0].expected_samples, 10);
    assert_eq!(allocated[0].bucket_size, 10);
}

#[test]
fn budget_equal_to_population_selects_everyone() {
    let buckets = vec![bucket("org-a", "2019", 6, 2.0), bucket("org-b", "2019", 4, 5.0)];
    let allocated = assign_sample_count(&buckets, 10).expect("allocate");
    assert_eq!(allocated.len(), 2);
    let total: u64 = allocated.iter().map(|b| b.expected_samples).sum();
    assert_eq!(total, 10);
}

#[test]
fn zero_budget_allocates_nothing() {
    let buckets = vec![bucket("org-a", "2019", 6, 2.0), bucket("org-b", "2019", 4, 5.0)];
    let allocated = assign_sample_count(&buckets, 0).expect("allocate");
    assert!(allocated.is_empty());
}

#[test]
fn single_bucket_takes_the_whole_budget() {
    let buckets = vec![bucket("org-a", "2019", 100, 4.2)];
    let allocated = assign_sample_count(&buckets, 7).expect("allocate");
    assert_eq!(allocated.len(), 1);
    assert_eq!(allocated[0].expected_samples, 7);
}

#[test]
fn forty_seven_buckets_sum_to_a_budget_of_fifty() {
    // 44 strata with a raw share of exactly 1 and 3 strata with a share of
    // 2: every stratum survives the clipping stage and the counts sum to
    // the budget without any overshoot.
    let mut buckets = Vec::new();
    for index in 0..44 {
        buckets.push(bucket(&format!("org-{index}"), "2019", 20, 2.0 + index as f64));
    }
    for index in 0..3 {
        buckets.push(bucket(&format!("big-{index}"), "2020", 40, 10.0 + index as f64));
    }
    assert_eq!(buckets.iter().map(|b| b.bucket_size).sum::<u64>(), 1000);

    let allocated = assign_sample_count(&buckets, 50).expect("allocate");
    assert_eq!(allocated.len(), 47);
    let total: u64 = allocated.iter().map(|b| b.expected_samples).sum();
    assert_eq!(total, 50);
}

#[test]
fn ties_favor_longer_histories() {
    // Same size, same rounded count: the bucket with the longer average
    // history keeps its full allocation, the other one absorbs the clip.
    let buckets = vec![
        bucket("org-short", "2019", 10, 5.0),
        bucket("org-long", "2019", 10, 9.0),
    ];
    let allocated = assign_sample_count(&buckets, 7).expect("allocate");
    assert_eq!(allocated.len(), 2);
    assert_eq!(allocated[0].organization_id, "org-long");
    assert_eq!(allocated[0].expected_samples, 4);
    assert_eq!(allocated[1].organization_id, "org-short");
    assert_eq!(allocated[1].expected_samples, 3);
}

#[test]
fn clipped_output_drops_trailing_buckets() {
    let buckets = vec![
        bucket("org-a", "2019", 90, 3.0),
        bucket("org-b", "2019", 9, 2.0),
        bucket("org-c", "2019", 1, 1.0),
    ];
    // shares: 4.5, 0.45, 0.05 -> rounded 5, 1, 1; cumulative 5 reaches the
    // budget at the first bucket, the rest are dropped.
    let allocated = assign_sample_count(&buckets, 5).expect("allocate");
    assert_eq!(allocated.len(), 1);
    assert_eq!(allocated[0].organization_id, "org-a");
    assert_eq!(allocated[0].expected_samples, 5);
}

#[test]
fn empty_bucket_list_with_zero_budget() {
    let allocated = assign_sample_count(&[], 0).expect("allocate");
    assert!(allocated.is_empty());
}

#[test]
fn consistency_error_mentions_the_mismatch() {
    // Not reachable through the public path with well-formed buckets; the
    // check still exists, so at least exercise the error's display.
    let error = SamplerError::DataConsistency("sum of expected samples".to_string());
    assert!(error.to_string().contains("sum of expected samples"));
}

proptest! {
    #[test]
    fn allocation_sums_to_the_budget(
        specs in prop::collection::vec((1u64..=200, 1.0f64..50.0), 1..40),
        budget_seed in 0usize..=250,
    ) {
        let buckets: Vec<Bucket> = specs
            .iter()
            .enumerate()
            .map(|(index, (size, avg))| bucket(&format!("org-{index}"), "2019", *size, *avg))
            .collect();
        let population: u64 = buckets.iter().map(|b| b.bucket_size).sum();
        let budget = budget_seed.min(population as usize);

        let allocated = assign_sample_count(&buckets, budget).expect("allocate");
        let total: u64 = allocated.iter().map(|b| b.expected_samples).sum();

        if budget as u64 >= population {
            // full inclusion path
            prop_assert_eq!(allocated.len(), buckets.len());
            prop_assert_eq!(total, population);
        } else {
            prop_assert_eq!(total, budget as u64);
            if budget == 0 {
                prop_assert!(allocated.is_empty());
            }
            prop_assert!(allocated.iter().all(|b| b.expected_samples >= 1) || budget == 0);
            prop_assert!(allocated.iter().all(|b| b.expected_samples <= b.bucket_size));
        }
    }

    #[test]
    fn oversized_budget_returns_full_buckets(
        specs in prop::collection::vec((1u64..=50, 1.0f64..20.0), 1..20),
    ) {
        let buckets: Vec<Bucket> = specs
            .iter()
            .enumerate()
            .map(|(index, (size, avg))| bucket(&format!("org-{index}"), "2020", *size, *avg))
            .collect();
        let population: u64 = buckets.iter().map(|b| b.bucket_size).sum();

        let allocated = assign_sample_count(&buckets, population as usize + 1).expect("allocate");
        prop_assert_eq!(allocated.len(), buckets.len());
        for (bucket, allocated) in buckets.iter().zip(&allocated) {
            prop_assert_eq!(allocated.expected_samples, bucket.bucket_size);
        }
    }
}
