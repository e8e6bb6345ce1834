use panel_model::Event;

use crate::history::history_length_per_professional;

/// Mean history length of the full dataset versus the sampled rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanComparison {
    pub original: f64,
    pub sampled: f64,
}

impl MeanComparison {
    pub fn difference(&self) -> f64 {
        self.sampled - self.original
    }
}

/// One percentile of the history-length distribution, full data versus
/// sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileComparison {
    pub percentile: u8,
    pub original: f64,
    pub sampled: f64,
}

impl PercentileComparison {
    pub fn difference(&self) -> f64 {
        (self.sampled - self.original).abs()
    }
}

/// Compares the average per-professional history length between the full
/// dataset and the sampled rows.
pub fn compare_average_history_length(original: &[Event], sampled: &[Event]) -> MeanComparison {
    MeanComparison {
        original: mean_history_length(original),
        sampled: mean_history_length(sampled),
    }
}

/// Compares the 10th through 90th deciles of the history-length
/// distribution between the full dataset and the sampled rows.
pub fn compare_percentiles_history_length(
    original: &[Event],
    sampled: &[Event],
) -> Vec<PercentileComparison> {
    let original_lengths = sorted_history_lengths(original);
    let sampled_lengths = sorted_history_lengths(sampled);
    (1u8..=9)
        .map(|decile| {
            let p = decile * 10;
            PercentileComparison {
                percentile: p,
                original: percentile(&original_lengths, f64::from(p)),
                sampled: percentile(&sampled_lengths, f64::from(p)),
            }
        })
        .collect()
}

fn mean_history_length(events: &[Event]) -> f64 {
    let history = history_length_per_professional(events);
    if history.is_empty() {
        return 0.0;
    }
    let total: u64 = history.iter().map(|record| record.history_length).sum();
    total as f64 / history.len() as f64
}

fn sorted_history_lengths(events: &[Event]) -> Vec<f64> {
    let mut lengths: Vec<f64> = history_length_per_professional(events)
        .into_iter()
        .map(|record| record.history_length as f64)
        .collect();
    lengths.sort_by(f64::total_cmp);
    lengths
}

/// Linear-interpolation percentile over an already sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [single] => *single,
        _ => {
            let rank = p / 100.0 * (sorted.len() - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let weight = rank - lower as f64;
            sorted[lower] * (1.0 - weight) + sorted[upper] * weight
        }
    }
}
