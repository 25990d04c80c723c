// Wed Feb 4 2026 - Alex

use crate::scorer::ScoreResult;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub year: i32,
    pub mean_score: f64,
    pub sample_count: usize,
}

// Per-year arithmetic mean over valid scores, restricted to an
// exclusive (min_year, max_year) window. Years with no valid scores
// are left out entirely.
pub struct Aggregator {
    min_year: i32,
    max_year: i32,
}

impl Aggregator {
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    pub fn aggregate(&self, results: &[ScoreResult]) -> Vec<AggregateRecord> {
        results
            .iter()
            .filter(|r| r.is_valid())
            .filter(|r| r.year > self.min_year && r.year < self.max_year)
            .map(|r| (r.year, r.score))
            .into_group_map()
            .into_iter()
            .map(|(year, scores)| AggregateRecord {
                year,
                mean_score: scores.iter().sum::<f64>() / scores.len() as f64,
                sample_count: scores.len(),
            })
            .sorted_by_key(|record| record.year)
            .collect()
    }
}
