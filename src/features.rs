use std::collections::BTreeSet;

use crate::types::CatalogRecord;

/// Distinct genre labels across a subset, ordered lexicographically so
/// column indices are stable across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    labels: Vec<String>,
}

impl Vocabulary {
    pub fn from_subset(subset: &[CatalogRecord]) -> Self {
        let labels: BTreeSet<&str> = subset
            .iter()
            .flat_map(|record| record.genres.iter().map(String::as_str))
            .collect();
        Self {
            labels: labels.into_iter().map(str::to_string).collect(),
        }
    }

    /// Feature column for a label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.binary_search_by(|l| l.as_str().cmp(label)).ok()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Builds one feature row per record, in subset order: a multi-hot slot
/// per vocabulary label plus one standardized rating slot. Missing
/// ratings are imputed as 0.0 before standardization.
pub fn encode(subset: &[CatalogRecord], vocab: &Vocabulary) -> Vec<Vec<f32>> {
    let ratings = standardize(
        subset
            .iter()
            .map(|record| record.rating.unwrap_or(0.0))
            .collect(),
    );
    subset
        .iter()
        .zip(ratings)
        .map(|(record, rating)| {
            let mut row = vec![0.0; vocab.len() + 1];
            for label in &record.genres {
                if let Some(column) = vocab.index_of(label) {
                    row[column] = 1.0;
                }
            }
            row[vocab.len()] = rating;
            row
        })
        .collect()
}

const VARIANCE_EPSILON: f32 = 1e-6;

/// Zero mean, unit variance over the population. A single value or a
/// constant column standardizes to all zeros instead of dividing by a
/// zero (or near-zero) deviation.
fn standardize(values: Vec<f32>) -> Vec<f32> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let mean = values.iter().sum::<f32>() / n as f32;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n as f32;
    if variance < VARIANCE_EPSILON {
        return vec![0.0; n];
    }
    let deviation = variance.sqrt();
    values.into_iter().map(|v| (v - mean) / deviation).collect()
}
