use rayon::prelude::*;

const EPSILON: f32 = 1e-6;

/// Cosine similarity. A zero-norm operand yields 0.0 instead of a
/// division by zero.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na < EPSILON || nb < EPSILON {
        0.0
    } else {
        dot / (na * nb)
    }
}

/// Full square all-pairs matrix over the feature rows, computed once per
/// subset. Rows are independent and computed in parallel. The diagonal
/// is pinned to the self-similarity convention: 1.0 for a non-zero
/// vector, 0.0 for a zero vector.
pub fn pairwise(features: &[Vec<f32>]) -> Vec<Vec<f32>> {
    features
        .par_iter()
        .enumerate()
        .map(|(i, row)| {
            features
                .iter()
                .enumerate()
                .map(|(j, other)| {
                    if i == j {
                        self_similarity(row)
                    } else {
                        cosine(row, other)
                    }
                })
                .collect()
        })
        .collect()
}

fn self_similarity(v: &[f32]) -> f32 {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm < EPSILON {
        0.0
    } else {
        1.0
    }
}
