use std::cmp::Reverse;

use ordered_float::NotNan;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::features::{self, Vocabulary};
use crate::normalize;
use crate::similarity;
use crate::subset;
use crate::types::{CatalogRecord, RawRecord, Recommendation};

/// Precomputed similarity state for one genre subset.
///
/// `build` runs the whole batch pipeline once; afterwards every query is
/// a stateless read of the immutable matrix, so queries may run from any
/// number of threads without locking.
#[derive(Debug)]
pub struct Recommender {
    category: String,
    subset: Vec<CatalogRecord>,
    vocabulary: Vocabulary,
    features: Vec<Vec<f32>>,
    matrix: Vec<Vec<f32>>,
}

impl Recommender {
    /// Normalize the raw catalog, select the category subset, encode
    /// feature vectors and compute the all-pairs similarity matrix.
    pub fn build(catalog: &[RawRecord], category: &str) -> Result<Self> {
        let normalized: Vec<CatalogRecord> = catalog.iter().map(normalize::normalize).collect();
        let subset = subset::select(&normalized, category)?;
        let vocabulary = Vocabulary::from_subset(&subset);
        let features = features::encode(&subset, &vocabulary);
        let matrix = similarity::pairwise(&features);
        info!(
            category,
            films = subset.len(),
            genres = vocabulary.len(),
            "similarity matrix built"
        );
        Ok(Self {
            category: category.to_string(),
            subset,
            vocabulary,
            features,
            matrix,
        })
    }

    /// Ranks all other films in the subset by similarity to `title`,
    /// descending, and returns at most `n` of them.
    ///
    /// Titles are matched exactly; if the subset holds duplicates the
    /// first by subset index is the query. Ties in similarity break by
    /// ascending subset index, so results are deterministic.
    pub fn recommend(&self, title: &str, n: usize) -> Result<Vec<Recommendation>> {
        let query = self
            .subset
            .iter()
            .position(|record| record.title == title)
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))?;
        let row = &self.matrix[query];
        let mut candidates: Vec<usize> = (0..self.subset.len()).filter(|&j| j != query).collect();
        candidates.sort_by_key(|&j| (Reverse(NotNan::new(row[j]).unwrap()), j));
        candidates.truncate(n);
        debug!(title, index = query, returned = candidates.len(), "query ranked");
        Ok(candidates
            .into_iter()
            .map(|j| {
                let record = &self.subset[j];
                Recommendation {
                    title: record.title.clone(),
                    year: record.year,
                    genres: record.genres.clone(),
                    rating: record.rating,
                    similarity: row[j],
                }
            })
            .collect())
    }

    /// Independent queries against the shared matrix, in parallel. Each
    /// title gets its own outcome; one unknown title does not fail the
    /// batch.
    pub fn recommend_batch(
        &self,
        titles: &[String],
        n: usize,
    ) -> Vec<Result<Vec<Recommendation>>> {
        titles.par_iter().map(|t| self.recommend(t, n)).collect()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subset(&self) -> &[CatalogRecord] {
        &self.subset
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Feature rows in subset order, |vocabulary| + 1 wide.
    pub fn features(&self) -> &[Vec<f32>] {
        &self.features
    }

    /// Square symmetric cosine matrix in subset order.
    pub fn matrix(&self) -> &[Vec<f32>] {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.subset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subset.is_empty()
    }
}
