//! Incrementally maintained predictions.
//!
//! The cache holds `bias + Σ_j β_j x_ij` for every data point. Each
//! coordinate step applies its delta here instead of recomputing predictions,
//! so a feature update costs O(nnz of its column).

use ndarray::{Array1, ArrayView1};

use crate::data::SparseDataset;
use crate::linear::LinearModel;
use crate::utils::Parallelism;

/// Current model prediction for every data point.
#[derive(Debug, Clone)]
pub struct ScoreCache {
    scores: Array1<f64>,
}

impl ScoreCache {
    /// Compute scores for `model` from the dataset's rows.
    pub fn new<D>(model: &LinearModel, data: &D, parallelism: Parallelism) -> Self
    where
        D: SparseDataset + Sync,
    {
        Self {
            scores: model.predict(data, parallelism),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.scores[i]
    }

    #[inline]
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.scores.view()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.scores
            .as_slice()
            .expect("owned 1-D array is contiguous")
    }

    /// Add `delta` to every score (bias change).
    pub fn shift(&mut self, delta: f64, parallelism: Parallelism) {
        if delta == 0.0 {
            return;
        }
        parallelism.maybe_par_for_each(&mut self.scores, |s| *s += delta);
    }

    /// Add `delta × x_i` to the scores touched by a feature column.
    pub fn apply_column_delta<I>(&mut self, column: I, delta: f64)
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        if delta == 0.0 {
            return;
        }
        for (i, value) in column {
            self.scores[i] += delta * value;
        }
    }
}
