//! Coordinate descent steps for weighted elastic-net least squares.
//!
//! Each step minimizes the objective exactly along one coordinate while all
//! others are held fixed, then pushes the change into the [`ScoreCache`]:
//!
//! ```text
//! bias:      b' = Σ w_i (y_i − s_i + b) / Σ w_i
//! feature j: fit   = Σ w_i x_ij (y_i − s_i + x_ij β_j)     (non-zeros of column j)
//!            curv  = Σ w_i x_ij² + regularization × (1 − l1_ratio)
//!            β_j'  = soft_threshold(fit, regularization × l1_ratio) / curv
//! ```
//!
//! A coordinate with zero curvature has no defined minimizer and is set to 0.

use crate::data::SparseDataset;
use crate::linear::LinearModel;
use crate::utils::Parallelism;

use super::params::ElasticNetParams;
use super::scores::ScoreCache;

/// Soft-thresholding operator, the proximal map of `gamma × |z|`.
///
/// S(z, γ) = sign(z) × max(|z| − γ, 0)
///
/// ```
/// use elasticnet::training::soft_threshold;
///
/// assert_eq!(soft_threshold(1.5, 0.5), 1.0);
/// assert_eq!(soft_threshold(-1.5, 0.5), -1.0);
/// assert_eq!(soft_threshold(0.25, 0.5), 0.0);
/// ```
#[inline]
pub fn soft_threshold(z: f64, gamma: f64) -> f64 {
    if z > gamma {
        z - gamma
    } else if z < -gamma {
        z + gamma
    } else {
        0.0
    }
}

/// Applies single-coordinate updates to a model and its score cache.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateUpdater {
    l1_strength: f64,
    l2_strength: f64,
}

impl CoordinateUpdater {
    pub fn new(params: &ElasticNetParams) -> Self {
        Self {
            l1_strength: params.l1_strength(),
            l2_strength: params.l2_strength(),
        }
    }

    /// Closed-form weighted least-squares step for the (unpenalized) bias.
    ///
    /// `total_weight` is `Σ w_i` and must be positive.
    ///
    /// Returns the bias delta that was applied.
    pub fn update_bias(
        &self,
        model: &mut LinearModel,
        scores: &mut ScoreCache,
        labels: &[f64],
        weights: &[f64],
        total_weight: f64,
        parallelism: Parallelism,
    ) -> f64 {
        debug_assert!(total_weight > 0.0);
        let old_bias = model.bias();

        let numerator = {
            let s = scores.as_slice();
            parallelism.maybe_par_sum(s.len(), |i| weights[i] * (labels[i] - s[i] + old_bias))
        };
        let new_bias = numerator / total_weight;

        let delta = new_bias - old_bias;
        scores.shift(delta, parallelism);
        model.set_bias(new_bias);
        delta
    }

    /// Proximal step for one feature, touching only its column's non-zeros.
    ///
    /// Returns the coefficient delta that was applied.
    pub fn update_feature<D>(
        &self,
        model: &mut LinearModel,
        data: &D,
        feature: usize,
        scores: &mut ScoreCache,
        labels: &[f64],
        weights: &[f64],
    ) -> f64
    where
        D: SparseDataset,
    {
        let old_coeff = model.coefficient(feature);

        let (fit, sum_sq) = data
            .column(feature)
            .fold((0.0f64, 0.0f64), |(fit, sum_sq), (i, x)| {
                let partial_residual = labels[i] - scores.get(i) + x * old_coeff;
                (
                    fit + weights[i] * x * partial_residual,
                    sum_sq + weights[i] * x * x,
                )
            });

        let new_coeff = self.coordinate_minimizer(fit, sum_sq);

        let delta = new_coeff - old_coeff;
        scores.apply_column_delta(data.column(feature), delta);
        model.set_coefficient(feature, new_coeff);
        delta
    }

    /// Minimizer of the one-dimensional penalized problem.
    #[inline]
    fn coordinate_minimizer(&self, fit: f64, sum_sq: f64) -> f64 {
        let numerator = soft_threshold(fit, self.l1_strength);
        let denominator = sum_sq + self.l2_strength;
        if denominator > 0.0 {
            numerator / denominator
        } else {
            0.0
        }
    }
}
