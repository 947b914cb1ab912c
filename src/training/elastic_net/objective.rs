//! Weighted least-squares loss with the elastic-net penalty.
//!
//! ```text
//! loss = Σ_i w_i × ½(y_i − ŷ_i)² + penalty(β)
//! penalty(β) = regularization × [ (1 − l1_ratio) × ½‖β‖² + l1_ratio × ‖β‖₁ ]
//! ```
//!
//! The bias is never penalized.

use crate::data::SparseDataset;
use crate::linear::LinearModel;
use crate::utils::Parallelism;

/// Elastic-net penalty of the model's coefficients.
pub fn penalty(model: &LinearModel, regularization: f64, l1_ratio: f64) -> f64 {
    let mix = (1.0 - l1_ratio) * 0.5 * model.l2_norm_squared() + l1_ratio * model.l1_norm();
    regularization * mix
}

/// Weighted half squared error of precomputed predictions.
pub fn weighted_squared_error(
    predictions: &[f64],
    labels: &[f64],
    weights: &[f64],
    parallelism: Parallelism,
) -> f64 {
    debug_assert_eq!(predictions.len(), labels.len());
    debug_assert_eq!(predictions.len(), weights.len());

    parallelism.maybe_par_sum(predictions.len(), |i| {
        let residual = labels[i] - predictions[i];
        0.5 * weights[i] * residual * residual
    })
}

/// Weighted half squared error, predicting every data point from the dataset.
pub fn weighted_squared_error_from_data<D>(
    model: &LinearModel,
    data: &D,
    labels: &[f64],
    weights: &[f64],
    parallelism: Parallelism,
) -> f64
where
    D: SparseDataset + Sync,
{
    debug_assert_eq!(data.num_data_points(), labels.len());
    debug_assert_eq!(data.num_data_points(), weights.len());

    parallelism.maybe_par_sum(data.num_data_points(), |i| {
        let residual = labels[i] - model.predict_row(data.row(i));
        0.5 * weights[i] * residual * residual
    })
}
