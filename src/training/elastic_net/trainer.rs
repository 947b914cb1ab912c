//! Elastic-net trainer for linear regression.
//!
//! Runs cyclic coordinate descent (bias, then features `0..p` in order) until
//! the loss changes by less than `epsilon` between consecutive passes, or
//! `max_iterations` passes have run.

use crate::data::SparseDataset;
use crate::linear::LinearModel;
use crate::training::TrainingLogger;
use crate::utils::{run_with_threads, Parallelism};

use super::objective;
use super::params::{ElasticNetParams, ParamValidationError};
use super::scores::ScoreCache;
use super::updater::CoordinateUpdater;

// ============================================================================
// Errors and report
// ============================================================================

/// Errors raised by [`ElasticNetTrainer::train`] and [`ElasticNetTrainer::loss`].
///
/// Every variant is detected before the model is touched.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("instance weight {index} is {value}, expected a finite value >= 0")]
    InvalidInstanceWeight { index: usize, value: f64 },

    #[error("label {index} is {value}, expected a finite value")]
    NonFiniteLabel { index: usize, value: f64 },

    #[error("feature value at ({data_point}, {feature}) is {value}, expected a finite value")]
    NonFiniteFeature {
        data_point: usize,
        feature: usize,
        value: f64,
    },

    #[error("model bias is {0}, expected a finite value")]
    NonFiniteBias(f64),

    #[error("model coefficient {feature} is {value}, expected a finite value")]
    NonFiniteCoefficient { feature: usize, value: f64 },

    #[error("instance weights sum to zero; the bias is undefined")]
    ZeroTotalWeight,

    #[error("instance weights sum to {0}, which is not finite")]
    TotalWeightOverflow(f64),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Outcome of a training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Number of full passes performed.
    pub iterations: usize,
    /// Loss of the model as passed in, before any update.
    pub initial_loss: f64,
    /// Loss after the last pass.
    pub loss: f64,
    /// Loss after each pass, in order.
    pub loss_history: Vec<f64>,
    /// `false` if training stopped at `max_iterations`.
    pub converged: bool,
}

// ============================================================================
// ElasticNetTrainer
// ============================================================================

/// Weighted least-squares trainer with an elastic-net penalty.
///
/// # Example
///
/// ```
/// use elasticnet::data::SparseDataSet;
/// use elasticnet::linear::LinearModel;
/// use elasticnet::training::{ElasticNetParams, ElasticNetTrainer};
///
/// let data = SparseDataSet::from_dense_rows(&[
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 1.0],
/// ])
/// .unwrap();
/// let labels = [1.0, 2.0, 3.0];
/// let weights = [1.0, 1.0, 1.0];
///
/// let trainer = ElasticNetTrainer::new(ElasticNetParams::builder().epsilon(1e-12).build()).unwrap();
/// let mut model = LinearModel::zeros(2);
/// let report = trainer.train(&mut model, &data, &labels, &weights).unwrap();
///
/// assert!(report.converged);
/// assert!((model.coefficient(1) - 2.0).abs() < 1e-4);
/// ```
#[derive(Clone, Debug)]
pub struct ElasticNetTrainer {
    params: ElasticNetParams,
}

impl ElasticNetTrainer {
    /// Create a trainer; fails if the parameters are invalid.
    pub fn new(params: ElasticNetParams) -> Result<Self, ParamValidationError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ElasticNetParams {
        &self.params
    }

    /// Fit `model` in place.
    ///
    /// The model's current bias and coefficients are the starting point, so a
    /// previously fitted model can be warm-started.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving `model` unchanged, if lengths disagree with
    /// the dataset, a label, weight, feature value, bias or coefficient is not
    /// finite, a weight is negative, or the weights sum to zero or overflow.
    pub fn train<D>(
        &self,
        model: &mut LinearModel,
        data: &D,
        labels: &[f64],
        weights: &[f64],
    ) -> Result<TrainingReport, TrainError>
    where
        D: SparseDataset + Sync,
    {
        validate_shapes(model, data, labels, weights)?;
        let total_weight = validate_values(model, data, labels, weights)?;

        run_with_threads(self.params.n_threads, |parallelism| {
            self.train_validated(model, data, labels, weights, total_weight, parallelism)
        })
        .map_err(TrainError::from)
    }

    fn train_validated<D>(
        &self,
        model: &mut LinearModel,
        data: &D,
        labels: &[f64],
        weights: &[f64],
        total_weight: f64,
        parallelism: Parallelism,
    ) -> TrainingReport
    where
        D: SparseDataset + Sync,
    {
        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(data.num_data_points(), data.num_features(), data.nnz());
        logger.log_params(
            self.params.regularization,
            self.params.l1_ratio,
            self.params.epsilon,
            self.params.max_iterations,
        );

        let updater = CoordinateUpdater::new(&self.params);
        let mut scores = ScoreCache::new(model, data, parallelism);

        let initial_loss = self.loss_from_scores(model, &scores, labels, weights, parallelism);
        logger.log_initial_loss(initial_loss);

        let mut last_loss = initial_loss;
        let mut loss_history = Vec::new();
        let mut converged = false;
        let mut change = f64::INFINITY;

        for iteration in 1..=self.params.max_iterations {
            self.iterate(
                &updater,
                model,
                data,
                labels,
                weights,
                total_weight,
                &mut scores,
                parallelism,
            );

            let loss = self.loss_from_scores(model, &scores, labels, weights, parallelism);
            change = last_loss - loss;
            loss_history.push(loss);
            logger.log_iteration(iteration, loss, change);

            if change.abs() < self.params.epsilon {
                converged = true;
                break;
            }
            last_loss = loss;
        }

        if !converged {
            logger.log_max_iterations(self.params.max_iterations, change, self.params.epsilon);
        }

        let loss = loss_history.last().copied().unwrap_or(initial_loss);
        logger.finish_training(loss_history.len(), loss, model.num_nonzero());

        TrainingReport {
            iterations: loss_history.len(),
            initial_loss,
            loss,
            loss_history,
            converged,
        }
    }

    /// One cycle of coordinate descent: bias, then every feature in index order.
    #[allow(clippy::too_many_arguments)]
    fn iterate<D>(
        &self,
        updater: &CoordinateUpdater,
        model: &mut LinearModel,
        data: &D,
        labels: &[f64],
        weights: &[f64],
        total_weight: f64,
        scores: &mut ScoreCache,
        parallelism: Parallelism,
    ) where
        D: SparseDataset + Sync,
    {
        updater.update_bias(model, scores, labels, weights, total_weight, parallelism);
        for feature in 0..data.num_features() {
            updater.update_feature(model, data, feature, scores, labels, weights);
        }
    }

    // ------------------------------------------------------------------------
    // Loss
    // ------------------------------------------------------------------------

    /// Elastic-net penalty of `model` under this trainer's parameters.
    pub fn penalty(&self, model: &LinearModel) -> f64 {
        objective::penalty(model, self.params.regularization, self.params.l1_ratio)
    }

    /// Penalized loss from a score cache that matches `model`.
    pub fn loss_from_scores(
        &self,
        model: &LinearModel,
        scores: &ScoreCache,
        labels: &[f64],
        weights: &[f64],
        parallelism: Parallelism,
    ) -> f64 {
        objective::weighted_squared_error(scores.as_slice(), labels, weights, parallelism)
            + self.penalty(model)
    }

    /// Penalized loss, predicting every data point from the dataset.
    ///
    /// Intended for evaluation outside the training loop, e.g. on held-out data.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::DimensionMismatch`] if lengths disagree with the dataset.
    pub fn loss<D>(
        &self,
        model: &LinearModel,
        data: &D,
        labels: &[f64],
        weights: &[f64],
    ) -> Result<f64, TrainError>
    where
        D: SparseDataset + Sync,
    {
        validate_shapes(model, data, labels, weights)?;

        let parallelism = Parallelism::from_threads(self.params.n_threads);
        Ok(
            objective::weighted_squared_error_from_data(model, data, labels, weights, parallelism)
                + self.penalty(model),
        )
    }
}

/// Lengths of labels, weights and coefficients must match the dataset.
fn validate_shapes<D: SparseDataset>(
    model: &LinearModel,
    data: &D,
    labels: &[f64],
    weights: &[f64],
) -> Result<(), TrainError> {
    let n = data.num_data_points();
    let checks = [
        ("labels", n, labels.len()),
        ("instance weights", n, weights.len()),
        ("model coefficients", data.num_features(), model.num_features()),
    ];
    for (what, expected, actual) in checks {
        if expected != actual {
            return Err(TrainError::DimensionMismatch {
                what,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Every number entering the solver must be finite; returns the total instance weight.
///
/// Visits each stored feature value once.
fn validate_values<D: SparseDataset>(
    model: &LinearModel,
    data: &D,
    labels: &[f64],
    weights: &[f64],
) -> Result<f64, TrainError> {
    if let Some((index, &value)) = labels.iter().enumerate().find(|(_, y)| !y.is_finite()) {
        return Err(TrainError::NonFiniteLabel { index, value });
    }
    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w >= 0.0))
    {
        return Err(TrainError::InvalidInstanceWeight { index, value });
    }

    if !model.bias().is_finite() {
        return Err(TrainError::NonFiniteBias(model.bias()));
    }
    if let Some((feature, &value)) = model
        .coefficients()
        .iter()
        .enumerate()
        .find(|(_, c)| !c.is_finite())
    {
        return Err(TrainError::NonFiniteCoefficient { feature, value });
    }

    for feature in 0..data.num_features() {
        if let Some((data_point, value)) = data.column(feature).find(|(_, x)| !x.is_finite()) {
            return Err(TrainError::NonFiniteFeature {
                data_point,
                feature,
                value,
            });
        }
    }

    let total_weight: f64 = weights.iter().sum();
    if !total_weight.is_finite() {
        return Err(TrainError::TotalWeightOverflow(total_weight));
    }
    if total_weight <= 0.0 {
        return Err(TrainError::ZeroTotalWeight);
    }
    Ok(total_weight)
}

// ============================================================================
// Tests
// ============================================================================
