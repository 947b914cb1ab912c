//! Solver configuration.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::training::Verbosity;

/// Parameters for elastic-net coordinate descent.
///
/// The objective minimized is
///
/// ```text
/// Σ_i w_i × ½(y_i − ŷ_i)² + regularization × [ (1 − l1_ratio) × ½‖β‖² + l1_ratio × ‖β‖₁ ]
/// ```
///
/// # Example
///
/// ```
/// use elasticnet::training::ElasticNetParams;
///
/// let params = ElasticNetParams::builder()
///     .regularization(0.1)
///     .l1_ratio(0.5)
///     .epsilon(1e-6)
///     .build();
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticNetParams {
    /// Overall penalty strength (default: 0.0).
    #[builder(default = 0.0)]
    pub regularization: f64,
    /// Elastic-net mixing: 0 = pure ridge, 1 = pure lasso (default: 0.0).
    #[builder(default = 0.0)]
    pub l1_ratio: f64,
    /// Stop once the loss changes by less than this between passes (default: 0.001).
    #[builder(default = 0.001)]
    pub epsilon: f64,
    /// Upper bound on full passes (default: 100_000).
    #[builder(default = 100_000)]
    pub max_iterations: usize,
    /// Threads for per-data-point reductions: 0 = auto, 1 = sequential (default: 0).
    #[builder(default = 0)]
    pub n_threads: usize,
    /// Verbosity level (default: `Silent`).
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl Default for ElasticNetParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ElasticNetParams {
    /// Validate all parameters.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        if !(self.regularization.is_finite() && self.regularization >= 0.0) {
            return Err(ParamValidationError::InvalidRegularization(self.regularization));
        }
        if !(0.0..=1.0).contains(&self.l1_ratio) {
            return Err(ParamValidationError::InvalidL1Ratio(self.l1_ratio));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ParamValidationError::InvalidEpsilon(self.epsilon));
        }
        if self.max_iterations == 0 {
            return Err(ParamValidationError::InvalidMaxIterations);
        }
        Ok(())
    }

    /// Threshold of the soft-threshold step: `regularization × l1_ratio`.
    #[inline]
    pub fn l1_strength(&self) -> f64 {
        self.regularization * self.l1_ratio
    }

    /// Ridge term added to each coordinate's curvature: `regularization × (1 − l1_ratio)`.
    #[inline]
    pub fn l2_strength(&self) -> f64 {
        self.regularization * (1.0 - self.l1_ratio)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Parameter validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamValidationError {
    /// Regularization must be finite and >= 0.
    #[error("regularization must be finite and >= 0, got {0}")]
    InvalidRegularization(f64),

    /// l1_ratio must be in [0, 1].
    #[error("l1_ratio must be in [0, 1], got {0}")]
    InvalidL1Ratio(f64),

    /// epsilon must be finite and > 0.
    #[error("epsilon must be finite and > 0, got {0}")]
    InvalidEpsilon(f64),

    /// max_iterations must be >= 1.
    #[error("max_iterations must be >= 1")]
    InvalidMaxIterations,
}
