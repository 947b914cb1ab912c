//! Linear model data structure.

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::data::SparseDataset;
use crate::utils::Parallelism;

/// Linear regression model (bias + coefficients).
///
/// Stores one coefficient per feature in a dense `Array1<f64>`, index-aligned
/// with the dataset's feature indices, plus an unpenalized intercept:
///
/// ```text
/// predict(x) = bias + Σ coefficients[j] × x[j]
/// ```
///
/// The coefficient vector is sized once at construction and never resized;
/// single coefficients are read and written in O(1).
///
/// # Example
///
/// ```
/// use elasticnet::linear::LinearModel;
/// use ndarray::array;
///
/// let model = LinearModel::new(0.5, array![1.0, -2.0]);
///
/// assert_eq!(model.num_features(), 2);
/// assert_eq!(model.coefficient(1), -2.0);
/// assert_eq!(model.predict_row([(0, 2.0), (1, 1.0)]), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    bias: f64,
    coefficients: Array1<f64>,
}

impl LinearModel {
    /// Create a model from a bias and a coefficient vector (warm start).
    pub fn new(bias: f64, coefficients: Array1<f64>) -> Self {
        Self { bias, coefficients }
    }

    /// Create a zero-initialized model.
    pub fn zeros(num_features: usize) -> Self {
        Self {
            bias: 0.0,
            coefficients: Array1::zeros(num_features),
        }
    }

    /// Number of input features.
    #[inline]
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    #[inline]
    pub fn set_bias(&mut self, value: f64) {
        self.bias = value;
    }

    /// Get the coefficient for a feature.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= num_features()`.
    #[inline]
    pub fn coefficient(&self, feature: usize) -> f64 {
        self.coefficients[feature]
    }

    #[inline]
    pub fn set_coefficient(&mut self, feature: usize, value: f64) {
        self.coefficients[feature] = value;
    }

    /// All coefficients (excluding bias).
    #[inline]
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    /// Sum of absolute coefficient values.
    pub fn l1_norm(&self) -> f64 {
        self.coefficients.iter().map(|w| w.abs()).sum()
    }

    /// Sum of squared coefficient values.
    pub fn l2_norm_squared(&self) -> f64 {
        self.coefficients.dot(&self.coefficients)
    }

    /// Number of coefficients that are exactly non-zero.
    pub fn num_nonzero(&self) -> usize {
        self.coefficients.iter().filter(|&&w| w != 0.0).count()
    }

    /// Predict a single data point from its sparse `(feature, value)` entries.
    #[inline]
    pub fn predict_row<I>(&self, row: I) -> f64
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        row.into_iter()
            .fold(self.bias, |acc, (feature, value)| {
                acc + self.coefficients[feature] * value
            })
    }

    /// Predict every data point of a dataset.
    ///
    /// # Panics
    ///
    /// Panics if the dataset has a different number of features.
    pub fn predict<D>(&self, data: &D, parallelism: Parallelism) -> Array1<f64>
    where
        D: SparseDataset + Sync,
    {
        assert_eq!(
            data.num_features(),
            self.num_features(),
            "dataset has {} features, model has {}",
            data.num_features(),
            self.num_features()
        );
        let predictions =
            parallelism.maybe_par_map(0..data.num_data_points(), |i| self.predict_row(data.row(i)));
        Array1::from_vec(predictions)
    }
}
