//! elasticnet: weighted elastic-net linear regression on sparse data.
//!
//! A [`LinearModel`] is fitted to a [`SparseDataSet`] (or any other
//! [`SparseDataset`], including dense `ndarray::Array2<f64>`) by
//! [`ElasticNetTrainer`], which runs cyclic coordinate descent on
//!
//! ```text
//! Σ_i w_i × ½(y_i − ŷ_i)² + regularization × [ (1 − l1_ratio) × ½‖β‖² + l1_ratio × ‖β‖₁ ]
//! ```
//!
//! # Example
//!
//! ```
//! use elasticnet::{ElasticNetParams, ElasticNetTrainer, LinearModel, SparseDataSet};
//!
//! let mut builder = SparseDataSet::builder(3, 2);
//! builder.set_feature_value(0, 0, 1.0).unwrap();
//! builder.set_feature_value(1, 1, 1.0).unwrap();
//! builder.set_feature_value(2, 0, 1.0).unwrap();
//! builder.set_feature_value(2, 1, 1.0).unwrap();
//! let data = builder.build();
//!
//! let params = ElasticNetParams::builder()
//!     .regularization(0.01)
//!     .l1_ratio(0.5)
//!     .build();
//! let trainer = ElasticNetTrainer::new(params).unwrap();
//!
//! let mut model = LinearModel::zeros(2);
//! let report = trainer
//!     .train(&mut model, &data, &[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0])
//!     .unwrap();
//! assert!(report.converged);
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod linear;
pub mod testing;
pub mod training;
pub mod utils;

pub use data::{SparseDataSet, SparseDataSetBuilder, SparseDataset};
pub use linear::LinearModel;
pub use training::{ElasticNetParams, ElasticNetTrainer, TrainError, TrainingReport, Verbosity};
pub use utils::{run_with_threads, Parallelism};
