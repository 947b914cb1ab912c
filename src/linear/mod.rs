//! Linear regression model.
//!
//! Prediction is a bias plus a sparse dot product:
//!
//! ```text
//! output = bias + Σ(feature[j] × coefficient[j])
//! ```
//!
//! Models are fitted by [`ElasticNetTrainer`](crate::training::ElasticNetTrainer).

mod model;

pub use model::LinearModel;
