//! Elastic-net linear regression by cyclic coordinate descent.
//!
//! # Components
//!
//! - [`ElasticNetParams`]: solver configuration
//! - [`ElasticNetTrainer`]: the convergence loop
//! - [`CoordinateUpdater`]: bias and per-feature steps
//! - [`ScoreCache`]: predictions kept in sync with the model
//!
//! The bias is refit in closed form at the start of every pass. Feature steps
//! use soft-thresholding for the L1 part and read only the non-zeros of their
//! column.

mod objective;
mod params;
mod scores;
mod trainer;
mod updater;

pub use objective::{penalty, weighted_squared_error, weighted_squared_error_from_data};
pub use params::{ElasticNetParams, ParamValidationError};
pub use scores::ScoreCache;
pub use trainer::{ElasticNetTrainer, TrainError, TrainingReport};
pub use updater::{soft_threshold, CoordinateUpdater};
