//! Model fitting.
//!
//! - [`ElasticNetTrainer`]: weighted least squares with an elastic-net penalty
//! - [`ElasticNetParams`]: solver configuration
//! - [`TrainingLogger`]: progress logging with verbosity levels

pub mod elastic_net;
mod logger;

pub use elastic_net::{
    soft_threshold, CoordinateUpdater, ElasticNetParams, ElasticNetTrainer, ParamValidationError,
    ScoreCache, TrainError, TrainingReport,
};
pub use logger::{TrainingLogger, Verbosity};
