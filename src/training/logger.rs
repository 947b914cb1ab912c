//! Training progress logging.
//!
//! Messages go through the [`log`] facade under the `elasticnet::training`
//! target; install any logger (e.g. `env_logger`) to see them. [`Verbosity`]
//! decides which messages are emitted at all.

use std::time::Instant;

use serde::{Deserialize, Serialize};

const TARGET: &str = "elasticnet::training";

/// Verbosity level for training output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Warnings only (e.g. iteration cap reached).
    Warning,
    /// Start and end of training.
    Info,
    /// Loss after every pass.
    Debug,
}

/// Emits training progress at the configured verbosity.
#[derive(Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    started: Option<Instant>,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            started: None,
        }
    }

    #[inline]
    fn enabled(&self, level: Verbosity) -> bool {
        self.verbosity >= level
    }

    pub fn start_training(&mut self, num_data_points: usize, num_features: usize, nnz: usize) {
        self.started = Some(Instant::now());
        if self.enabled(Verbosity::Info) {
            log::info!(
                target: TARGET,
                "training on {} data points x {} features ({} non-zeros)",
                num_data_points,
                num_features,
                nnz
            );
        }
    }

    pub fn log_params(&self, regularization: f64, l1_ratio: f64, epsilon: f64, max_iterations: usize) {
        if self.enabled(Verbosity::Info) {
            log::info!(
                target: TARGET,
                "regularization {}, l1_ratio {}, epsilon {:.1e}, max_iterations {}",
                regularization,
                l1_ratio,
                epsilon,
                max_iterations
            );
        }
    }

    pub fn log_initial_loss(&self, loss: f64) {
        if self.enabled(Verbosity::Debug) {
            log::debug!(target: TARGET, "initial loss {:.6e}", loss);
        }
    }

    pub fn log_iteration(&self, iteration: usize, loss: f64, change: f64) {
        if self.enabled(Verbosity::Debug) {
            log::debug!(
                target: TARGET,
                "[{}] loss {:.6e} (change {:.3e})",
                iteration,
                loss,
                change
            );
        }
    }

    pub fn log_max_iterations(&self, max_iterations: usize, change: f64, epsilon: f64) {
        if self.enabled(Verbosity::Warning) {
            log::warn!(
                target: TARGET,
                "stopped after {} iterations without converging (last change {:.3e}, epsilon {:.3e})",
                max_iterations,
                change,
                epsilon
            );
        }
    }

    pub fn finish_training(&self, iterations: usize, loss: f64, num_nonzero: usize) {
        if self.enabled(Verbosity::Info) {
            let elapsed = self.started.map(|t| t.elapsed().as_secs_f64()).unwrap_or(0.0);
            log::info!(
                target: TARGET,
                "finished after {} iterations in {:.3}s: loss {:.6e}, {} non-zero coefficients",
                iterations,
                elapsed,
                loss,
                num_nonzero
            );
        }
    }
}
