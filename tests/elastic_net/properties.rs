//! Property-based tests on random problems.

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use elasticnet::linear::LinearModel;
use elasticnet::training::{soft_threshold, ElasticNetParams};

use super::{sparse, trainer};

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
struct Problem {
    rows: Vec<Vec<f64>>,
    labels: Vec<f64>,
    weights: Vec<f64>,
    regularization: f64,
    l1_ratio: f64,
}

/// Feature values with a good share of exact zeros.
fn arb_feature() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(0.0),
        2 => -5.0..5.0f64,
    ]
}

fn arb_problem() -> impl Strategy<Value = Problem> {
    (2usize..10, 1usize..5).prop_flat_map(|(n, p)| {
        (
            prop_vec(prop_vec(arb_feature(), p), n),
            prop_vec(-10.0..10.0f64, n),
            prop_vec(0.1..3.0f64, n),
            0.0..3.0f64,
            0.0..=1.0f64,
        )
            .prop_map(|(rows, labels, weights, regularization, l1_ratio)| Problem {
                rows,
                labels,
                weights,
                regularization,
                l1_ratio,
            })
    })
}

// =============================================================================
// Soft-Threshold
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn soft_threshold_is_odd(z in -1e6..1e6f64, gamma in 0.0..1e3f64) {
        prop_assert_eq!(soft_threshold(-z, gamma), -soft_threshold(z, gamma));
    }

    #[test]
    fn soft_threshold_shrinks_towards_zero(z in -1e6..1e6f64, gamma in 0.0..1e3f64) {
        let s = soft_threshold(z, gamma);
        prop_assert!(s.abs() <= z.abs());
        prop_assert!(s == 0.0 || s.signum() == z.signum());
        prop_assert_eq!(s == 0.0, z.abs() <= gamma);
    }
}

// =============================================================================
// Training
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every pass is an exact coordinate minimization, so the loss never rises.
    #[test]
    fn loss_never_increases(problem in arb_problem()) {
        let p = problem.rows[0].len();
        let data = sparse(&problem.rows);
        let trainer = trainer(
            ElasticNetParams::builder()
                .regularization(problem.regularization)
                .l1_ratio(problem.l1_ratio)
                .epsilon(1e-9)
                .max_iterations(200)
                .n_threads(1)
                .build(),
        );

        let mut model = LinearModel::zeros(p);
        let report = trainer
            .train(&mut model, &data, &problem.labels, &problem.weights)
            .unwrap();

        let mut previous = report.initial_loss;
        for (i, &loss) in report.loss_history.iter().enumerate() {
            let slack = 1e-9 * previous.abs().max(1.0);
            prop_assert!(loss <= previous + slack, "pass {}: {} -> {}", i + 1, previous, loss);
            previous = loss;
        }
        prop_assert!(model.coefficients().iter().all(|c| c.is_finite()));
        prop_assert!(model.bias().is_finite());
    }

    /// The incrementally tracked loss agrees with a full recomputation.
    #[test]
    fn reported_loss_matches_recomputation(problem in arb_problem()) {
        let p = problem.rows[0].len();
        let data = sparse(&problem.rows);
        let trainer = trainer(
            ElasticNetParams::builder()
                .regularization(problem.regularization)
                .l1_ratio(problem.l1_ratio)
                .max_iterations(50)
                .build(),
        );

        let mut model = LinearModel::zeros(p);
        let report = trainer
            .train(&mut model, &data, &problem.labels, &problem.weights)
            .unwrap();
        let recomputed = trainer
            .loss(&model, &data, &problem.labels, &problem.weights)
            .unwrap();

        prop_assert!(
            (report.loss - recomputed).abs() <= 1e-8 * recomputed.abs().max(1.0),
            "reported {} vs recomputed {}",
            report.loss,
            recomputed
        );
    }

    /// Pure lasso coefficients are exactly zero once the penalty dominates every feature.
    #[test]
    fn overwhelming_lasso_zeroes_all_coefficients(problem in arb_problem()) {
        let p = problem.rows[0].len();
        let data = sparse(&problem.rows);
        // |fit_j| ≤ Σ w |x| |y − ȳ| < 3 × 5 × 20 × n
        let regularization = 300.0 * problem.rows.len() as f64;
        let trainer = trainer(
            ElasticNetParams::builder()
                .regularization(regularization)
                .l1_ratio(1.0)
                .build(),
        );

        let mut model = LinearModel::zeros(p);
        trainer
            .train(&mut model, &data, &problem.labels, &problem.weights)
            .unwrap();

        prop_assert_eq!(model.num_nonzero(), 0);
    }
}
