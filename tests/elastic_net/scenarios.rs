//! Fixed problems with known solutions.

use elasticnet::assert_approx_eq;
use elasticnet::linear::LinearModel;
use elasticnet::training::{ElasticNetParams, Verbosity};

use super::{init_logging, sparse, trainer, weighted_problem};

/// Solve the ridge normal equations with an unpenalized intercept:
///
/// ```text
/// [ Σw     Σw xᵀ       ] [b]   [ Σw y   ]
/// [ Σw x   XᵀWX + λI   ] [β] = [ XᵀW y  ]
/// ```
fn ridge_closed_form(rows: &[Vec<f64>], labels: &[f64], weights: &[f64], lambda: f64) -> Vec<f64> {
    let p = rows[0].len();
    let dim = p + 1;
    let mut a = vec![vec![0.0; dim + 1]; dim];

    for ((row, &y), &w) in rows.iter().zip(labels).zip(weights) {
        let mut z = vec![1.0];
        z.extend_from_slice(row);
        for r in 0..dim {
            for c in 0..dim {
                a[r][c] += w * z[r] * z[c];
            }
            a[r][dim] += w * z[r] * y;
        }
    }
    for j in 1..dim {
        a[j][j] += lambda;
    }

    // Gaussian elimination with partial pivoting.
    for col in 0..dim {
        let pivot = (col..dim)
            .max_by(|&i, &k| a[i][col].abs().total_cmp(&a[k][col].abs()))
            .unwrap();
        a.swap(col, pivot);
        for r in (col + 1)..dim {
            let factor = a[r][col] / a[col][col];
            for c in col..=dim {
                a[r][c] -= factor * a[col][c];
            }
        }
    }
    let mut x = vec![0.0; dim];
    for r in (0..dim).rev() {
        let tail: f64 = ((r + 1)..dim).map(|c| a[r][c] * x[c]).sum();
        x[r] = (a[r][dim] - tail) / a[r][r];
    }
    x
}

#[test]
fn exact_fit_without_regularization() {
    init_logging();
    let data = sparse(&[vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]);
    let labels = [1.0, 2.0, 3.0];
    let weights = [1.0, 1.0, 1.0];

    let trainer = trainer(
        ElasticNetParams::builder()
            .epsilon(1e-6)
            .verbosity(Verbosity::Debug)
            .build(),
    );
    let mut model = LinearModel::zeros(2);
    let report = trainer.train(&mut model, &data, &labels, &weights).unwrap();

    assert!(report.converged);
    assert!(report.loss < 1e-5, "loss = {}", report.loss);
    assert_approx_eq!(model.bias(), 0.0, 1e-2);
    assert_approx_eq!(model.coefficient(0), 1.0, 1e-2);
    assert_approx_eq!(model.coefficient(1), 2.0, 1e-2);
}

#[test]
fn ridge_matches_normal_equations() {
    let (rows, labels, weights) = weighted_problem();
    let data = sparse(&rows);
    let lambda = 1.0;

    let trainer = trainer(
        ElasticNetParams::builder()
            .regularization(lambda)
            .l1_ratio(0.0)
            .epsilon(1e-14)
            .n_threads(1)
            .build(),
    );
    let mut model = LinearModel::zeros(2);
    let report = trainer.train(&mut model, &data, &labels, &weights).unwrap();
    assert!(report.converged);

    let expected = ridge_closed_form(&rows, &labels, &weights, lambda);
    assert_approx_eq!(model.bias(), expected[0], 1e-5, "bias");
    assert_approx_eq!(model.coefficient(0), expected[1], 1e-5, "coefficient 0");
    assert_approx_eq!(model.coefficient(1), expected[2], 1e-5, "coefficient 1");
}

#[test]
fn strong_lasso_leaves_only_weighted_mean_bias() {
    let (rows, labels, weights) = weighted_problem();
    let data = sparse(&rows);

    let trainer = trainer(
        ElasticNetParams::builder()
            .regularization(1000.0)
            .l1_ratio(1.0)
            .build(),
    );
    let mut model = LinearModel::zeros(2);
    trainer.train(&mut model, &data, &labels, &weights).unwrap();

    assert_eq!(model.coefficient(0), 0.0);
    assert_eq!(model.coefficient(1), 0.0);
    assert_eq!(model.num_nonzero(), 0);
    // Σ w y / Σ w = 19.75 / 7
    assert_approx_eq!(model.bias(), 19.75 / 7.0, 1e-12);
}

#[test]
fn elastic_net_mixture() {
    let (rows, labels, weights) = weighted_problem();
    let data = sparse(&rows);

    let trainer = trainer(
        ElasticNetParams::builder()
            .regularization(2.0)
            .l1_ratio(0.5)
            .epsilon(1e-10)
            .build(),
    );
    let mut model = LinearModel::zeros(2);
    let report = trainer.train(&mut model, &data, &labels, &weights).unwrap();

    assert!(report.converged);
    assert_approx_eq!(model.bias(), 3.01992, 1e-4);
    assert_approx_eq!(model.coefficient(0), -0.329095, 1e-4);
    assert_approx_eq!(model.coefficient(1), 0.154105, 1e-4);
}

#[test]
fn l1_shrinks_more_than_nothing() {
    let (rows, labels, weights) = weighted_problem();
    let data = sparse(&rows);

    let fit = |regularization: f64| {
        let trainer = trainer(
            ElasticNetParams::builder()
                .regularization(regularization)
                .l1_ratio(1.0)
                .epsilon(1e-10)
                .build(),
        );
        let mut model = LinearModel::zeros(2);
        trainer.train(&mut model, &data, &labels, &weights).unwrap();
        model.l1_norm()
    };

    let unpenalized = fit(0.0);
    let light = fit(0.5);
    let heavy = fit(5.0);
    assert!(light < unpenalized);
    assert!(heavy < light);
}

#[test]
fn warm_start_continues_from_previous_fit() {
    let (rows, labels, weights) = weighted_problem();
    let data = sparse(&rows);
    let params = ElasticNetParams::builder()
        .regularization(0.5)
        .l1_ratio(0.3)
        .epsilon(1e-10)
        .build();
    let trainer = trainer(params);

    let mut cold = LinearModel::zeros(2);
    let cold_report = trainer.train(&mut cold, &data, &labels, &weights).unwrap();

    let mut warm = cold.clone();
    let warm_report = trainer.train(&mut warm, &data, &labels, &weights).unwrap();

    assert!(warm_report.iterations < cold_report.iterations);
    assert_approx_eq!(warm_report.initial_loss, cold_report.loss, 1e-9);
    assert_approx_eq!(warm.coefficient(0), cold.coefficient(0), 1e-4);
    assert_approx_eq!(warm.coefficient(1), cold.coefficient(1), 1e-4);
}

#[test]
fn held_out_loss_matches_training_loss_on_same_data() {
    let (rows, labels, weights) = weighted_problem();
    let data = sparse(&rows);
    let trainer = trainer(ElasticNetParams::builder().regularization(0.1).build());

    let mut model = LinearModel::zeros(2);
    let report = trainer.train(&mut model, &data, &labels, &weights).unwrap();

    let recomputed = trainer.loss(&model, &data, &labels, &weights).unwrap();
    assert_approx_eq!(recomputed, report.loss, 1e-9);
}
