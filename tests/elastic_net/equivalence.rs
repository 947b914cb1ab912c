//! Variants of the same problem that must train to the same model.

use elasticnet::linear::LinearModel;
use elasticnet::testing::assert_slice_approx_eq;
use elasticnet::training::ElasticNetParams;
use elasticnet::SparseDataSet;
use ndarray::Array2;

use super::{sparse, trainer, weighted_problem};

fn params(n_threads: usize) -> ElasticNetParams {
    ElasticNetParams::builder()
        .regularization(0.8)
        .l1_ratio(0.4)
        .epsilon(1e-12)
        .n_threads(n_threads)
        .build()
}

fn flatten(model: &LinearModel) -> Vec<f64> {
    let mut values = vec![model.bias()];
    values.extend(model.coefficients().iter().copied());
    values
}

#[test]
fn zero_weight_data_point_is_ignored() {
    let (rows, labels, weights) = weighted_problem();

    let mut padded_rows = rows.clone();
    let mut padded_labels = labels.clone();
    let mut padded_weights = weights.clone();
    padded_rows.insert(3, vec![5.0, -3.0]);
    padded_labels.insert(3, 100.0);
    padded_weights.insert(3, 0.0);

    let trainer = trainer(params(1));

    let mut reference = LinearModel::zeros(2);
    let reference_report = trainer
        .train(&mut reference, &sparse(&rows), &labels, &weights)
        .unwrap();

    let mut padded = LinearModel::zeros(2);
    let padded_report = trainer
        .train(
            &mut padded,
            &sparse(&padded_rows),
            &padded_labels,
            &padded_weights,
        )
        .unwrap();

    assert_eq!(padded, reference);
    assert_eq!(padded_report.iterations, reference_report.iterations);
}

#[test]
fn doubled_weight_equals_duplicated_row() {
    let rows = vec![vec![1.0, 0.0], vec![0.5, 2.0], vec![3.0, 1.0]];
    let labels = vec![1.0, 4.0, 2.0];

    let mut duplicated_rows = rows.clone();
    duplicated_rows.push(rows[2].clone());
    let mut duplicated_labels = labels.clone();
    duplicated_labels.push(labels[2]);

    let trainer = trainer(params(1));

    let mut weighted = LinearModel::zeros(2);
    trainer
        .train(&mut weighted, &sparse(&rows), &labels, &[1.0, 1.0, 2.0])
        .unwrap();

    let mut duplicated = LinearModel::zeros(2);
    trainer
        .train(
            &mut duplicated,
            &sparse(&duplicated_rows),
            &duplicated_labels,
            &[1.0; 4],
        )
        .unwrap();

    assert_slice_approx_eq(&flatten(&weighted), &flatten(&duplicated), 1e-6, "model");
}

#[test]
fn dense_and_sparse_storage_agree() {
    let (rows, labels, weights) = weighted_problem();
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    let dense = Array2::from_shape_vec((rows.len(), 2), flat).unwrap();

    let trainer = trainer(params(1));

    let mut from_dense = LinearModel::zeros(2);
    trainer
        .train(&mut from_dense, &dense, &labels, &weights)
        .unwrap();

    let mut from_sparse = LinearModel::zeros(2);
    trainer
        .train(&mut from_sparse, &sparse(&rows), &labels, &weights)
        .unwrap();

    assert_slice_approx_eq(&flatten(&from_dense), &flatten(&from_sparse), 1e-12, "model");
}

#[test]
fn builder_and_dense_rows_agree() {
    let (rows, labels, weights) = weighted_problem();

    let mut builder = SparseDataSet::builder(rows.len(), 2);
    // Insert in reverse order, with a value that is later overwritten.
    builder.set_feature_value(0, 0, 42.0).unwrap();
    for i in (0..rows.len()).rev() {
        for j in (0..2).rev() {
            builder.set_feature_value(i, j, rows[i][j]).unwrap();
        }
    }
    let built = builder.build();
    assert_eq!(built, sparse(&rows));

    let trainer = trainer(params(1));
    let mut a = LinearModel::zeros(2);
    let mut b = LinearModel::zeros(2);
    trainer.train(&mut a, &built, &labels, &weights).unwrap();
    trainer.train(&mut b, &sparse(&rows), &labels, &weights).unwrap();
    assert_eq!(a, b);
}

#[test]
fn parallel_matches_sequential() {
    let (rows, labels, weights) = weighted_problem();
    let data = sparse(&rows);

    let mut sequential = LinearModel::zeros(2);
    trainer(params(1))
        .train(&mut sequential, &data, &labels, &weights)
        .unwrap();

    for n_threads in [0, 2, 4] {
        let mut parallel = LinearModel::zeros(2);
        trainer(params(n_threads))
            .train(&mut parallel, &data, &labels, &weights)
            .unwrap();
        assert_slice_approx_eq(
            &flatten(&parallel),
            &flatten(&sequential),
            1e-6,
            &format!("n_threads = {n_threads}"),
        );
    }
}
