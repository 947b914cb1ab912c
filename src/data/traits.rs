//! Core trait for sparse dataset access.

/// Dual-view sparse feature matrix consumed by the solver.
///
/// A dataset is a `num_data_points × num_features` matrix exposed two ways:
///
/// - [`row()`](Self::row): the non-zero `(feature_index, value)` pairs of one data point
/// - [`column()`](Self::column): the non-zero `(data_point_index, value)` pairs of one feature
///
/// Both views must describe the same matrix. Implementations are free to
/// yield entries in any order and to skip zeros; explicitly stored zeros are
/// harmless but cost time.
///
/// # Implementations
///
/// - [`SparseDataSet`](super::SparseDataSet): row and column compressed storage
/// - `ndarray::Array2<f64>`: dense storage, zeros skipped on iteration
pub trait SparseDataset {
    /// Iterator over `(feature_index, value)` pairs of one data point.
    type RowIter<'a>: Iterator<Item = (usize, f64)>
    where
        Self: 'a;

    /// Iterator over `(data_point_index, value)` pairs of one feature.
    type ColumnIter<'a>: Iterator<Item = (usize, f64)>
    where
        Self: 'a;

    /// Number of data points (rows).
    fn num_data_points(&self) -> usize;

    /// Number of features (columns).
    fn num_features(&self) -> usize;

    /// Non-zero entries of data point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_data_points()`.
    fn row(&self, i: usize) -> Self::RowIter<'_>;

    /// Non-zero entries of feature `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= num_features()`.
    fn column(&self, j: usize) -> Self::ColumnIter<'_>;

    /// Number of non-zero entries across the matrix.
    fn nnz(&self) -> usize {
        (0..self.num_features()).map(|j| self.column(j).count()).sum()
    }

    /// Copy data point `i` into a dense vector of length `num_features()`.
    fn dense_row(&self, i: usize) -> Vec<f64> {
        let mut dense = vec![0.0; self.num_features()];
        for (feature, value) in self.row(i) {
            dense[feature] = value;
        }
        dense
    }
}
