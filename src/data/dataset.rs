//! Dual-storage sparse dataset.
//!
//! [`SparseDataSet`] keeps the same matrix twice: compressed by column for the
//! coordinate descent sweep, and compressed by row for prediction. Both copies
//! are produced from one set of entries, so the two views always agree.

use std::collections::BTreeMap;
use std::fmt;

use ndarray::ArrayView2;

use super::csc::{check_capacity, CSCMatrix, ColumnIter};
use super::SparseDataset;

/// Dataset construction errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error(
        "entry ({data_point}, {feature}) out of bounds for {num_data_points} data points x {num_features} features"
    )]
    IndexOutOfBounds {
        data_point: usize,
        feature: usize,
        num_data_points: usize,
        num_features: usize,
    },

    #[error("non-finite value {value} at ({data_point}, {feature})")]
    NonFiniteValue {
        data_point: usize,
        feature: usize,
        value: f64,
    },

    #[error("row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{requested} {what} exceeds the limit of {limit}")]
    CapacityExceeded {
        what: &'static str,
        requested: usize,
        limit: usize,
    },
}

/// Sparse dataset with row-major and column-major views.
///
/// # Example
///
/// ```
/// use elasticnet::data::{SparseDataSet, SparseDataset};
///
/// let data = SparseDataSet::from_dense_rows(&[
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 1.0],
/// ])
/// .unwrap();
///
/// assert_eq!(data.num_data_points(), 3);
/// assert_eq!(data.row(2).collect::<Vec<_>>(), vec![(0, 1.0), (1, 1.0)]);
/// assert_eq!(data.column(1).collect::<Vec<_>>(), vec![(1, 1.0), (2, 1.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseDataSet {
    /// Column store: column `j` lists the data points where feature `j` is non-zero.
    columns: CSCMatrix<f64>,
    /// Transposed store: column `i` lists the non-zero features of data point `i`.
    rows: CSCMatrix<f64>,
}

impl SparseDataSet {
    /// Start building a dataset of the given shape.
    pub fn builder(num_data_points: usize, num_features: usize) -> SparseDataSetBuilder {
        SparseDataSetBuilder::new(num_data_points, num_features)
    }

    /// Create from a column store; the row view is derived from it.
    pub fn from_columns(columns: CSCMatrix<f64>) -> Self {
        let rows = columns.transpose();
        Self { columns, rows }
    }

    /// Create from dense rows, dropping exact zeros.
    pub fn from_dense_rows(rows: &[Vec<f64>]) -> Result<Self, DatasetError> {
        Ok(Self::from_columns(CSCMatrix::from_dense_rows(rows)?))
    }

    /// Create from a dense `[n_data_points, n_features]` array, dropping exact zeros.
    pub fn from_array(array: ArrayView2<'_, f64>) -> Result<Self, DatasetError> {
        let (num_data_points, num_features) = array.dim();
        let mut builder = SparseDataSetBuilder::new(num_data_points, num_features);
        for ((i, j), &value) in array.indexed_iter() {
            builder.set_feature_value(i, j, value)?;
        }
        Ok(builder.build())
    }

}

impl SparseDataset for SparseDataSet {
    type RowIter<'a> = ColumnIter<'a, f64>;
    type ColumnIter<'a> = ColumnIter<'a, f64>;

    #[inline]
    fn num_data_points(&self) -> usize {
        self.columns.num_rows()
    }

    #[inline]
    fn num_features(&self) -> usize {
        self.columns.num_cols()
    }

    #[inline]
    fn row(&self, i: usize) -> Self::RowIter<'_> {
        self.rows.column(i)
    }

    #[inline]
    fn column(&self, j: usize) -> Self::ColumnIter<'_> {
        self.columns.column(j)
    }

    #[inline]
    fn nnz(&self) -> usize {
        self.columns.nnz()
    }
}

impl fmt::Display for SparseDataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_vector(
            f: &mut fmt::Formatter<'_>,
            entries: impl Iterator<Item = (usize, f64)>,
        ) -> fmt::Result {
            write!(f, "{{")?;
            for (k, (index, value)) in entries.enumerate() {
                if k > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}:{}", index, value)?;
            }
            writeln!(f, "}}")
        }

        writeln!(f, "number of data points = {}", self.num_data_points())?;
        writeln!(f, "number of features = {}", self.num_features())?;
        writeln!(f, "=====================================")?;
        writeln!(f, "row matrix:")?;
        for i in 0..self.num_data_points() {
            write!(f, "{}:\t", i)?;
            write_vector(f, self.row(i))?;
        }
        writeln!(f, "=====================================")?;
        writeln!(f, "column matrix:")?;
        for j in 0..self.num_features() {
            write!(f, "{}:\t", j)?;
            write_vector(f, self.column(j))?;
        }
        Ok(())
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Incremental builder for [`SparseDataSet`].
///
/// Values are recorded per `(data_point, feature)` position: the last write
/// wins and writing `0.0` erases the entry.
#[derive(Debug, Clone)]
pub struct SparseDataSetBuilder {
    num_data_points: usize,
    num_features: usize,
    entries: BTreeMap<(usize, usize), f64>,
}

impl SparseDataSetBuilder {
    pub fn new(num_data_points: usize, num_features: usize) -> Self {
        Self {
            num_data_points,
            num_features,
            entries: BTreeMap::new(),
        }
    }

    /// Set the value of `feature` for `data_point`.
    ///
    /// # Errors
    ///
    /// Rejects positions outside the declared shape, non-finite values, and
    /// shapes or entry counts beyond [`MAX_ENTRIES`](super::MAX_ENTRIES).
    pub fn set_feature_value(
        &mut self,
        data_point: usize,
        feature: usize,
        value: f64,
    ) -> Result<&mut Self, DatasetError> {
        if data_point >= self.num_data_points || feature >= self.num_features {
            return Err(DatasetError::IndexOutOfBounds {
                data_point,
                feature,
                num_data_points: self.num_data_points,
                num_features: self.num_features,
            });
        }
        if !value.is_finite() {
            return Err(DatasetError::NonFiniteValue {
                data_point,
                feature,
                value,
            });
        }

        let key = (data_point, feature);
        if value == 0.0 {
            self.entries.remove(&key);
        } else {
            let nnz = self.entries.len() + usize::from(!self.entries.contains_key(&key));
            check_capacity(self.num_data_points, self.num_features, nnz)?;
            self.entries.insert(key, value);
        }
        Ok(self)
    }

    /// Number of non-zero entries recorded so far.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Freeze into a dataset with consistent row and column views.
    ///
    /// # Panics
    ///
    /// Panics if the declared shape exceeds [`MAX_ENTRIES`](super::MAX_ENTRIES).
    pub fn build(self) -> SparseDataSet {
        let triplets: Vec<(usize, usize, f64)> = self
            .entries
            .into_iter()
            .map(|((i, j), value)| (i, j, value))
            .collect();
        let columns = CSCMatrix::from_triplets(self.num_data_points, self.num_features, &triplets);
        SparseDataSet::from_columns(columns)
    }
}
