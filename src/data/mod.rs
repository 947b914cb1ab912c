//! Data input abstractions for sparse feature matrices.
//!
//! The solver reads its training matrix through the [`SparseDataset`] trait,
//! which exposes every data point as a sparse row and every feature as a
//! sparse column.
//!
//! # Storage Types
//!
//! - [`SparseDataSet`]: Row and column compressed storage built from one set of entries
//! - [`CSCMatrix`]: Compressed sparse column matrix, the building block of `SparseDataSet`
//! - `ndarray::Array2<f64>`: Dense storage; zeros are skipped on iteration
//!
//! Only non-zero entries are visited. Values must be finite.

mod csc;
mod dataset;
mod ndarray;
mod traits;

pub use self::ndarray::NonZeros;
pub use csc::{CSCMatrix, ColumnIter, MAX_ENTRIES};
pub use dataset::{DatasetError, SparseDataSet, SparseDataSetBuilder};
pub use traits::SparseDataset;
