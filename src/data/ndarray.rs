//! [`SparseDataset`] for dense ndarray matrices.
//!
//! A `[n_data_points, n_features]` `Array2<f64>` can be handed to the solver
//! directly. Rows and columns are strided views, and exact zeros are skipped
//! so the solver sees the same non-zero pattern a sparse store would give.

use ndarray::{Array2, ArrayView1};

use super::SparseDataset;

/// Iterator over the non-zero `(index, value)` pairs of a 1-D array view.
#[derive(Debug, Clone)]
pub struct NonZeros<'a> {
    view: ArrayView1<'a, f64>,
    pos: usize,
}

impl<'a> NonZeros<'a> {
    #[inline]
    fn new(view: ArrayView1<'a, f64>) -> Self {
        Self { view, pos: 0 }
    }
}

impl Iterator for NonZeros<'_> {
    type Item = (usize, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.view.len() {
            let index = self.pos;
            self.pos += 1;
            let value = self.view[index];
            if value != 0.0 {
                return Some((index, value));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.view.len() - self.pos))
    }
}

impl SparseDataset for Array2<f64> {
    type RowIter<'a> = NonZeros<'a>;
    type ColumnIter<'a> = NonZeros<'a>;

    #[inline]
    fn num_data_points(&self) -> usize {
        self.nrows()
    }

    #[inline]
    fn num_features(&self) -> usize {
        self.ncols()
    }

    #[inline]
    fn row(&self, i: usize) -> Self::RowIter<'_> {
        NonZeros::new(Array2::row(self, i))
    }

    #[inline]
    fn column(&self, j: usize) -> Self::ColumnIter<'_> {
        NonZeros::new(Array2::column(self, j))
    }
}
