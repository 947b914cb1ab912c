//! Compressed Sparse Column (CSC) matrix for column-wise access.
//!
//! CSC format is optimal for coordinate descent training where we iterate
//! over features (columns) and need efficient access to all values in a column.
//! The transpose of a CSC matrix is the row-compressed (CSR) form of the
//! original, which is how [`SparseDataSet`](super::SparseDataSet) stores rows.

use super::DatasetError;

/// Largest row count, column count or number of stored entries a [`CSCMatrix`] can hold.
///
/// Row indices and column pointers are stored as `u32`.
pub const MAX_ENTRIES: usize = u32::MAX as usize;

/// Check that a matrix of this shape and entry count fits the `u32` index storage.
pub(crate) fn check_capacity(
    num_rows: usize,
    num_cols: usize,
    nnz: usize,
) -> Result<(), DatasetError> {
    let checks = [("rows", num_rows), ("columns", num_cols), ("non-zeros", nnz)];
    for (what, requested) in checks {
        if requested > MAX_ENTRIES {
            return Err(DatasetError::CapacityExceeded {
                what,
                requested,
                limit: MAX_ENTRIES,
            });
        }
    }
    Ok(())
}

/// Compressed Sparse Column matrix for efficient column-wise access.
///
/// # Structure
///
/// - `values`: Non-zero values, stored column by column
/// - `row_indices`: Row index for each value
/// - `col_ptrs`: Starting index in values/row_indices for each column
///
/// For column `j`, the values are `values[col_ptrs[j]..col_ptrs[j+1]]`
/// with corresponding rows `row_indices[col_ptrs[j]..col_ptrs[j+1]]`.
/// Within a column, entries are sorted by row index.
///
/// Rows, columns and stored entries are each limited to [`MAX_ENTRIES`].
///
/// # Example
///
/// ```
/// use elasticnet::data::CSCMatrix;
///
/// let csc = CSCMatrix::from_dense_rows(&[
///     vec![1.0, 0.0, 2.0],
///     vec![0.0, 3.0, 0.0],
///     vec![4.0, 0.0, 5.0],
/// ])
/// .unwrap();
///
/// // Column 0: values 1.0, 4.0 at rows 0, 2
/// let col0: Vec<_> = csc.column(0).collect();
/// assert_eq!(col0, vec![(0, 1.0), (2, 4.0)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CSCMatrix<T = f64> {
    /// Non-zero values stored column by column.
    values: Box<[T]>,
    /// Row index for each value.
    row_indices: Box<[u32]>,
    /// Column pointers: col_ptrs[j] is the start index for column j.
    /// Length is num_cols + 1, with col_ptrs[num_cols] = nnz.
    col_ptrs: Box<[u32]>,
    num_rows: usize,
    num_cols: usize,
}

impl<T: Copy> CSCMatrix<T> {
    /// Build from `(row, col, value)` triplets.
    ///
    /// Triplets may arrive in any order. Duplicate positions are not merged;
    /// callers that need last-write-wins semantics should deduplicate first
    /// (see [`SparseDataSetBuilder`](super::SparseDataSetBuilder)).
    ///
    /// # Panics
    ///
    /// Panics if a triplet lies outside `num_rows × num_cols`, or if the shape
    /// or the number of triplets exceeds [`MAX_ENTRIES`].
    pub fn from_triplets(num_rows: usize, num_cols: usize, triplets: &[(usize, usize, T)]) -> Self {
        if let Err(err) = check_capacity(num_rows, num_cols, triplets.len()) {
            panic!("{}", err);
        }

        // Count entries per column
        let mut col_counts = vec![0u32; num_cols];
        for &(row, col, _) in triplets {
            assert!(
                row < num_rows && col < num_cols,
                "Entry ({}, {}) out of bounds for {}x{} matrix",
                row,
                col,
                num_rows,
                num_cols
            );
            col_counts[col] += 1;
        }

        // Build column pointers
        let mut col_ptrs = Vec::with_capacity(num_cols + 1);
        col_ptrs.push(0u32);
        let mut cumsum = 0u32;
        for &count in &col_counts {
            cumsum += count;
            col_ptrs.push(cumsum);
        }

        // Order entries by (col, row) and scatter
        let mut order: Vec<usize> = (0..triplets.len()).collect();
        order.sort_by_key(|&k| (triplets[k].1, triplets[k].0));

        let values: Vec<T> = order.iter().map(|&k| triplets[k].2).collect();
        let row_indices: Vec<u32> = order.iter().map(|&k| triplets[k].0 as u32).collect();

        Self {
            values: values.into_boxed_slice(),
            row_indices: row_indices.into_boxed_slice(),
            col_ptrs: col_ptrs.into_boxed_slice(),
            num_rows,
            num_cols,
        }
    }

    /// Transpose into a new matrix: column `i` of the result holds row `i` of `self`.
    pub fn transpose(&self) -> Self {
        let triplets: Vec<(usize, usize, T)> = (0..self.num_cols)
            .flat_map(|col| self.column(col).map(move |(row, value)| (col, row, value)))
            .collect();
        Self::from_triplets(self.num_cols, self.num_rows, &triplets)
    }
}

impl CSCMatrix<f64> {
    /// Create a CSC matrix from dense rows, dropping exact zeros.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::RaggedRows`] if rows differ in length,
    /// [`DatasetError::NonFiniteValue`] for NaN or infinite entries and
    /// [`DatasetError::CapacityExceeded`] past [`MAX_ENTRIES`].
    pub fn from_dense_rows(rows: &[Vec<f64>]) -> Result<Self, DatasetError> {
        let num_cols = rows.first().map_or(0, Vec::len);
        check_capacity(rows.len(), num_cols, 0)?;
        let mut triplets = Vec::new();

        for (row, values) in rows.iter().enumerate() {
            if values.len() != num_cols {
                return Err(DatasetError::RaggedRows {
                    row,
                    expected: num_cols,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(DatasetError::NonFiniteValue {
                        data_point: row,
                        feature: col,
                        value,
                    });
                }
                if value != 0.0 {
                    triplets.push((row, col, value));
                }
            }
        }

        check_capacity(rows.len(), num_cols, triplets.len())?;
        Ok(Self::from_triplets(rows.len(), num_cols, &triplets))
    }
}

impl<T: Copy> CSCMatrix<T> {
    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns (features).
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of stored (non-zero) elements.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Iterate over (row_index, value) pairs in a column.
    #[inline]
    pub fn column(&self, col: usize) -> ColumnIter<'_, T> {
        let (start, end) = self.column_range(col);
        ColumnIter {
            values: &self.values[start..end],
            row_indices: &self.row_indices[start..end],
            pos: 0,
        }
    }

    #[inline]
    fn column_range(&self, col: usize) -> (usize, usize) {
        assert!(col < self.num_cols, "Column {} out of bounds", col);
        (self.col_ptrs[col] as usize, self.col_ptrs[col + 1] as usize)
    }
}

/// Iterator over (row_index, value) pairs in a CSC column.
#[derive(Debug, Clone)]
pub struct ColumnIter<'a, T> {
    values: &'a [T],
    row_indices: &'a [u32],
    pos: usize,
}

impl<T: Copy> Iterator for ColumnIter<'_, T> {
    type Item = (usize, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.values.len() {
            let row = self.row_indices[self.pos] as usize;
            let val = self.values[self.pos];
            self.pos += 1;
            Some((row, val))
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> ExactSizeIterator for ColumnIter<'_, T> {}
impl<T: Copy> std::iter::FusedIterator for ColumnIter<'_, T> {}
