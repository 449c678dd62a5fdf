use log::{debug, trace};
use nalgebra::storage::Storage;
use nalgebra::{DMatrix, Dim, Matrix};
use ndarray::{Array2, ArrayBase, Data, Ix2};

use super::Converter;
use crate::math::{for_each_cell, Element};

impl Converter {
    /// Copy `src` into `dst`, reshaping `dst` to `src.shape()`.
    ///
    /// Works for any readable nalgebra storage, so views and fixed-size
    /// matrices convert the same way as `DMatrix`.
    pub fn matrix_to_array2_into<T, R, C, S>(&self, src: &Matrix<T, R, C, S>, dst: &mut Array2<T>)
    where
        T: Element,
        R: Dim,
        C: Dim,
        S: Storage<T, R, C>,
    {
        let (rows, cols) = src.shape();
        debug!(
            "Copying nalgebra matrix into Array2: rows={}, cols={}, traversal={}",
            rows,
            cols,
            self.traversal()
        );

        reshape_array2(dst, rows, cols);
        for_each_cell(rows, cols, self.traversal(), |i, j| {
            dst[[i, j]] = src[(i, j)].clone();
        });
    }

    /// Copy `src` into `dst`, zeroing and reshaping `dst` to `src.dim()` first.
    pub fn array2_to_matrix_into<T, S>(&self, src: &ArrayBase<S, Ix2>, dst: &mut DMatrix<T>)
    where
        T: Element,
        S: Data<Elem = T>,
    {
        let (rows, cols) = src.dim();
        debug!(
            "Copying Array2 into nalgebra matrix: rows={}, cols={}, traversal={}",
            rows,
            cols,
            self.traversal()
        );

        reset_matrix(dst, rows, cols);
        for_each_cell(rows, cols, self.traversal(), |i, j| {
            dst[(i, j)] = src[[i, j]].clone();
        });
    }
}

/// Make `dst` a `rows x cols` array, keeping its allocation when the shape already fits.
///
/// Every cell is overwritten by the caller, so a reused array is not cleared.
pub(crate) fn reshape_array2<T: Element>(dst: &mut Array2<T>, rows: usize, cols: usize) {
    if dst.dim() == (rows, cols) {
        trace!("Reusing Array2 destination of shape ({}, {})", rows, cols);
    } else {
        *dst = Array2::zeros((rows, cols));
    }
}

/// Make `dst` an all-zero `rows x cols` matrix, keeping its allocation when possible.
pub(crate) fn reset_matrix<T: Element>(dst: &mut DMatrix<T>, rows: usize, cols: usize) {
    if dst.shape() == (rows, cols) {
        trace!("Reusing DMatrix destination of shape ({}, {})", rows, cols);
        dst.fill(T::zero());
    } else {
        *dst = DMatrix::zeros(rows, cols);
    }
}
