use log::{debug, trace};
use nalgebra::storage::Storage;
use nalgebra::{DVector, Dim, Matrix, RowDVector, U1};
use ndarray::{Array2, ArrayBase, Data, Ix2};

use super::matrix::reshape_array2;
use super::Converter;
use crate::error::{ConvertError, Result};
use crate::math::Element;

impl Converter {
    /// Copy a column vector into `dst`, which always ends up with shape `(n, 1)`.
    pub fn column_to_array2_into<T, R, S>(&self, src: &Matrix<T, R, U1, S>, dst: &mut Array2<T>)
    where
        T: Element,
        R: Dim,
        S: Storage<T, R, U1>,
    {
        let len = src.nrows();
        debug!("Copying column vector into Array2: len={}", len);

        reshape_array2(dst, len, 1);
        for i in 0..len {
            dst[[i, 0]] = src[i].clone();
        }
    }

    /// Copy a row vector into `dst`, which always ends up with shape `(1, n)`.
    pub fn row_to_array2_into<T, C, S>(&self, src: &Matrix<T, U1, C, S>, dst: &mut Array2<T>)
    where
        T: Element,
        C: Dim,
        S: Storage<T, U1, C>,
    {
        let len = src.ncols();
        debug!("Copying row vector into Array2: len={}", len);

        reshape_array2(dst, 1, len);
        for j in 0..len {
            dst[[0, j]] = src[j].clone();
        }
    }

    /// Copy an `(n, 1)` array into `dst`, zeroing and resizing it to `n` first.
    ///
    /// Any other shape is rejected before `dst` is touched.
    pub fn array2_to_column_into<T, S>(&self, src: &ArrayBase<S, Ix2>, dst: &mut DVector<T>) -> Result<()>
    where
        T: Element,
        S: Data<Elem = T>,
    {
        let (rows, cols) = src.dim();
        if cols != 1 {
            return Err(ConvertError::NotAColumnVector { rows, cols });
        }
        debug!("Copying (n, 1) Array2 into column vector: len={}", rows);

        if dst.len() == rows {
            trace!("Reusing DVector destination of length {}", rows);
            dst.fill(T::zero());
        } else {
            *dst = DVector::zeros(rows);
        }
        for i in 0..rows {
            dst[i] = src[[i, 0]].clone();
        }
        Ok(())
    }

    /// Copy a `(1, n)` array into `dst`, zeroing and resizing it to `n` first.
    ///
    /// Any other shape is rejected before `dst` is touched.
    pub fn array2_to_row_into<T, S>(&self, src: &ArrayBase<S, Ix2>, dst: &mut RowDVector<T>) -> Result<()>
    where
        T: Element,
        S: Data<Elem = T>,
    {
        let (rows, cols) = src.dim();
        if rows != 1 {
            return Err(ConvertError::NotARowVector { rows, cols });
        }
        debug!("Copying (1, n) Array2 into row vector: len={}", cols);

        if dst.len() == cols {
            trace!("Reusing RowDVector destination of length {}", cols);
            dst.fill(T::zero());
        } else {
            *dst = RowDVector::zeros(cols);
        }
        for j in 0..cols {
            dst[j] = src[[0, j]].clone();
        }
        Ok(())
    }
}
