use image::{Luma, Pixel};
use log::{debug, trace};
use nalgebra::storage::Storage;
use nalgebra::{DMatrix, Dim, Matrix};

use super::matrix::reset_matrix;
use super::{Converter, GrayBuffer};
use crate::error::{ConvertError, Result};
use crate::math::{for_each_cell, Integral};

// Matrix row i is buffer pixel y = i, column j is x = j.

impl Converter {
    /// Copy an integral matrix into `dst`, resizing it to `ncols x nrows` pixels.
    ///
    /// Fails with [`ConvertError::DimensionOverflow`] when either dimension
    /// does not fit in `u32`; `dst` is left untouched in that case.
    pub fn matrix_to_gray_buffer_into<T, R, C, S>(&self, src: &Matrix<T, R, C, S>, dst: &mut GrayBuffer<T>) -> Result<()>
    where
        T: Integral,
        Luma<T>: Pixel<Subpixel = T>,
        R: Dim,
        C: Dim,
        S: Storage<T, R, C>,
    {
        let (rows, cols) = src.shape();
        let (width, height) = match (u32::try_from(cols), u32::try_from(rows)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(ConvertError::DimensionOverflow { rows, cols }),
        };
        debug!(
            "Copying nalgebra matrix into gray buffer: rows={}, cols={}, traversal={}",
            rows,
            cols,
            self.traversal()
        );

        if dst.dimensions() == (width, height) {
            trace!("Reusing gray buffer destination of {}x{}", width, height);
        } else {
            *dst = GrayBuffer::new(width, height);
        }
        for_each_cell(rows, cols, self.traversal(), |i, j| {
            dst.put_pixel(j as u32, i as u32, Luma([src[(i, j)]]));
        });
        Ok(())
    }

    /// Copy a gray buffer into `dst` as a `height x width` matrix, zeroing it first.
    pub fn gray_buffer_to_matrix_into<T>(&self, src: &GrayBuffer<T>, dst: &mut DMatrix<T>)
    where
        T: Integral,
        Luma<T>: Pixel<Subpixel = T>,
    {
        let (width, height) = src.dimensions();
        let (rows, cols) = (height as usize, width as usize);
        debug!(
            "Copying gray buffer into nalgebra matrix: rows={}, cols={}, traversal={}",
            rows,
            cols,
            self.traversal()
        );

        reset_matrix(dst, rows, cols);
        for_each_cell(rows, cols, self.traversal(), |i, j| {
            dst[(i, j)] = src.get_pixel(j as u32, i as u32).0[0];
        });
    }
}
