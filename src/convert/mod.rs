//! Conversions between nalgebra and ndarray / image containers.
//!
//! Each conversion exists in two forms. Methods on [`Converter`] take the
//! destination by `&mut`, resize it to the source's shape and fill it; they
//! honour the converter's [`CopyConfig`]. The free functions in this module
//! use the default configuration and return a freshly allocated destination.
//!
//! ```
//! use mat_bridge::{array2_to_matrix, matrix_to_array2};
//! use nalgebra::DMatrix;
//!
//! let m = DMatrix::from_row_slice(3, 2, &[1, 2, 3, 4, 5, 6]);
//! let a = matrix_to_array2(&m);
//! assert_eq!(a.dim(), (3, 2));
//! assert_eq!(array2_to_matrix(&a), m);
//! ```
mod buffer;
mod matrix;
mod vector;

use image::{ImageBuffer, Luma, Pixel};
use nalgebra::storage::Storage;
use nalgebra::{DMatrix, DVector, Dim, Matrix, RowDVector, U1};
use ndarray::{Array2, ArrayBase, Data, Ix2};

use crate::config::{CopyConfig, Traversal};
use crate::error::Result;
use crate::math::{Element, Integral};

/// Single-channel 2D buffer of integral pixels. `GrayBuffer<u8>` is `image::GrayImage`.
pub type GrayBuffer<T> = ImageBuffer<Luma<T>, Vec<T>>;

/// Stateless conversion entry point carrying a [`CopyConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    config: CopyConfig,
}

impl Converter {
    pub fn new(config: CopyConfig) -> Self {
        Self { config }
    }

    pub fn with_traversal(traversal: Traversal) -> Self {
        Self::new(CopyConfig::new(traversal))
    }

    pub fn config(&self) -> &CopyConfig {
        &self.config
    }

    fn traversal(&self) -> Traversal {
        self.config.traversal
    }
}

/// Copy any nalgebra matrix into a new `Array2` of the same shape.
pub fn matrix_to_array2<T, R, C, S>(src: &Matrix<T, R, C, S>) -> Array2<T>
where
    T: Element,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    let mut dst = Array2::zeros((0, 0));
    Converter::default().matrix_to_array2_into(src, &mut dst);
    dst
}

/// Copy any 2D ndarray (owned, view or transposed) into a new `DMatrix`.
pub fn array2_to_matrix<T, S>(src: &ArrayBase<S, Ix2>) -> DMatrix<T>
where
    T: Element,
    S: Data<Elem = T>,
{
    let mut dst = DMatrix::zeros(0, 0);
    Converter::default().array2_to_matrix_into(src, &mut dst);
    dst
}

/// Copy a column vector into a new `(n, 1)` `Array2`.
pub fn column_to_array2<T, R, S>(src: &Matrix<T, R, U1, S>) -> Array2<T>
where
    T: Element,
    R: Dim,
    S: Storage<T, R, U1>,
{
    let mut dst = Array2::zeros((0, 1));
    Converter::default().column_to_array2_into(src, &mut dst);
    dst
}

/// Copy a row vector into a new `(1, n)` `Array2`.
pub fn row_to_array2<T, C, S>(src: &Matrix<T, U1, C, S>) -> Array2<T>
where
    T: Element,
    C: Dim,
    S: Storage<T, U1, C>,
{
    let mut dst = Array2::zeros((1, 0));
    Converter::default().row_to_array2_into(src, &mut dst);
    dst
}

/// Copy an `(n, 1)` array into a new `DVector`.
pub fn array2_to_column<T, S>(src: &ArrayBase<S, Ix2>) -> Result<DVector<T>>
where
    T: Element,
    S: Data<Elem = T>,
{
    let mut dst = DVector::zeros(0);
    Converter::default().array2_to_column_into(src, &mut dst)?;
    Ok(dst)
}

/// Copy a `(1, n)` array into a new `RowDVector`.
pub fn array2_to_row<T, S>(src: &ArrayBase<S, Ix2>) -> Result<RowDVector<T>>
where
    T: Element,
    S: Data<Elem = T>,
{
    let mut dst = RowDVector::zeros(0);
    Converter::default().array2_to_row_into(src, &mut dst)?;
    Ok(dst)
}

/// Copy an integral matrix into a new `GrayBuffer` of width `ncols` and height `nrows`.
pub fn matrix_to_gray_buffer<T, R, C, S>(src: &Matrix<T, R, C, S>) -> Result<GrayBuffer<T>>
where
    T: Integral,
    Luma<T>: Pixel<Subpixel = T>,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    let mut dst = GrayBuffer::new(0, 0);
    Converter::default().matrix_to_gray_buffer_into(src, &mut dst)?;
    Ok(dst)
}

/// Copy a `GrayBuffer` into a new `DMatrix` with `height` rows and `width` columns.
pub fn gray_buffer_to_matrix<T>(src: &GrayBuffer<T>) -> DMatrix<T>
where
    T: Integral,
    Luma<T>: Pixel<Subpixel = T>,
{
    let mut dst = DMatrix::zeros(0, 0);
    Converter::default().gray_buffer_to_matrix_into(src, &mut dst);
    dst
}
