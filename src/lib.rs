//! mat-bridge: deep-copy conversions between nalgebra and ndarray / image buffers.
//!
//! This crate moves matrices and vectors between `nalgebra` (`DMatrix`,
//! `DVector`, `RowDVector` and friends) and the array side of the ecosystem:
//! `ndarray::Array2` for general and vector-shaped matrices, and
//! `image::ImageBuffer<Luma<T>, _>` for single-channel integral buffers.
//!
//! Every conversion allocates its own storage for the output, so the result
//! never aliases the input. Shapes are preserved exactly; vectors keep their
//! orientation (`n x 1` for columns, `1 x n` for rows).
pub mod config;
pub mod convert;
pub mod error;
pub mod math;

pub use config::{CopyConfig, Traversal};
pub use convert::{
    array2_to_column, array2_to_matrix, array2_to_row, column_to_array2, gray_buffer_to_matrix,
    matrix_to_array2, matrix_to_gray_buffer, row_to_array2, Converter, GrayBuffer,
};
pub use error::{ConvertError, Result};
pub use math::{Element, Integral};
