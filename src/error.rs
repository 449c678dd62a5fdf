use std::error::Error;
use std::fmt;

/// Failures detected by the conversion layer itself.
///
/// Allocation failures and element narrowing are left to the underlying
/// containers and never show up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The matrix does not fit the image buffer's `u32` width/height.
    DimensionOverflow { rows: usize, cols: usize },
    NotAColumnVector { rows: usize, cols: usize },
    NotARowVector { rows: usize, cols: usize },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConvertError::DimensionOverflow { rows, cols } => write!(
                f,
                "matrix of shape ({}, {}) exceeds the image buffer limit of {} per dimension",
                rows,
                cols,
                u32::MAX
            ),
            ConvertError::NotAColumnVector { rows, cols } => write!(
                f,
                "expected a column vector of shape (n, 1), got ({}, {})",
                rows, cols
            ),
            ConvertError::NotARowVector { rows, cols } => write!(
                f,
                "expected a row vector of shape (1, n), got ({}, {})",
                rows, cols
            ),
        }
    }
}

impl Error for ConvertError {}

pub type Result<T> = std::result::Result<T, ConvertError>;
