//! Walk a matrix, a column vector, a row vector and a gray buffer through
//! both directions of the bridge and print what comes out.
//!
//! Run with `RUST_LOG=debug cargo run --example roundtrip` to see the
//! per-conversion log lines.
use anyhow::Result;
use mat_bridge::{
    array2_to_column, array2_to_matrix, array2_to_row, column_to_array2, gray_buffer_to_matrix,
    matrix_to_array2, matrix_to_gray_buffer, row_to_array2, Converter, Traversal,
};
use nalgebra::{DMatrix, DVector, RowDVector};

fn main() -> Result<()> {
    env_logger::init();

    let m = DMatrix::from_row_slice(3, 2, &[1i32, 2, 3, 4, 5, 6]);
    let a = matrix_to_array2(&m);
    println!("Array2 {:?}:\n{}", a.dim(), a);
    let back = array2_to_matrix(&a);
    println!("round trip equal: {}", back == m);

    let col = column_to_array2(&DVector::from_vec(vec![0.5f64, 1.5, 2.5]));
    println!("column as Array2 {:?}", col.dim());
    let col_back = array2_to_column(&col)?;
    println!("column back: {}", col_back.transpose());

    let row = row_to_array2(&RowDVector::from_vec(vec![7u16, 8, 9, 10]));
    println!("row as Array2 {:?}", row.dim());
    let row_back = array2_to_row(&row)?;
    println!("row back: {}", row_back);

    let pixels = DMatrix::from_fn(4, 6, |i, j| (i * 6 + j) as u8 * 10);
    let img = matrix_to_gray_buffer(&pixels)?;
    println!("gray buffer {}x{}", img.width(), img.height());

    let mut restored = DMatrix::zeros(0, 0);
    Converter::with_traversal(Traversal::RowMajor).gray_buffer_to_matrix_into(&img, &mut restored);
    println!("buffer round trip equal: {}", restored == pixels);
    println!("default path agrees: {}", gray_buffer_to_matrix(&img) == restored);

    Ok(())
}
