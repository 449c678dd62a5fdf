//! Integration tests for column / row vector conversions.

use mat_bridge::{array2_to_column, array2_to_row, column_to_array2, row_to_array2, ConvertError, Converter};
use nalgebra::{DMatrix, DVector, RowDVector, Vector3};
use ndarray::{array, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Column vectors
// ---------------------------------------------------------------------------

#[test]
fn column_vector_becomes_n_by_one() {
    let v = DVector::from_vec(vec![1.5, -2.0, 3.25]);
    let a = column_to_array2(&v);
    assert_eq!(a.dim(), (3, 1));
    assert_eq!(a, array![[1.5], [-2.0], [3.25]]);
}

#[test]
fn column_vectors_round_trip() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let n = rng.gen_range(0..20);
        let v = DVector::from_fn(n, |_, _| rng.gen::<i32>());
        let a = column_to_array2(&v);
        assert_eq!(a.ncols(), 1);

        let back: DVector<i32> = array2_to_column(&a).unwrap();
        assert_eq!(back.len(), n);
        assert_eq!(back, v);
    }
}

#[test]
fn empty_column_vector() {
    let v = DVector::<f32>::zeros(0);
    let a = column_to_array2(&v);
    assert_eq!(a.dim(), (0, 1));
    assert_eq!(array2_to_column(&a).unwrap().len(), 0);
}

#[test]
fn column_views_and_fixed_vectors_convert() {
    let m = DMatrix::from_row_slice(3, 2, &[1, 2, 3, 4, 5, 6]);
    assert_eq!(column_to_array2(&m.column(1)), array![[2], [4], [6]]);

    let fixed = Vector3::new(7u8, 8, 9);
    assert_eq!(column_to_array2(&fixed), array![[7u8], [8], [9]]);
}

#[test]
fn non_column_array_is_rejected() {
    let a = array![[1, 2], [3, 4]];
    let err = array2_to_column(&a).unwrap_err();
    assert_eq!(err, ConvertError::NotAColumnVector { rows: 2, cols: 2 });

    let empty = Array2::<i32>::zeros((0, 0));
    assert!(array2_to_column(&empty).is_err());
}

#[test]
fn rejected_column_leaves_destination_untouched() {
    let mut dst = DVector::from_vec(vec![9, 9]);
    let result = Converter::default().array2_to_column_into(&array![[1, 2, 3]], &mut dst);
    assert!(result.is_err());
    assert_eq!(dst, DVector::from_vec(vec![9, 9]));
}

#[test]
fn presized_column_destination_is_overwritten() {
    let converter = Converter::default();
    let mut dst = DVector::from_vec(vec![-1, -1, -1]);
    converter
        .array2_to_column_into(&array![[4], [5], [6]], &mut dst)
        .unwrap();
    assert_eq!(dst, DVector::from_vec(vec![4, 5, 6]));

    let mut a = Array2::from_elem((3, 3), 0);
    converter.column_to_array2_into(&dst, &mut a);
    assert_eq!(a, array![[4], [5], [6]]);
}

// ---------------------------------------------------------------------------
// Row vectors
// ---------------------------------------------------------------------------

#[test]
fn row_vector_becomes_one_by_n() {
    let v = RowDVector::from_vec(vec![10u16, 20, 30, 40]);
    let a = row_to_array2(&v);
    assert_eq!(a.dim(), (1, 4));
    assert_eq!(a, array![[10u16, 20, 30, 40]]);
}

#[test]
fn row_vectors_round_trip() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..50 {
        let n = rng.gen_range(0..20);
        let v = RowDVector::from_fn(n, |_, _| rng.gen::<f64>());
        let a = row_to_array2(&v);
        assert_eq!(a.nrows(), 1);

        let back: RowDVector<f64> = array2_to_row(&a).unwrap();
        assert_eq!(back.len(), n);
        assert_eq!(back, v);
    }
}

#[test]
fn row_views_convert() {
    let m = DMatrix::from_row_slice(2, 3, &[1, 2, 3, 4, 5, 6]);
    assert_eq!(row_to_array2(&m.row(1)), array![[4, 5, 6]]);
}

#[test]
fn non_row_array_is_rejected() {
    let a = array![[1], [2]];
    let err = array2_to_row(&a).unwrap_err();
    assert_eq!(err, ConvertError::NotARowVector { rows: 2, cols: 1 });
    assert!(err.to_string().contains("(2, 1)"));
}

#[test]
fn rejected_row_leaves_destination_untouched() {
    let mut dst = RowDVector::from_vec(vec![1.0, 2.0]);
    let result = Converter::default().array2_to_row_into(&array![[1.0], [2.0]], &mut dst);
    assert!(result.is_err());
    assert_eq!(dst, RowDVector::from_vec(vec![1.0, 2.0]));
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

#[test]
fn single_element_keeps_orientation() {
    let col = column_to_array2(&DVector::from_vec(vec![42]));
    let row = row_to_array2(&RowDVector::from_vec(vec![42]));
    assert_eq!(col.dim(), (1, 1));
    assert_eq!(row.dim(), (1, 1));
    assert!(array2_to_column(&col).is_ok());
    assert!(array2_to_row(&row).is_ok());
}

#[test]
fn column_array_cannot_become_row() {
    let col = column_to_array2(&DVector::from_vec(vec![1, 2, 3]));
    assert!(array2_to_row(&col).is_err());

    let row = row_to_array2(&RowDVector::from_vec(vec![1, 2, 3]));
    assert!(array2_to_column(&row).is_err());
}
