use crate::config::Traversal;

/// Visit every `(row, col)` of a `rows x cols` grid exactly once.
#[inline]
pub fn for_each_cell<F>(rows: usize, cols: usize, order: Traversal, mut visit: F)
where
    F: FnMut(usize, usize),
{
    match order {
        Traversal::ColumnMajor => {
            for j in 0..cols {
                for i in 0..rows {
                    visit(i, j);
                }
            }
        }
        Traversal::RowMajor => {
            for i in 0..rows {
                for j in 0..cols {
                    visit(i, j);
                }
            }
        }
    }
}
