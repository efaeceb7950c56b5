//! Effect of a single toggle, expressed as a vector over GF(2)
//!
//! Every vector in the crate uses the same column-major flattening:
//! the cell at `(row, col)` lives at index `col * y_size + row`.

use crate::linear_algebra::BinaryMatrix;

/// Flat index of the cell at `(row, col)`
pub fn flat_index(row: usize, col: usize, y_size: usize) -> usize {
    col * y_size + row
}

/// Inverse of [`flat_index`], returns `(row, col)`
pub fn coordinate(index: usize, y_size: usize) -> (usize, usize) {
    (index % y_size, index / y_size)
}

/// Cells flipped by toggling `(row, col)`.
///
/// For a 3x3 box and the centre cell `(1, 1)`:
///
/// ```text
/// |0 1 0|
/// |1 1 1|   ->   [0, 1, 0, 1, 1, 1, 0, 1, 0]
/// |0 1 0|
/// ```
pub fn influence(row: usize, col: usize, y_size: usize, x_size: usize) -> Vec<bool> {
    let mut result = vec![false; y_size * x_size];

    for i in 0..x_size {
        result[flat_index(row, i, y_size)] = true;
    }
    for j in 0..y_size {
        result[flat_index(j, col, y_size)] = true;
    }

    result
}

/// One influence vector per toggle, row `i` belonging to the toggle at flat index `i`.
///
/// The relation "same row or same column" is symmetric, so the matrix is too.
pub fn influence_matrix(y_size: usize, x_size: usize) -> BinaryMatrix {
    let rows = (0..x_size)
        .flat_map(|col| (0..y_size).map(move |row| influence(row, col, y_size, x_size)))
        .collect();
    BinaryMatrix::from_rows(rows)
}
