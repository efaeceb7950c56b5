//! Flattening of a box snapshot into the column-major encoding

use crate::influence::flat_index;

/// Flatten `state` (one `Vec` per row) so that index `col * y_size + row`
/// holds the cell at `(row, col)`.
///
/// # Panics
/// Panics if the rows of `state` do not all have the same length.
pub fn vectorize(state: &[Vec<bool>]) -> Vec<bool> {
    let y_size = state.len();
    let x_size = state.first().map_or(0, Vec::len);
    assert!(
        state.iter().all(|row| row.len() == x_size),
        "box state must not be jagged"
    );

    let mut result = vec![false; y_size * x_size];
    for (row, cells) in state.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            result[flat_index(row, col, y_size)] = cell;
        }
    }
    result
}
