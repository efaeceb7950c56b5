//! Linear algebra over GF(2)
//! Addition is XOR and multiplication is AND, so every row operation is a bitwise XOR

use crate::error::SolveError;
use log::trace;
use std::ops::{Index, IndexMut};

/// Matrix over GF(2) (binary field) stored as one `Vec<bool>` per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<bool>>,
}

impl BinaryMatrix {
    /// Create a zero matrix with given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        let data = vec![vec![false; cols]; rows];
        Self { rows, cols, data }
    }

    /// Create an identity matrix of given size
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::new(size, size);
        for i in 0..size {
            matrix[i][i] = true;
        }
        matrix
    }

    /// Build a matrix from its rows
    ///
    /// # Panics
    /// Panics if the rows do not all have the same length.
    pub fn from_rows(data: Vec<Vec<bool>>) -> Self {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        assert!(
            data.iter().all(|row| row.len() == cols),
            "matrix rows must all have {cols} columns"
        );
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// XOR row `source` into row `target` for columns `from_col..`
    fn xor_row_into(&mut self, source: usize, target: usize, from_col: usize) {
        debug_assert_ne!(source, target);
        let (src, dst) = if source < target {
            let (lo, hi) = self.data.split_at_mut(target);
            (&lo[source], &mut hi[0])
        } else {
            let (lo, hi) = self.data.split_at_mut(source);
            (&hi[0], &mut lo[target])
        };
        for (d, s) in dst[from_col..].iter_mut().zip(&src[from_col..]) {
            *d ^= *s;
        }
    }

    /// Reduce `self` to reduced row echelon form, carrying `rhs` along.
    ///
    /// Matrix rows and their `rhs` entries are always swapped and XORed
    /// together. Columns without a pivot are skipped and become free
    /// variables. Returns the number of pivot rows (the rank).
    ///
    /// # Panics
    /// Panics if `rhs.len() != self.rows()`.
    pub fn gaussian_elimination(&mut self, rhs: &mut [bool]) -> usize {
        assert_eq!(rhs.len(), self.rows, "rhs length must match row count");
        let mut pivot_row = 0;

        for col in 0..self.cols {
            if pivot_row >= self.rows {
                break;
            }

            // Find pivot in current column
            let Some(found) = (pivot_row..self.rows).find(|&i| self[i][col]) else {
                // No pivot, the variable stays free
                continue;
            };
            if found != pivot_row {
                self.data.swap(found, pivot_row);
                rhs.swap(found, pivot_row);
            }

            // Eliminate the column above and below the pivot.
            // Columns before `col` are already zero in the pivot row.
            for i in 0..self.rows {
                if i != pivot_row && self[i][col] {
                    self.xor_row_into(pivot_row, i, col);
                    rhs[i] ^= rhs[pivot_row];
                }
            }

            pivot_row += 1;
        }

        trace!(
            "eliminated {}x{} matrix, rank {}",
            self.rows,
            self.cols,
            pivot_row
        );
        pivot_row
    }

    /// Solve the system Ax = b where A is this matrix.
    ///
    /// Free variables are set to false, so the returned vector is one
    /// solution among possibly many.
    pub fn solve(&self, b: &[bool]) -> Result<Vec<bool>, SolveError> {
        if b.len() != self.rows {
            return Err(SolveError::DimensionMismatch {
                expected: self.rows,
                actual: b.len(),
            });
        }

        let mut reduced = self.clone();
        let mut rhs = b.to_vec();
        let rank = reduced.gaussian_elimination(&mut rhs);

        // Zero rows must have a zero right-hand side
        if let Some(row) = (rank..self.rows).find(|&i| rhs[i]) {
            return Err(SolveError::Inconsistent { row });
        }

        // Back substitution: each pivot row fixes its pivot column
        let mut x = vec![false; self.cols];
        for i in 0..rank {
            if let Some(pivot_col) = reduced[i].iter().position(|&bit| bit) {
                x[pivot_col] = rhs[i];
            }
        }

        Ok(x)
    }

    /// Compute `self * x` over GF(2)
    ///
    /// # Panics
    /// Panics if `x.len() != self.cols()`.
    pub fn multiply(&self, x: &[bool]) -> Vec<bool> {
        assert_eq!(x.len(), self.cols, "vector length must match column count");
        self.data
            .iter()
            .map(|row| {
                row.iter()
                    .zip(x)
                    .fold(false, |acc, (&a, &b)| acc ^ (a & b))
            })
            .collect()
    }

    /// Rank of the matrix over GF(2)
    pub fn rank(&self) -> usize {
        let mut reduced = self.clone();
        let mut rhs = vec![false; self.rows];
        reduced.gaussian_elimination(&mut rhs)
    }
}

impl Index<usize> for BinaryMatrix {
    type Output = Vec<bool>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for BinaryMatrix {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(values: &[u8]) -> Vec<bool> {
        values.iter().map(|&v| v == 1).collect()
    }

    fn matrix(rows: &[&[u8]]) -> BinaryMatrix {
        BinaryMatrix::from_rows(rows.iter().map(|row| bits(row)).collect())
    }

    #[test]
    fn test_identity_matrix() {
        let matrix = BinaryMatrix::identity(3);
        assert!(matrix[0][0]);
        assert!(matrix[1][1]);
        assert!(matrix[2][2]);
        assert!(!matrix[0][1]);
        assert!(!matrix[1][2]);
    }

    #[test]
    fn test_gaussian_elimination() {
        let mut m = matrix(&[&[1, 1, 0], &[1, 0, 1], &[0, 1, 1]]);
        let mut rhs = bits(&[1, 0, 1]);

        // Third row is the sum of the first two
        assert_eq!(m.gaussian_elimination(&mut rhs), 2);

        // Reduced row echelon form
        assert_eq!(m[0], bits(&[1, 0, 1]));
        assert_eq!(m[1], bits(&[0, 1, 1]));
        assert_eq!(m[2], bits(&[0, 0, 0]));
        assert_eq!(rhs, bits(&[0, 1, 0]));
    }

    #[test]
    fn test_elimination_swaps_rhs_with_rows() {
        let mut m = matrix(&[&[0, 1], &[1, 0]]);
        let mut rhs = bits(&[1, 0]);

        assert_eq!(m.gaussian_elimination(&mut rhs), 2);
        assert_eq!(m, BinaryMatrix::identity(2));
        assert_eq!(rhs, bits(&[0, 1]));
    }

    #[test]
    fn test_solve_system() {
        let m = matrix(&[&[1, 1, 0], &[1, 0, 1], &[0, 1, 1]]);
        let b = bits(&[1, 0, 1]);

        let x = m.solve(&b).unwrap();
        assert_eq!(x.len(), 3);
        assert_eq!(m.multiply(&x), b);
        // Free column defaults to false
        assert!(!x[2]);
    }

    #[test]
    fn test_solve_full_rank_is_unique() {
        let m = matrix(&[&[1, 1, 1], &[0, 1, 1], &[0, 0, 1]]);
        let x = m.solve(&bits(&[0, 1, 1])).unwrap();
        assert_eq!(x, bits(&[1, 0, 1]));
    }

    #[test]
    fn test_solve_inconsistent() {
        let m = matrix(&[&[1, 1], &[1, 1]]);
        assert_eq!(
            m.solve(&bits(&[1, 0])),
            Err(SolveError::Inconsistent { row: 1 })
        );
    }

    #[test]
    fn test_solve_rejects_wrong_rhs_length() {
        let m = BinaryMatrix::identity(3);
        assert_eq!(
            m.solve(&bits(&[1, 0])),
            Err(SolveError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_solve_rectangular() {
        // More unknowns than equations
        let m = matrix(&[&[0, 1, 1, 0], &[1, 0, 0, 1]]);
        let b = bits(&[1, 1]);
        let x = m.solve(&b).unwrap();
        assert_eq!(x, bits(&[1, 1, 0, 0]));

        // More equations than unknowns, consistent
        let m = matrix(&[&[1, 0], &[0, 1], &[1, 1]]);
        let x = m.solve(&bits(&[1, 0, 1])).unwrap();
        assert_eq!(x, bits(&[1, 0]));
    }

    #[test]
    fn test_solve_leaves_matrix_untouched() {
        let m = matrix(&[&[0, 1], &[1, 1]]);
        let before = m.clone();
        m.solve(&bits(&[1, 1])).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn test_zero_matrix() {
        let m = BinaryMatrix::new(2, 2);
        assert_eq!(m.rank(), 0);
        assert_eq!(m.solve(&bits(&[0, 0])).unwrap(), bits(&[0, 0]));
        assert!(m.solve(&bits(&[0, 1])).is_err());
    }

    #[test]
    fn test_multiply() {
        let m = matrix(&[&[1, 1, 0], &[0, 1, 1]]);
        assert_eq!(m.multiply(&bits(&[1, 1, 1])), bits(&[0, 0]));
        assert_eq!(m.multiply(&bits(&[1, 0, 1])), bits(&[1, 1]));
    }

    #[test]
    #[should_panic = "matrix rows must all have"]
    fn test_from_rows_jagged() {
        BinaryMatrix::from_rows(vec![vec![true, false], vec![true]]);
    }
}
