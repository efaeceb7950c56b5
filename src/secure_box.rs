//! The toggle puzzle itself: a grid of locked/unlocked cells

use crate::error::BoxError;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Upper bound (exclusive) on the number of random toggles applied by a shuffle
pub const MAX_SHUFFLE_TOGGLES: u32 = 1000;

/// A `y_size x x_size` grid of cells, `true` meaning locked.
///
/// Toggling a cell flips every cell in its row and every cell in its
/// column; the toggled cell itself flips once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecureBox {
    y_size: usize,
    x_size: usize,
    /// Row-major storage, the cell at (row, col) is at `row * x_size + col`
    cells: Vec<bool>,
}

impl SecureBox {
    /// Create a box shuffled from OS entropy
    pub fn new(y_size: usize, x_size: usize) -> Result<Self, BoxError> {
        Self::with_rng(y_size, x_size, &mut StdRng::from_entropy())
    }

    /// Create a box whose shuffle is fully determined by `seed`
    pub fn with_seed(y_size: usize, x_size: usize, seed: u64) -> Result<Self, BoxError> {
        Self::with_rng(y_size, x_size, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a box shuffled with a caller-supplied generator
    pub fn with_rng<R: Rng + ?Sized>(
        y_size: usize,
        x_size: usize,
        rng: &mut R,
    ) -> Result<Self, BoxError> {
        let mut secure_box = Self::unlocked(y_size, x_size)?;
        secure_box.shuffle(rng);
        Ok(secure_box)
    }

    /// Create an all-unlocked box
    pub fn unlocked(y_size: usize, x_size: usize) -> Result<Self, BoxError> {
        if y_size == 0 || x_size == 0 {
            return Err(BoxError::InvalidDimensions { y_size, x_size });
        }
        Ok(Self {
            y_size,
            x_size,
            cells: vec![false; y_size * x_size],
        })
    }

    /// Create a box from an explicit snapshot, without shuffling
    pub fn from_state(state: Vec<Vec<bool>>) -> Result<Self, BoxError> {
        let y_size = state.len();
        let x_size = state.first().map_or(0, Vec::len);
        if y_size == 0 || x_size == 0 {
            return Err(BoxError::EmptyState);
        }
        if let Some((row, cells)) = state.iter().enumerate().find(|(_, r)| r.len() != x_size) {
            return Err(BoxError::JaggedState {
                row,
                expected: x_size,
                actual: cells.len(),
            });
        }

        Ok(Self {
            y_size,
            x_size,
            cells: state.into_iter().flatten().collect(),
        })
    }

    /// Apply a random number of random toggles.
    ///
    /// The result is always reachable from the all-unlocked box.
    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let toggles = rng.gen_range(0..MAX_SHUFFLE_TOGGLES);
        for _ in 0..toggles {
            let row = rng.gen_range(0..self.y_size);
            let col = rng.gen_range(0..self.x_size);
            self.toggle(row, col);
        }
        debug!(
            "shuffled {}x{} box with {} toggles, {} cells locked",
            self.y_size,
            self.x_size,
            toggles,
            self.locked_count()
        );
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.y_size && col < self.x_size,
            "cell ({row}, {col}) out of bounds for {}x{} box",
            self.y_size,
            self.x_size
        );
        row * self.x_size + col
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.offset(row, col)]
    }

    /// Flip every cell in row `row` and column `col`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let offset = self.offset(row, col);
        let x_size = self.x_size;
        for cell in &mut self.cells[row * x_size..(row + 1) * x_size] {
            *cell = !*cell;
        }
        for cell in self.cells.iter_mut().skip(col).step_by(x_size) {
            *cell = !*cell;
        }
        // The column pass flipped the intersection back
        self.cells[offset] = !self.cells[offset];
    }

    /// Returns true if any cell is locked
    pub fn is_locked(&self) -> bool {
        self.cells.iter().any(|&cell| cell)
    }

    /// Number of locked cells
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns a copy of the current state, one `Vec` per row
    pub fn state(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.x_size)
            .map(<[bool]>::to_vec)
            .collect()
    }
}

impl fmt::Display for SecureBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.x_size) {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
