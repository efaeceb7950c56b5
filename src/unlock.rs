//! Computing and applying the toggles that unlock a box
//!
//! Each cell yields one equation and each possible toggle one unknown:
//! firing toggle `j` flips cell `i` iff `M[j][i]`, and the influence matrix
//! is symmetric, so the unlock sequence `s` solves `M * s = state`.

use crate::error::{BoxError, SolveError};
use crate::influence::{coordinate, influence_matrix};
use crate::secure_box::SecureBox;
use crate::vectorizer::vectorize;
use log::{debug, info, trace, warn};

/// Toggles that clear a particular box state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockPlan {
    y_size: usize,
    /// `sequence[i]` means "fire the toggle at flat index `i`"
    sequence: Vec<bool>,
}

impl UnlockPlan {
    /// The raw unlock sequence in flat index order
    pub fn sequence(&self) -> &[bool] {
        &self.sequence
    }

    /// Coordinates `(row, col)` of the toggles to fire
    pub fn toggles(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sequence
            .iter()
            .enumerate()
            .filter(|(_, &fire)| fire)
            .map(move |(i, _)| coordinate(i, self.y_size))
    }

    /// Number of toggles to fire
    pub fn len(&self) -> usize {
        self.sequence.iter().filter(|&&fire| fire).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Solve for the toggles that clear `state` (one `Vec` per row)
pub fn plan_unlock(state: &[Vec<bool>]) -> Result<UnlockPlan, SolveError> {
    let y_size = state.len();
    let x_size = state.first().map_or(0, Vec::len);
    if let Some((row, cells)) = state.iter().enumerate().find(|(_, r)| r.len() != x_size) {
        return Err(SolveError::JaggedState {
            row,
            expected: x_size,
            actual: cells.len(),
        });
    }

    let state_vector = vectorize(state);
    let matrix = influence_matrix(y_size, x_size);
    let sequence = matrix.solve(&state_vector)?;

    let plan = UnlockPlan { y_size, sequence };
    debug!(
        "planned {} toggles for {}x{} box",
        plan.len(),
        y_size,
        x_size
    );
    Ok(plan)
}

/// Fire every toggle in `plan`. Order is irrelevant since toggles commute.
pub fn apply(secure_box: &mut SecureBox, plan: &UnlockPlan) {
    for (row, col) in plan.toggles() {
        trace!("toggle ({}, {})", row, col);
        secure_box.toggle(row, col);
    }
}

/// Plan and apply an unlock, returning the plan that was fired.
///
/// On error nothing is applied.
pub fn try_unlock(secure_box: &mut SecureBox) -> Result<UnlockPlan, SolveError> {
    trace!("initial state:\n{}", secure_box);
    let plan = plan_unlock(&secure_box.state())?;
    apply(secure_box, &plan);
    Ok(plan)
}

/// Unlock `secure_box` in place. Returns true if it is still locked.
///
/// If no plan exists the box is left untouched.
pub fn unlock(secure_box: &mut SecureBox) -> bool {
    if let Err(err) = try_unlock(secure_box) {
        warn!("leaving box untouched: {}", err);
    }

    let locked = secure_box.is_locked();
    info!(
        "{}x{} box is {}",
        secure_box.y_size(),
        secure_box.x_size(),
        if locked { "still locked" } else { "open" }
    );
    locked
}

/// Build a freshly shuffled box and unlock it. Returns true if it is still locked.
pub fn open_box(y_size: usize, x_size: usize) -> Result<bool, BoxError> {
    let mut secure_box = SecureBox::new(y_size, x_size)?;
    Ok(unlock(&mut secure_box))
}

/// Like [`open_box`], with a reproducible shuffle
pub fn open_box_seeded(y_size: usize, x_size: usize, seed: u64) -> Result<bool, BoxError> {
    let mut secure_box = SecureBox::with_seed(y_size, x_size, seed)?;
    Ok(unlock(&mut secure_box))
}
