//! Lockbox: unlocking a row/column toggle puzzle
//! The puzzle reduces to a linear system over GF(2), solved by Gaussian elimination

pub mod cli;
pub mod error;
pub mod influence;
pub mod linear_algebra;
pub mod secure_box;
pub mod unlock;
pub mod vectorizer;

pub use crate::cli::Cli;
pub use crate::error::{BoxError, SolveError};
pub use crate::linear_algebra::BinaryMatrix;
pub use crate::secure_box::SecureBox;
pub use crate::unlock::{
    apply, open_box, open_box_seeded, plan_unlock, try_unlock, unlock, UnlockPlan,
};
