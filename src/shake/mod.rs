//! Perturbation ("shake") and repair.
//!
//! A [`Shake`] moves a solution away from its local optimum with a
//! strength `k`; a [`Repair`] restores feasibility afterwards.
//! [`RandomMoveShake`] applies random moves drawn from neighborhoods.

mod random_move;
mod types;

pub use random_move::RandomMoveShake;
pub use types::{NoRepair, Repair, Shake};
