//! Core traits for perturbation and repair.

use crate::random::RandomStream;
use crate::solution::Solution;

/// Randomized perturbation used to escape local optima.
///
/// Shakes are stateless apart from their configuration. The result is
/// feasible but possibly worse than the input.
pub trait Shake<S: Solution>: Send + Sync {
    /// Perturbs `solution` in place with strength `k`.
    ///
    /// `max_k` is the largest strength the caller will use, for
    /// implementations that scale relative to it.
    fn shake(&self, solution: &mut S, k: usize, max_k: usize, rng: &mut RandomStream);

    /// Perturbs a clone of `solution`, leaving the original untouched.
    fn shake_copy(&self, solution: &S, k: usize, max_k: usize, rng: &mut RandomStream) -> S {
        let mut copy = solution.clone();
        self.shake(&mut copy, k, max_k, rng);
        copy
    }

    /// Name used in log messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Problem-specific step restoring feasibility after a perturbation.
///
/// Must leave an already feasible solution unchanged.
pub trait Repair<S>: Send + Sync {
    /// Repairs `solution`; returns `false` if feasibility could not be
    /// restored.
    fn repair(&self, solution: &mut S) -> bool;
}

/// Repair for problems where every move keeps the solution feasible.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRepair;

impl<S> Repair<S> for NoRepair {
    fn repair(&self, _solution: &mut S) -> bool {
        true
    }
}

impl<S, F> Repair<S> for F
where
    F: Fn(&mut S) -> bool + Send + Sync,
{
    fn repair(&self, solution: &mut S) -> bool {
        self(solution)
    }
}
