//! Traits connecting the engine to problem-specific components.

use std::sync::Arc;

use crate::error::Result;
use crate::improve::Improver;
use crate::random::RandomStream;
use crate::solution::Solution;

/// Creates an empty or partial solution for an instance.
pub trait SolutionBuilder<S: Solution>: Send + Sync {
    /// Returns a new solution bound to `instance`.
    fn initialize_solution(&self, instance: &Arc<S::Instance>) -> S;
}

/// Completes a partial solution into a full candidate.
pub trait Constructive<S: Solution>: Send + Sync {
    /// Builds a complete solution starting from `solution`.
    fn construct(&self, solution: S, rng: &mut RandomStream) -> S;

    /// Name used in log messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A complete optimization strategy.
///
/// Algorithms own their components but no solution: every call to
/// [`Algorithm::algorithm`] is an independent run drawing randomness
/// from the given stream only.
pub trait Algorithm<S: Solution>: Send + Sync {
    /// Solves `instance` and returns the best solution found.
    ///
    /// Fails only if the solution's termination predicate fails.
    fn algorithm(&self, instance: &Arc<S::Instance>, rng: &mut RandomStream) -> Result<S>;

    /// Name used in reports and log messages.
    fn name(&self) -> &str;
}

/// Applies every improver in order.
pub(crate) fn improve_all<S: Solution>(improvers: &[Box<dyn Improver<S>>], solution: S) -> S {
    improvers.iter().enumerate().fold(solution, |solution, (i, improver)| {
        let solution = improver.improve(solution);
        log::trace!(
            "Improver {} ({}): {}",
            i,
            improver.name(),
            solution.score()
        );
        solution
    })
}
