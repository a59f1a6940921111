//! Core trait for solution improvers.

use crate::solution::Solution;

/// Drives a solution towards a better one, typically a local optimum.
///
/// Improvers work on the solution they are given and return it; they
/// never produce a worse solution.
pub trait Improver<S: Solution>: Send + Sync {
    /// Improves `solution` and returns it.
    fn improve(&self, solution: S) -> S;

    /// Name used in log messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
