//! The candidate-solution contract.

use crate::compare::ScoreComparator;
use crate::error::Result;

/// A mutable candidate assignment for a problem instance.
///
/// `Clone` must produce an independent deep copy: mutating the clone
/// (shaking it, optimizing it) never changes the original's score or
/// assignment. Solutions may share read-only data such as the instance
/// or a termination budget.
///
/// # Direction and tolerance
///
/// [`Solution::comparator`] is the single place a problem declares
/// whether it minimizes or maximizes and how large a score difference
/// must be to count. Moves, local searches and orchestrators all use it.
///
/// # Examples
///
/// ```
/// use u_vns::solution::Solution;
/// use u_vns::Result;
///
/// #[derive(Clone, Debug)]
/// struct Tour { order: Vec<usize>, length: f64 }
///
/// impl Solution for Tour {
///     type Instance = ();
///     fn instance(&self) -> &() { &() }
///     fn score(&self) -> f64 { self.length }
///     fn stop(&self) -> Result<bool> { Ok(true) }
/// }
///
/// let a = Tour { order: vec![0, 1], length: 10.0 };
/// let b = Tour { order: vec![1, 0], length: 8.0 };
/// assert!(b.is_better_than(&a));
/// ```
pub trait Solution: Clone + Send + Sync {
    /// Problem description this solution was built from.
    type Instance: Send + Sync;

    /// Instance this solution refers to.
    fn instance(&self) -> &Self::Instance;

    /// Objective value of the current assignment.
    fn score(&self) -> f64;

    /// Termination predicate for the run this solution belongs to.
    ///
    /// Evaluated afresh on every call. An error aborts the run and is
    /// returned to the caller of the orchestrator.
    fn stop(&self) -> Result<bool>;

    /// Direction and tolerance for every comparison on this problem.
    fn comparator() -> ScoreComparator
    where
        Self: Sized,
    {
        ScoreComparator::default()
    }

    /// `true` if this solution is strictly better than `other`.
    fn is_better_than(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        Self::comparator().is_better(self.score(), other.score())
    }
}

/// Returns the better of two solutions, keeping `current` on ties.
pub fn better_solution<S: Solution>(current: S, other: S) -> S {
    if other.is_better_than(&current) {
        other
    } else {
        current
    }
}
