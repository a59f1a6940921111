//! Core traits for moves and neighborhoods.

use crate::random::RandomStream;
use crate::solution::Solution;

/// A delta over a solution.
///
/// A move is a description of a change: it reads the solution when it
/// is created and is applied with [`Move::execute`], which consumes it
/// so the same move cannot be applied twice.
///
/// Moves whose delta is fully computed at creation time are "eager"
/// and are produced in bulk by an
/// [`EagerNeighborhood`](super::EagerNeighborhood). Moves that can
/// produce their successor on demand implement [`LazyMove`].
pub trait Move<S: Solution> {
    /// Whether the move can be applied to `solution`.
    fn is_valid(&self, _solution: &S) -> bool {
        true
    }

    /// Score change applying this move would cause.
    fn score_change(&self) -> f64;

    /// Applies the move in place.
    fn execute(self, solution: &mut S);

    /// `true` if applying the move is strictly better than doing nothing.
    fn improves(&self) -> bool
    where
        Self: Sized,
    {
        S::comparator().improves(self.score_change())
    }

    /// Returns `self` if strictly better than `other`, `other` otherwise.
    fn best_move(self, other: Self) -> Self
    where
        Self: Sized,
    {
        if S::comparator().is_better(self.score_change(), other.score_change()) {
            self
        } else {
            other
        }
    }
}

/// A move that is one element of an on-demand sequence.
pub trait LazyMove<S: Solution>: Move<S> + Sized {
    /// Next move of the same generation, `None` when exhausted.
    fn next(&self, solution: &S) -> Option<Self>;
}

/// Generator of moves over a solution.
///
/// Neighborhoods hold no per-solution state: the solution is supplied
/// on every call. [`Neighborhood::stream`] must enumerate moves in a
/// fixed order so that runs are reproducible for a given seed.
pub trait Neighborhood<S: Solution, M: Move<S>>: Send + Sync {
    /// Lazily enumerates the moves available for `solution`.
    ///
    /// The sequence is finite and a new call starts it over.
    fn stream<'a>(&'a self, solution: &'a S) -> Box<dyn Iterator<Item = M> + 'a>
    where
        M: 'a;

    /// Uniformly samples one valid move, `None` if there is none.
    fn random_move(&self, solution: &S, rng: &mut RandomStream) -> Option<M>;

    /// Name used in log messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
