//! Neighborhoods that generate moves one at a time.
//!
//! Useful when the move space is combinatorially large: nothing is
//! materialized until the consumer asks for the next element, and a
//! local search that stops early never pays for the rest.

use super::types::{LazyMove, Neighborhood};
use crate::random::RandomStream;
use crate::solution::Solution;

/// Produces the first move of a lazy sequence.
///
/// Wrap an implementation in [`Lazy`] to use it as a [`Neighborhood`].
pub trait LazyNeighborhood<S: Solution, M: LazyMove<S>>: Send + Sync {
    /// First move of the sequence for `solution`, `None` if empty.
    fn first_move(&self, solution: &S) -> Option<M>;

    /// Uniformly samples one valid move.
    ///
    /// The default walks the whole sequence with reservoir sampling;
    /// override it when the problem can sample directly.
    fn random_move(&self, solution: &S, rng: &mut RandomStream) -> Option<M> {
        let mut chosen = None;
        let mut seen = 0usize;
        for m in LazyMoves::new(solution, self.first_move(solution)) {
            if !m.is_valid(solution) {
                continue;
            }
            seen += 1;
            if rng.index(seen) == Some(0) {
                chosen = Some(m);
            }
        }
        chosen
    }
}

/// Iterator following a [`LazyMove`] chain until exhaustion.
pub struct LazyMoves<'a, S, M> {
    solution: &'a S,
    pending: Option<M>,
}

impl<'a, S, M> LazyMoves<'a, S, M>
where
    S: Solution,
    M: LazyMove<S>,
{
    /// Starts the chain at `first`.
    pub fn new(solution: &'a S, first: Option<M>) -> Self {
        Self {
            solution,
            pending: first,
        }
    }
}

impl<S, M> Iterator for LazyMoves<'_, S, M>
where
    S: Solution,
    M: LazyMove<S>,
{
    type Item = M;

    fn next(&mut self) -> Option<M> {
        let current = self.pending.take()?;
        self.pending = current.next(self.solution);
        Some(current)
    }
}

/// Adapter exposing a [`LazyNeighborhood`] as a [`Neighborhood`].
#[derive(Debug, Clone, Default)]
pub struct Lazy<N>(pub N);

impl<S, M, N> Neighborhood<S, M> for Lazy<N>
where
    S: Solution,
    M: LazyMove<S>,
    N: LazyNeighborhood<S, M>,
{
    fn stream<'a>(&'a self, solution: &'a S) -> Box<dyn Iterator<Item = M> + 'a>
    where
        M: 'a,
    {
        Box::new(LazyMoves::new(solution, self.0.first_move(solution)))
    }

    fn random_move(&self, solution: &S, rng: &mut RandomStream) -> Option<M> {
        self.0.random_move(solution, rng)
    }

    fn name(&self) -> &str {
        std::any::type_name::<N>()
    }
}
