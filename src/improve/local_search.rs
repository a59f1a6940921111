//! Local search to a fixpoint.
//!
//! # Algorithm
//!
//! 1. Select a candidate move from the configured neighborhoods
//! 2. If there is none, or it does not improve, stop
//! 3. Otherwise execute it and go back to 1
//!
//! Best improvement folds each neighborhood's valid moves into one
//! representative with [`Move::best_move`] (ties keep the earlier move
//! of the enumeration), then folds the representatives the same way
//! (ties keep the later neighborhood's move). First improvement applies
//! the first valid improving move in neighborhood order.
//!
//! # Termination
//!
//! There is no iteration cap. The loop ends because every executed
//! move is strictly better than the current solution beyond the
//! comparator's tolerance, so with a finite solution space no solution
//! is visited twice. A move whose reported score change does not match
//! the effect of executing it breaks this guarantee.

use super::types::Improver;
use crate::error::{Error, Result};
use crate::neighborhood::{Move, Neighborhood};
use crate::solution::Solution;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a local search iteration picks the move to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveSelection {
    /// Best improving move across all neighborhoods.
    #[default]
    BestImprovement,
    /// First improving move in neighborhood order.
    FirstImprovement,
}

/// Local search over one or more neighborhoods sharing a move type.
///
/// # Examples
///
/// ```no_run
/// use u_vns::improve::{Improver, LocalSearch};
/// use u_vns::neighborhood::{Eager, EagerNeighborhood, Move, Neighborhood};
/// use u_vns::solution::Solution;
///
/// #[derive(Clone)]
/// struct Point { x: i64 }
///
/// impl Solution for Point {
///     type Instance = ();
///     fn instance(&self) -> &() { &() }
///     fn score(&self) -> f64 { (self.x * self.x) as f64 }
///     fn stop(&self) -> u_vns::Result<bool> { Ok(false) }
/// }
///
/// struct Step { to: i64, delta: f64 }
///
/// impl Move<Point> for Step {
///     fn score_change(&self) -> f64 { self.delta }
///     fn execute(self, p: &mut Point) { p.x = self.to; }
/// }
///
/// struct Steps;
///
/// impl EagerNeighborhood<Point, Step> for Steps {
///     fn moves(&self, p: &Point) -> Vec<Step> {
///         [p.x - 1, p.x + 1]
///             .into_iter()
///             .map(|to| Step { to, delta: (to * to - p.x * p.x) as f64 })
///             .collect()
///     }
/// }
///
/// fn main() -> u_vns::Result<()> {
///     let steps: Vec<Box<dyn Neighborhood<Point, Step>>> = vec![Box::new(Eager(Steps))];
///     let ls = LocalSearch::best_improvement(steps)?;
///     let optimum = ls.improve(Point { x: 7 });
///     assert_eq!(optimum.x, 0);
///     Ok(())
/// }
/// ```
pub struct LocalSearch<S: Solution, M: Move<S>> {
    neighborhoods: Vec<Box<dyn Neighborhood<S, M>>>,
    selection: MoveSelection,
}

impl<S, M> LocalSearch<S, M>
where
    S: Solution,
    M: Move<S>,
{
    /// Creates a local search with the given selection strategy.
    ///
    /// Fails if `neighborhoods` is empty.
    pub fn new(
        selection: MoveSelection,
        neighborhoods: Vec<Box<dyn Neighborhood<S, M>>>,
    ) -> Result<Self> {
        if neighborhoods.is_empty() {
            return Err(Error::NoNeighborhoods("LocalSearch"));
        }
        Ok(Self {
            neighborhoods,
            selection,
        })
    }

    /// Best-improvement local search.
    pub fn best_improvement(neighborhoods: Vec<Box<dyn Neighborhood<S, M>>>) -> Result<Self> {
        Self::new(MoveSelection::BestImprovement, neighborhoods)
    }

    /// First-improvement local search.
    pub fn first_improvement(neighborhoods: Vec<Box<dyn Neighborhood<S, M>>>) -> Result<Self> {
        Self::new(MoveSelection::FirstImprovement, neighborhoods)
    }

    /// Selection strategy in use.
    pub fn selection(&self) -> MoveSelection {
        self.selection
    }

    /// Performs one iteration.
    ///
    /// Returns `true` if an improving move was executed, `false` if the
    /// solution is a local optimum for the configured neighborhoods.
    pub fn iteration(&self, solution: &mut S) -> bool {
        let candidate = match self.selection {
            MoveSelection::BestImprovement => self.best_move(solution),
            MoveSelection::FirstImprovement => self.first_improving_move(solution),
        };
        match candidate {
            Some(m) if m.improves() => {
                m.execute(solution);
                true
            }
            _ => false,
        }
    }

    fn best_move(&self, solution: &S) -> Option<M> {
        let mut best: Option<M> = None;
        for neighborhood in &self.neighborhoods {
            let local = neighborhood
                .stream(solution)
                .filter(|m| m.is_valid(solution))
                .reduce(|acc, next| next.best_move(acc));
            let Some(local) = local else {
                continue;
            };
            best = Some(match best {
                None => local,
                Some(global) => global.best_move(local),
            });
        }
        best
    }

    fn first_improving_move(&self, solution: &S) -> Option<M> {
        self.neighborhoods.iter().find_map(|neighborhood| {
            neighborhood
                .stream(solution)
                .find(|m| m.is_valid(solution) && m.improves())
        })
    }
}

impl<S, M> Improver<S> for LocalSearch<S, M>
where
    S: Solution,
    M: Move<S>,
{
    fn improve(&self, mut solution: S) -> S {
        let mut steps = 0usize;
        while self.iteration(&mut solution) {
            steps += 1;
        }
        log::trace!(
            "{:?} local search finished after {} moves, score {}",
            self.selection,
            steps,
            solution.score()
        );
        solution
    }

    fn name(&self) -> &str {
        match self.selection {
            MoveSelection::BestImprovement => "LocalSearchBestImprovement",
            MoveSelection::FirstImprovement => "LocalSearchFirstImprovement",
        }
    }
}
