//! Shake by executing random moves.
//!
//! # Algorithm
//!
//! For each of `k * ratio` attempts:
//!
//! 1. Pick a uniformly random starting neighborhood
//! 2. Probe neighborhoods round-robin from there until one yields a
//!    random move, and execute it without any filtering
//! 3. If no neighborhood yields a move, stop early
//!
//! The repair step then runs exactly once, whether or not the attempt
//! budget was used up.

use super::types::{Repair, Shake};
use crate::error::{Error, Result};
use crate::neighborhood::{Move, Neighborhood};
use crate::random::RandomStream;
use crate::solution::Solution;

/// Applies `k * ratio` random moves, then repairs.
pub struct RandomMoveShake<S: Solution, M: Move<S>, R> {
    ratio: usize,
    neighborhoods: Vec<Box<dyn Neighborhood<S, M>>>,
    repair: R,
}

impl<S, M, R> RandomMoveShake<S, M, R>
where
    S: Solution,
    M: Move<S>,
    R: Repair<S>,
{
    /// Creates the shake.
    ///
    /// Fails if `neighborhoods` is empty.
    pub fn new(
        ratio: usize,
        neighborhoods: Vec<Box<dyn Neighborhood<S, M>>>,
        repair: R,
    ) -> Result<Self> {
        if neighborhoods.is_empty() {
            return Err(Error::NoNeighborhoods("RandomMoveShake"));
        }
        Ok(Self {
            ratio,
            neighborhoods,
            repair,
        })
    }

    /// Moves applied per unit of strength.
    pub fn ratio(&self) -> usize {
        self.ratio
    }

    fn random_move(&self, solution: &S, rng: &mut RandomStream) -> Option<M> {
        let n = self.neighborhoods.len();
        let start = rng.index(n)?;
        (0..n).find_map(|offset| {
            self.neighborhoods[(start + offset) % n].random_move(solution, rng)
        })
    }
}

impl<S, M, R> Shake<S> for RandomMoveShake<S, M, R>
where
    S: Solution,
    M: Move<S>,
    R: Repair<S>,
{
    /// `max_k` is not used by this shake.
    fn shake(&self, solution: &mut S, k: usize, _max_k: usize, rng: &mut RandomStream) {
        let attempts = k.saturating_mul(self.ratio);
        for applied in 0..attempts {
            match self.random_move(solution, rng) {
                Some(m) => m.execute(solution),
                None => {
                    log::warn!(
                        "No move available in any neighborhood, ending shake after {} of {} moves",
                        applied,
                        attempts
                    );
                    break;
                }
            }
        }
        if !self.repair.repair(solution) {
            log::warn!("Repair could not restore feasibility, keeping shaken solution");
        }
    }

    fn name(&self) -> &str {
        "RandomMoveShake"
    }
}
