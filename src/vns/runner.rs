//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm
//!
//! Outer loop (restarts):
//!
//! 1. Build and construct a solution x, apply all improvers
//! 2. Set i = 0
//! 3. While i < |ks| and x's termination predicate is false:
//!    a. **Shaking**: for every shake, perturb a clone of the running
//!    best with strength ks\[i\] and improve it
//!    b. **Move or not**: if some shaken solution beats x, set x to the
//!    best of them and i = 0; otherwise i = i + 1
//! 4. Keep the better of x and the global best (ties keep the global
//!    best); repeat from 1 until the global best's predicate is true
//!
//! The outer loop evaluates the predicate on the global best, and each
//! restart builds a new solution. If solutions get their budget when
//! they are built, a restart whose solution becomes the new global best
//! also brings a fresh budget with it.
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use std::sync::Arc;

use super::config::VnsConfig;
use crate::algorithm::{improve_all, Algorithm, Constructive, SolutionBuilder};
use crate::error::{Error, Result};
use crate::improve::Improver;
use crate::random::RandomStream;
use crate::shake::Shake;
use crate::solution::{better_solution, Solution};

/// One pass of the inner loop.
#[derive(Debug, Clone, PartialEq)]
pub struct VnsRound {
    /// Restart the round belongs to (0-based).
    pub restart: usize,
    /// Strength index used for the shakes.
    pub strength_index: usize,
    /// Strength used for the shakes.
    pub strength: usize,
    /// Whether a shaken solution replaced the active one.
    pub accepted: bool,
    /// Score of the active solution after the round.
    pub score: f64,
}

/// Result of a VNS run.
#[derive(Debug, Clone)]
pub struct VnsResult<S> {
    /// Best solution found.
    pub best: S,
    /// Score of the best solution.
    pub best_score: f64,
    /// Number of constructions performed.
    pub restarts: usize,
    /// Every inner-loop round, in execution order.
    pub rounds: Vec<VnsRound>,
    /// Global best score after each restart.
    pub best_history: Vec<f64>,
}

impl<S> VnsResult<S> {
    /// Number of rounds in which a shake was accepted.
    pub fn improvements(&self) -> usize {
        self.rounds.iter().filter(|r| r.accepted).count()
    }
}

/// Variable Neighborhood Search.
pub struct Vns<S: Solution> {
    ks: Vec<usize>,
    max_k: usize,
    builder: Box<dyn SolutionBuilder<S>>,
    constructive: Box<dyn Constructive<S>>,
    shakes: Vec<Box<dyn Shake<S>>>,
    improvers: Vec<Box<dyn Improver<S>>>,
    name: String,
}

impl<S: Solution> Vns<S> {
    /// Creates the algorithm.
    ///
    /// Strengths are sorted ascending; the largest is passed to shakes
    /// as `max_k`. Fails if there are no strengths or no shakes.
    pub fn new(
        config: &VnsConfig,
        builder: Box<dyn SolutionBuilder<S>>,
        constructive: Box<dyn Constructive<S>>,
        shakes: Vec<Box<dyn Shake<S>>>,
        improvers: Vec<Box<dyn Improver<S>>>,
    ) -> Result<Self> {
        config.validate()?;
        if shakes.is_empty() {
            return Err(Error::NoShakes);
        }
        let mut ks = config.ks.clone();
        ks.sort_unstable();
        let max_k = ks.last().copied().ok_or(Error::EmptyStrengths)?;
        Ok(Self {
            ks,
            max_k,
            builder,
            constructive,
            shakes,
            improvers,
            name: "VNS".to_string(),
        })
    }

    /// Sets the name used in reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sorted shake strengths.
    pub fn strengths(&self) -> &[usize] {
        &self.ks
    }

    /// Largest shake strength.
    pub fn max_k(&self) -> usize {
        self.max_k
    }

    /// Executes VNS until the global best's termination predicate fires.
    pub fn run(&self, instance: &Arc<S::Instance>, rng: &mut RandomStream) -> Result<VnsResult<S>> {
        let mut rounds = Vec::new();
        let mut best = self.iteration(instance, rng, 0, &mut rounds)?;
        let mut restarts = 1;
        let mut best_history = vec![best.score()];

        while !best.stop()? {
            let solution = self.iteration(instance, rng, restarts, &mut rounds)?;
            restarts += 1;
            best = better_solution(best, solution);
            best_history.push(best.score());
            log::debug!("{}: restart {} best {}", self.name, restarts, best.score());
        }

        Ok(VnsResult {
            best_score: best.score(),
            best,
            restarts,
            rounds,
            best_history,
        })
    }

    fn iteration(
        &self,
        instance: &Arc<S::Instance>,
        rng: &mut RandomStream,
        restart: usize,
        rounds: &mut Vec<VnsRound>,
    ) -> Result<S> {
        let solution = self.builder.initialize_solution(instance);
        let solution = self.constructive.construct(solution, rng);
        let mut solution = improve_all(&self.improvers, solution);
        log::debug!("{}: constructed {}", self.name, solution.score());

        let mut index = 0;
        while index < self.ks.len() && !solution.stop()? {
            let k = self.ks[index];
            let mut winner: Option<S> = None;
            for shake in &self.shakes {
                let base = winner.as_ref().unwrap_or(&solution);
                let shaken = shake.shake_copy(base, k, self.max_k, rng);
                let candidate = improve_all(&self.improvers, shaken);
                if candidate.is_better_than(base) {
                    winner = Some(candidate);
                }
            }

            let accepted = winner.is_some();
            let strength_index = index;
            match winner {
                Some(w) => {
                    solution = w;
                    index = 0;
                }
                None => index += 1,
            }
            log::trace!(
                "{}: k={} accepted={} score={}",
                self.name,
                k,
                accepted,
                solution.score()
            );
            rounds.push(VnsRound {
                restart,
                strength_index,
                strength: k,
                accepted,
                score: solution.score(),
            });
        }
        Ok(solution)
    }
}

impl<S: Solution> Algorithm<S> for Vns<S> {
    fn algorithm(&self, instance: &Arc<S::Instance>, rng: &mut RandomStream) -> Result<S> {
        Ok(self.run(instance, rng)?.best)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
