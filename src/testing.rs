//! Test fixtures: an integer line problem.
//!
//! A solution is a position `x` on `0..len`; its score is
//! `values[x]`, minimized.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::algorithm::{Constructive, SolutionBuilder};
use crate::error::{Error, Result};
use crate::neighborhood::{EagerNeighborhood, LazyMove, LazyNeighborhood, Move, Neighborhood};
use crate::random::RandomStream;
use crate::shake::Repair;
use crate::solution::Solution;
use crate::termination::{Termination, TerminationConfig};

#[derive(Debug)]
pub struct LineInstance {
    pub values: Vec<f64>,
}

impl LineInstance {
    pub fn new(values: Vec<f64>) -> Arc<Self> {
        Arc::new(Self { values })
    }

    /// `values[x] = x`: single minimum at 0.
    pub fn linear(len: usize) -> Arc<Self> {
        Self::new((0..len).map(|x| x as f64).collect())
    }

    /// Positions 0..=100, `values[x] = x % 10 + 2 * (x / 10)`.
    ///
    /// Every multiple of 10 is a local minimum for ±1 steps; the global
    /// minimum is 0.
    pub fn valleys() -> Arc<Self> {
        Self::new((0..=100).map(|x| (x % 10 + 2 * (x / 10)) as f64).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[derive(Debug, Clone)]
pub struct LineSolution {
    pub instance: Arc<LineInstance>,
    pub x: usize,
    pub termination: Termination,
    pub stop_calls: Arc<AtomicUsize>,
    pub fail_stop: bool,
}

impl Solution for LineSolution {
    type Instance = LineInstance;

    fn instance(&self) -> &LineInstance {
        &self.instance
    }

    fn score(&self) -> f64 {
        self.instance.values[self.x]
    }

    fn stop(&self) -> Result<bool> {
        self.stop_calls.fetch_add(1, Ordering::Relaxed);
        if self.fail_stop {
            return Err(Error::Termination("clock unavailable".into()));
        }
        Ok(self.termination.should_stop())
    }
}

/// Solution at `x` with an unbounded budget.
pub fn line_solution(instance: Arc<LineInstance>, x: usize) -> LineSolution {
    LineSolution {
        instance,
        x,
        termination: Termination::start(&TerminationConfig::default()),
        stop_calls: Arc::new(AtomicUsize::new(0)),
        fail_stop: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMove {
    pub to: usize,
    pub delta: f64,
}

impl LineMove {
    pub fn to(solution: &LineSolution, to: usize) -> Self {
        Self {
            to,
            delta: solution.instance.values[to] - solution.score(),
        }
    }
}

impl Move<LineSolution> for LineMove {
    fn is_valid(&self, solution: &LineSolution) -> bool {
        self.to < solution.instance.len()
    }

    fn score_change(&self) -> f64 {
        self.delta
    }

    fn execute(self, solution: &mut LineSolution) {
        solution.x = self.to;
    }
}

impl LazyMove<LineSolution> for LineMove {
    /// Next target in ascending order, skipping the current position.
    fn next(&self, solution: &LineSolution) -> Option<Self> {
        let mut to = self.to + 1;
        if to == solution.x {
            to += 1;
        }
        (to < solution.instance.len()).then(|| LineMove::to(solution, to))
    }
}

/// ±1 steps, left first.
#[derive(Debug, Clone, Copy)]
pub struct StepNeighborhood;

impl EagerNeighborhood<LineSolution, LineMove> for StepNeighborhood {
    fn moves(&self, s: &LineSolution) -> Vec<LineMove> {
        let mut moves = Vec::with_capacity(2);
        if s.x > 0 {
            moves.push(LineMove::to(s, s.x - 1));
        }
        if s.x + 1 < s.instance.len() {
            moves.push(LineMove::to(s, s.x + 1));
        }
        moves
    }
}

/// Every other position, ascending, generated lazily.
#[derive(Debug, Clone, Copy)]
pub struct JumpNeighborhood;

impl LazyNeighborhood<LineSolution, LineMove> for JumpNeighborhood {
    fn first_move(&self, s: &LineSolution) -> Option<LineMove> {
        let to = usize::from(s.x == 0);
        (to < s.instance.len()).then(|| LineMove::to(s, to))
    }
}

/// Every other position, descending.
#[derive(Debug, Clone, Copy)]
pub struct ReverseJumpNeighborhood;

impl EagerNeighborhood<LineSolution, LineMove> for ReverseJumpNeighborhood {
    fn moves(&self, s: &LineSolution) -> Vec<LineMove> {
        (0..s.instance.len())
            .rev()
            .filter(|&to| to != s.x)
            .map(|to| LineMove::to(s, to))
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EmptyNeighborhood;

impl EagerNeighborhood<LineSolution, LineMove> for EmptyNeighborhood {
    fn moves(&self, _s: &LineSolution) -> Vec<LineMove> {
        Vec::new()
    }
}

/// ±1 steps plus a very attractive move past the end of the line.
#[derive(Debug, Clone, Copy)]
pub struct OutOfRangeNeighborhood;

impl EagerNeighborhood<LineSolution, LineMove> for OutOfRangeNeighborhood {
    fn moves(&self, s: &LineSolution) -> Vec<LineMove> {
        let mut moves = vec![LineMove {
            to: s.instance.len(),
            delta: -1000.0,
        }];
        moves.extend(StepNeighborhood.moves(s));
        moves
    }
}

/// Random ±1 steps, at most `limit` of them over its lifetime.
#[derive(Debug, Clone)]
pub struct LimitedNeighborhood {
    remaining: Arc<AtomicUsize>,
    issued: Arc<AtomicUsize>,
}

impl LimitedNeighborhood {
    pub fn new(limit: usize) -> Self {
        Self {
            remaining: Arc::new(AtomicUsize::new(limit)),
            issued: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::Relaxed)
    }
}

impl Neighborhood<LineSolution, LineMove> for LimitedNeighborhood {
    fn stream<'a>(&'a self, s: &'a LineSolution) -> Box<dyn Iterator<Item = LineMove> + 'a>
    where
        LineMove: 'a,
    {
        Box::new(StepNeighborhood.moves(s).into_iter())
    }

    fn random_move(&self, s: &LineSolution, rng: &mut RandomStream) -> Option<LineMove> {
        let taken = self
            .remaining
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |r| r.checked_sub(1));
        if taken.is_err() {
            return None;
        }
        let mut moves = StepNeighborhood.moves(s);
        let i = rng.index(moves.len())?;
        self.issued.fetch_add(1, Ordering::Relaxed);
        Some(moves.swap_remove(i))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CountingRepair {
    pub calls: Arc<AtomicUsize>,
}

impl Repair<LineSolution> for CountingRepair {
    fn repair(&self, _solution: &mut LineSolution) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        true
    }
}

/// Builds solutions at a fixed start, each with a fresh budget.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    pub start: usize,
    pub termination: TerminationConfig,
    pub constructions: Arc<AtomicUsize>,
    pub stop_calls: Arc<AtomicUsize>,
    pub fail_stop: bool,
}

impl LineBuilder {
    pub fn new(start: usize) -> Self {
        Self {
            start,
            termination: TerminationConfig::default(),
            constructions: Arc::new(AtomicUsize::new(0)),
            stop_calls: Arc::new(AtomicUsize::new(0)),
            fail_stop: false,
        }
    }

    pub fn with_termination(mut self, termination: TerminationConfig) -> Self {
        self.termination = termination;
        self
    }

    pub fn failing_stop(mut self) -> Self {
        self.fail_stop = true;
        self
    }

    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }

    pub fn stop_calls(&self) -> usize {
        self.stop_calls.load(Ordering::Relaxed)
    }
}

impl SolutionBuilder<LineSolution> for LineBuilder {
    fn initialize_solution(&self, instance: &Arc<LineInstance>) -> LineSolution {
        self.constructions.fetch_add(1, Ordering::Relaxed);
        LineSolution {
            instance: instance.clone(),
            x: self.start.min(instance.len().saturating_sub(1)),
            termination: Termination::start(&self.termination),
            stop_calls: self.stop_calls.clone(),
            fail_stop: self.fail_stop,
        }
    }
}

/// Moves to a uniformly random position.
#[derive(Debug, Clone, Copy)]
pub struct RandomStart;

impl Constructive<LineSolution> for RandomStart {
    fn construct(&self, mut solution: LineSolution, rng: &mut RandomStream) -> LineSolution {
        if let Some(x) = rng.index(solution.instance.len()) {
            solution.x = x;
        }
        solution
    }
}

/// Keeps the builder's start position.
#[derive(Debug, Clone, Copy)]
pub struct KeepStart;

impl Constructive<LineSolution> for KeepStart {
    fn construct(&self, solution: LineSolution, _rng: &mut RandomStream) -> LineSolution {
        solution
    }
}
