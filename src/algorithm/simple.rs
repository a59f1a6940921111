//! Construct once, then improve once.
//!
//! The minimal orchestrator: no perturbation, a single pass over the
//! configured improvers. Useful to check that the components work
//! together and as a baseline for richer algorithms.

use std::sync::Arc;

use super::types::{improve_all, Algorithm, Constructive, SolutionBuilder};
use crate::error::Result;
use crate::improve::Improver;
use crate::random::RandomStream;
use crate::solution::Solution;

/// Builder → constructive → each improver once.
pub struct SimpleAlgorithm<S: Solution> {
    builder: Box<dyn SolutionBuilder<S>>,
    constructive: Box<dyn Constructive<S>>,
    improvers: Vec<Box<dyn Improver<S>>>,
    name: String,
}

impl<S: Solution> SimpleAlgorithm<S> {
    /// Creates the algorithm. `improvers` may be empty.
    pub fn new(
        builder: Box<dyn SolutionBuilder<S>>,
        constructive: Box<dyn Constructive<S>>,
        improvers: Vec<Box<dyn Improver<S>>>,
    ) -> Self {
        Self {
            builder,
            constructive,
            improvers,
            name: "Simple".to_string(),
        }
    }

    /// Sets the name used in reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<S: Solution> Algorithm<S> for SimpleAlgorithm<S> {
    fn algorithm(&self, instance: &Arc<S::Instance>, rng: &mut RandomStream) -> Result<S> {
        let solution = self.builder.initialize_solution(instance);
        let solution = self.constructive.construct(solution, rng);
        log::debug!("{}: constructive {}", self.name, solution.score());
        let solution = improve_all(&self.improvers, solution);
        log::debug!("{}: improved {}", self.name, solution.score());
        Ok(solution)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
