//! Domain-agnostic neighborhood search engine.
//!
//! Provides the building blocks of trajectory metaheuristics over
//! caller-supplied instance, solution and move types:
//!
//! - **Moves and neighborhoods**: eager (materialized) and lazy
//!   (successor-chained) move generation behind one [`Neighborhood`]
//!   interface.
//! - **Local search**: best- and first-improvement descent to a local
//!   optimum with epsilon-aware score comparison.
//! - **Shake and repair**: randomized perturbation of strength `k`
//!   followed by a feasibility repair step.
//! - **Variable Neighborhood Search (VNS)**: escalates the shake
//!   strength while no improvement is found and resets it on every
//!   improvement, restarting from new constructions until the
//!   termination predicate fires.
//! - **Experiments**: repeated, seeded runs with lifecycle events, and
//!   a trial boundary for external parameter tuners.
//!
//! # Architecture
//!
//! The engine contains no domain concepts. Problems implement
//! [`Solution`], [`Move`] and one of the neighborhood traits; the engine
//! drives them. All randomness flows from a [`RandomSource`] seed, so a
//! run is reproducible given the seed and the termination budget.
//!
//! [`Neighborhood`]: neighborhood::Neighborhood
//! [`Solution`]: solution::Solution
//! [`Move`]: neighborhood::Move
//! [`RandomSource`]: random::RandomSource

pub mod algorithm;
pub mod autoconfig;
pub mod compare;
pub mod error;
pub mod events;
pub mod experiment;
pub mod improve;
pub mod neighborhood;
pub mod random;
pub mod shake;
pub mod solution;
pub mod termination;
pub mod vns;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
