//! Variable Neighborhood Search (VNS).
//!
//! A single-solution metaheuristic that systematically changes the
//! perturbation strength during the search. At each step, every shake
//! perturbs a copy of the current solution with strength `k` and the
//! copy is improved. If improvement is found, the search resets to the
//! smallest strength; otherwise, it moves to the next (larger) one.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;

pub use config::VnsConfig;
pub use runner::{Vns, VnsResult, VnsRound};
