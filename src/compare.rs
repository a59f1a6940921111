//! Tolerance-aware score comparison.
//!
//! All score comparisons in the engine (move improvement, best-move
//! selection, solution acceptance) go through a single
//! [`ScoreComparator`], so they agree on what counts as an improvement.
//! Two scores within `epsilon` of each other are equal.

use std::cmp::Ordering;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default tolerance below which score differences are treated as noise.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Objective {
    /// Lower scores are better.
    #[default]
    Minimize,
    /// Higher scores are better.
    Maximize,
}

/// Compares scores under an optimization direction and a tolerance.
///
/// # Examples
///
/// ```
/// use u_vns::compare::{Objective, ScoreComparator};
///
/// let cmp = ScoreComparator::new(Objective::Minimize).with_epsilon(1e-3);
/// assert!(cmp.is_better(1.0, 2.0));
/// assert!(!cmp.is_better(1.0, 1.0005));
/// assert!(cmp.improves(-0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreComparator {
    /// Optimization direction.
    pub objective: Objective,
    /// Largest difference still considered equal.
    pub epsilon: f64,
}

impl Default for ScoreComparator {
    fn default() -> Self {
        Self {
            objective: Objective::Minimize,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl ScoreComparator {
    /// Comparator for the given direction with the default tolerance.
    pub const fn new(objective: Objective) -> Self {
        Self {
            objective,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Comparator for minimization problems.
    pub const fn minimize() -> Self {
        Self::new(Objective::Minimize)
    }

    /// Comparator for maximization problems.
    pub const fn maximize() -> Self {
        Self::new(Objective::Maximize)
    }

    /// Sets the tolerance.
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Whether higher scores are better.
    pub fn is_maximizing(&self) -> bool {
        self.objective == Objective::Maximize
    }

    /// `true` if `a` is strictly better than `b` beyond the tolerance.
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        match self.objective {
            Objective::Minimize => a < b - self.epsilon,
            Objective::Maximize => a > b + self.epsilon,
        }
    }

    /// `true` if `a` and `b` differ by at most the tolerance.
    pub fn is_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }

    /// Orders two scores; `Greater` means `a` is better than `b`.
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        if self.is_better(a, b) {
            Ordering::Greater
        } else if self.is_better(b, a) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// `true` if applying a score change of `delta` beats doing nothing.
    pub fn improves(&self, delta: f64) -> bool {
        self.is_better(delta, 0.0)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
