//! Experiment runner configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for an [`ExperimentRunner`](super::ExperimentRunner).
///
/// # Examples
///
/// ```
/// use u_vns::experiment::ExperimentConfig;
///
/// let config = ExperimentConfig::default()
///     .with_repetitions(10)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(config.clone().with_repetitions(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExperimentConfig {
    /// Runs per (algorithm, instance) pair.
    pub repetitions: u64,

    /// Seed shared by every run; run `r` uses stream `r` of this seed.
    pub seed: u64,

    /// Whether to run repetitions in parallel using rayon.
    ///
    /// Requires the `parallel` feature; ignored otherwise.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            repetitions: 1,
            seed: 0,
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    pub fn with_repetitions(mut self, n: u64) -> Self {
        self.repetitions = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(Error::InvalidConfig(
                "repetitions must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
