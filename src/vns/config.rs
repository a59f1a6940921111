//! Variable Neighborhood Search configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for Variable Neighborhood Search.
///
/// # Examples
///
/// ```
/// use u_vns::vns::VnsConfig;
///
/// let config = VnsConfig::new([4, 1, 2]);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.max_k(), Some(4));
/// assert!(VnsConfig::new(Vec::new()).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VnsConfig {
    /// Shake strengths, tried from smallest to largest. Sorted when the
    /// algorithm is built; duplicates are allowed.
    pub ks: Vec<usize>,
}

impl Default for VnsConfig {
    fn default() -> Self {
        Self { ks: vec![1, 2, 3] }
    }
}

impl VnsConfig {
    /// Creates a configuration with the given strengths.
    pub fn new(ks: impl Into<Vec<usize>>) -> Self {
        Self { ks: ks.into() }
    }

    /// Sets the shake strengths.
    pub fn with_strengths(mut self, ks: impl Into<Vec<usize>>) -> Self {
        self.ks = ks.into();
        self
    }

    /// Largest configured strength.
    pub fn max_k(&self) -> Option<usize> {
        self.ks.iter().copied().max()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.ks.is_empty() {
            return Err(Error::EmptyStrengths);
        }
        Ok(())
    }
}
