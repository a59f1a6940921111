//! Time and iteration budgets for cooperative cancellation.
//!
//! Solutions usually embed a [`Termination`] and delegate
//! [`Solution::stop`](crate::solution::Solution::stop) to
//! [`Termination::should_stop`]. Clones share the budget they were
//! cloned from; [`Termination::start`] opens a fresh one.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Budget configuration, fixed once per run.
///
/// # Examples
///
/// ```
/// use u_vns::termination::TerminationConfig;
///
/// let config = TerminationConfig::default()
///     .with_time_limit(5_000)
///     .with_max_checks(1_000);
/// assert_eq!(config.time_limit_ms, 5_000);
/// assert_eq!(config.max_checks, 1_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminationConfig {
    /// Maximum wall-clock time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,
    /// Maximum number of termination checks (0 = unlimited).
    pub max_checks: u64,
}

impl TerminationConfig {
    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the maximum number of termination checks.
    pub fn with_max_checks(mut self, n: u64) -> Self {
        self.max_checks = n;
        self
    }

    /// Whether neither a time nor a check limit is configured.
    ///
    /// An unbounded budget only ends through a cancellation flag.
    pub fn is_unbounded(&self) -> bool {
        self.time_limit_ms == 0 && self.max_checks == 0
    }
}

/// Running budget: clock, check counter and optional cancel flag.
#[derive(Debug, Clone)]
pub struct Termination {
    started: Instant,
    time_limit: Option<Duration>,
    max_checks: Option<u64>,
    checks: Arc<AtomicU64>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Termination {
    /// Starts a new budget now.
    pub fn start(config: &TerminationConfig) -> Self {
        Self {
            started: Instant::now(),
            time_limit: (config.time_limit_ms > 0)
                .then(|| Duration::from_millis(config.time_limit_ms)),
            max_checks: (config.max_checks > 0).then_some(config.max_checks),
            checks: Arc::new(AtomicU64::new(0)),
            cancel: None,
        }
    }

    /// Attaches an external cancellation flag.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Counts one check and evaluates every limit afresh.
    pub fn should_stop(&self) -> bool {
        let checks = self.checks.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        if let Some(max) = self.max_checks {
            if checks >= max {
                return true;
            }
        }
        if let Some(limit) = self.time_limit {
            if self.started.elapsed() >= limit {
                return true;
            }
        }
        false
    }

    /// Number of checks performed against this budget so far.
    pub fn checks(&self) -> u64 {
        self.checks.load(Ordering::Relaxed)
    }

    /// Time elapsed since the budget started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
