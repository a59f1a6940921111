//! Automatic configuration boundary.
//!
//! An external parameter tuner proposes configurations as a line of
//! whitespace-separated `key=value` pairs (already decoded from its
//! transport encoding). [`TrialRunner`] turns one such line into a
//! score: it loads the instance named by the `instance` key, asks an
//! [`AlgorithmGenerator`] for the algorithm, runs it once and returns
//! the score. Tuners only minimize, so scores of maximization problems
//! are negated.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use crate::algorithm::Algorithm;
use crate::error::{Error, Result};
use crate::random::RandomSource;
use crate::solution::Solution;

/// Key naming the instance to solve.
pub const INSTANCE_KEY: &str = "instance";

/// Optional key overriding the runner's seed.
pub const SEED_KEY: &str = "seed";

/// Loads an instance from disk.
pub trait InstanceLoader<I>: Send + Sync {
    fn load_instance(&self, path: &Path) -> Result<I>;
}

/// Builds an algorithm from a proposed configuration.
pub trait AlgorithmGenerator<S: Solution>: Send + Sync {
    fn build_algorithm(&self, config: &TrialConfig) -> Result<Box<dyn Algorithm<S>>>;
}

/// Parameters of one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialConfig {
    params: BTreeMap<String, String>,
}

impl TrialConfig {
    /// Parses `key=value` pairs separated by whitespace.
    ///
    /// Values may contain `=`; everything after the first one belongs to
    /// the value. Fails on a token without `=` or with an empty key, on a
    /// repeated key, and when the `instance` key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_vns::autoconfig::TrialConfig;
    ///
    /// let config = TrialConfig::parse("instance=data/a.txt ks=3 ratio=2").unwrap();
    /// assert_eq!(config.instance(), "data/a.txt");
    /// assert_eq!(config.get::<usize>("ratio").unwrap(), Some(2));
    /// assert!(TrialConfig::parse("ks=3").is_err());
    /// ```
    pub fn parse(decoded: &str) -> Result<Self> {
        let mut params = BTreeMap::new();
        for token in decoded.split_whitespace() {
            let (key, value) = token
                .split_once('=')
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| Error::MalformedParameter(token.to_string()))?;
            if params.insert(key.to_string(), value.to_string()).is_some() {
                return Err(Error::DuplicateKey(key.to_string()));
            }
        }
        if !params.contains_key(INSTANCE_KEY) {
            return Err(Error::MissingKey(INSTANCE_KEY.to_string()));
        }
        Ok(Self { params })
    }

    /// Path of the instance to solve.
    pub fn instance(&self) -> &str {
        self.params
            .get(INSTANCE_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Raw value of `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Typed value of `key`, `None` if absent.
    pub fn get<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        self.raw(key)
            .map(|value| {
                value.parse().map_err(|_| Error::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            })
            .transpose()
    }

    /// Typed value of `key`, failing if absent.
    pub fn require<T: FromStr>(&self, key: &str) -> Result<T> {
        self.get(key)?
            .ok_or_else(|| Error::MissingKey(key.to_string()))
    }

    /// All parameters, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Evaluates trials proposed by an external tuner.
pub struct TrialRunner<S: Solution> {
    loader: Box<dyn InstanceLoader<S::Instance>>,
    generator: Box<dyn AlgorithmGenerator<S>>,
    seed: u64,
    integration_key: Option<String>,
}

impl<S: Solution> TrialRunner<S> {
    pub fn new(
        loader: Box<dyn InstanceLoader<S::Instance>>,
        generator: Box<dyn AlgorithmGenerator<S>>,
    ) -> Self {
        Self {
            loader,
            generator,
            seed: 0,
            integration_key: None,
        }
    }

    /// Seed used when the trial has no `seed` key.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Key every request must present to [`TrialRunner::run_request`].
    pub fn with_integration_key(mut self, key: impl Into<String>) -> Self {
        self.integration_key = Some(key.into());
        self
    }

    /// Checks the request key, then runs the trial.
    pub fn run_request(&self, key: &str, decoded: &str) -> Result<f64> {
        if let Some(expected) = &self.integration_key {
            if expected != key {
                return Err(Error::InvalidConfig("invalid integration key".into()));
            }
        }
        self.run_trial(decoded)
    }

    /// Runs one trial and returns its score, negated for maximization.
    pub fn run_trial(&self, decoded: &str) -> Result<f64> {
        let config = TrialConfig::parse(decoded)?;
        self.run_config(&config)
    }

    /// Runs an already parsed trial.
    pub fn run_config(&self, config: &TrialConfig) -> Result<f64> {
        let instance = Arc::new(self.loader.load_instance(Path::new(config.instance()))?);
        let algorithm = self.generator.build_algorithm(config)?;
        let seed = config.get(SEED_KEY)?.unwrap_or(self.seed);
        let mut rng = RandomSource::new(seed).stream(0);

        let started = Instant::now();
        let solution = algorithm.algorithm(&instance, &mut rng)?;
        let score = solution.score();
        log::debug!(
            "Trial {} on {}: {} in {:.3}s",
            algorithm.name(),
            config.instance(),
            score,
            started.elapsed().as_secs_f64()
        );

        if S::comparator().is_maximizing() {
            Ok(-score)
        } else {
            Ok(score)
        }
    }
}
