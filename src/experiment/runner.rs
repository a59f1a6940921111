//! Experiment execution.
//!
//! Every (experiment, instance, algorithm, repetition) combination is an
//! independent run. Run `r` draws its randomness from stream `r` of the
//! configured seed, so results do not depend on execution order or on
//! whether repetitions run in parallel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::config::ExperimentConfig;
use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::events::{Event, EventSink, NoopEventSink};
use crate::random::RandomSource;
use crate::solution::Solution;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A named group of algorithms compared on the same instances.
pub struct Experiment<S: Solution> {
    pub name: String,
    pub algorithms: Vec<Arc<dyn Algorithm<S>>>,
}

impl<S: Solution> Experiment<S> {
    pub fn new(name: impl Into<String>, algorithms: Vec<Arc<dyn Algorithm<S>>>) -> Self {
        Self {
            name: name.into(),
            algorithms,
        }
    }
}

/// A loaded instance and the name it is reported under.
#[derive(Debug)]
pub struct NamedInstance<I> {
    pub name: String,
    pub instance: Arc<I>,
}

impl<I> NamedInstance<I> {
    pub fn new(name: impl Into<String>, instance: Arc<I>) -> Self {
        Self {
            name: name.into(),
            instance,
        }
    }
}

impl<I> Clone for NamedInstance<I> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            instance: Arc::clone(&self.instance),
        }
    }
}

/// Persists the best solution of an (algorithm, instance) pair.
pub trait SolutionExporter<S: Solution>: Send + Sync {
    fn export(&self, experiment: &str, instance: &str, solution: &S) -> Result<()>;
}

/// Outcome of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub experiment: String,
    pub instance: String,
    pub algorithm: String,
    pub repetition: u64,
    /// Score of the returned solution, or the error message.
    pub outcome: std::result::Result<f64, String>,
    pub elapsed: Duration,
}

impl RunRecord {
    pub fn score(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied()
    }
}

/// Best solution of one (algorithm, instance) pair.
#[derive(Debug, Clone)]
pub struct BestRun<S> {
    pub experiment: String,
    pub instance: String,
    pub algorithm: String,
    pub repetition: u64,
    pub solution: S,
}

/// Everything an execution produced.
#[derive(Debug, Clone)]
pub struct ExperimentReport<S> {
    /// One record per run, in (experiment, instance, algorithm,
    /// repetition) order.
    pub records: Vec<RunRecord>,
    /// Best solution per (experiment, instance, algorithm) with at least
    /// one successful run.
    pub best: Vec<BestRun<S>>,
}

impl<S> ExperimentReport<S> {
    /// Records of failed runs.
    pub fn failures(&self) -> impl Iterator<Item = &RunRecord> {
        self.records.iter().filter(|r| r.outcome.is_err())
    }

    /// Best run of `algorithm` on `instance`, over all experiments.
    pub fn best_for(&self, algorithm: &str, instance: &str) -> Option<&BestRun<S>> {
        self.best
            .iter()
            .find(|b| b.algorithm == algorithm && b.instance == instance)
    }
}

type RunOutcome<S> = (Result<S>, Duration);

/// Runs experiments and reports their lifecycle.
pub struct ExperimentRunner<S: Solution> {
    config: ExperimentConfig,
    sink: Arc<dyn EventSink>,
    exporter: Option<Arc<dyn SolutionExporter<S>>>,
}

impl<S: Solution> ExperimentRunner<S> {
    /// Creates a runner with no event sink and no exporter.
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        #[cfg(not(feature = "parallel"))]
        if config.parallel {
            log::warn!("Built without the `parallel` feature, repetitions run sequentially");
        }
        Ok(Self {
            config,
            sink: Arc::new(NoopEventSink),
            exporter: None,
        })
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_exporter(mut self, exporter: Arc<dyn SolutionExporter<S>>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs every experiment on every instance.
    ///
    /// Failed runs are recorded and reported; they never stop the
    /// remaining runs. Export failures are reported the same way.
    pub fn run(
        &self,
        experiments: &[Experiment<S>],
        instances: &[NamedInstance<S::Instance>],
    ) -> ExperimentReport<S> {
        let started = Instant::now();
        self.sink.publish(Event::ExecutionStarted {
            experiments: experiments.iter().map(|e| e.name.clone()).collect(),
        });

        let mut report = ExperimentReport {
            records: Vec::new(),
            best: Vec::new(),
        };
        for experiment in experiments {
            self.run_experiment(experiment, instances, &mut report);
        }

        self.sink.publish(Event::ExecutionEnded {
            elapsed_ms: millis(started.elapsed()),
        });
        report
    }

    fn run_experiment(
        &self,
        experiment: &Experiment<S>,
        instances: &[NamedInstance<S::Instance>],
        report: &mut ExperimentReport<S>,
    ) {
        let started = Instant::now();
        self.sink.publish(Event::ExperimentStarted {
            experiment: experiment.name.clone(),
            instances: instances.iter().map(|i| i.name.clone()).collect(),
        });

        for instance in instances {
            for algorithm in &experiment.algorithms {
                let outcomes = self.repetitions(algorithm.as_ref(), &instance.instance);
                let mut best: Option<(u64, S)> = None;

                for (repetition, (result, elapsed)) in (0u64..).zip(outcomes) {
                    let outcome = match result {
                        Ok(solution) => {
                            let score = solution.score();
                            self.sink.publish(Event::SolutionGenerated {
                                experiment: experiment.name.clone(),
                                instance: instance.name.clone(),
                                algorithm: algorithm.name().to_string(),
                                repetition,
                                score,
                                elapsed_ms: millis(elapsed),
                            });
                            // Ties keep the earliest repetition.
                            best = match best {
                                Some((r, current)) if !solution.is_better_than(&current) => {
                                    Some((r, current))
                                }
                                _ => Some((repetition, solution)),
                            };
                            Ok(score)
                        }
                        Err(e) => {
                            log::warn!(
                                "{} on {} (repetition {}) failed: {}",
                                algorithm.name(),
                                instance.name,
                                repetition,
                                e
                            );
                            let message = e.to_string();
                            self.publish_error(
                                experiment,
                                instance,
                                algorithm.name(),
                                repetition,
                                &message,
                            );
                            Err(message)
                        }
                    };
                    report.records.push(RunRecord {
                        experiment: experiment.name.clone(),
                        instance: instance.name.clone(),
                        algorithm: algorithm.name().to_string(),
                        repetition,
                        outcome,
                        elapsed,
                    });
                }

                if let Some((repetition, solution)) = best {
                    if let Some(exporter) = &self.exporter {
                        if let Err(e) =
                            exporter.export(&experiment.name, &instance.name, &solution)
                        {
                            log::warn!(
                                "Export of {} on {} failed: {}",
                                algorithm.name(),
                                instance.name,
                                e
                            );
                            self.publish_error(
                                experiment,
                                instance,
                                algorithm.name(),
                                repetition,
                                &e.to_string(),
                            );
                        }
                    }
                    report.best.push(BestRun {
                        experiment: experiment.name.clone(),
                        instance: instance.name.clone(),
                        algorithm: algorithm.name().to_string(),
                        repetition,
                        solution,
                    });
                }
            }
        }

        self.sink.publish(Event::ExperimentEnded {
            experiment: experiment.name.clone(),
            elapsed_ms: millis(started.elapsed()),
        });
    }

    fn repetitions(
        &self,
        algorithm: &dyn Algorithm<S>,
        instance: &Arc<S::Instance>,
    ) -> Vec<RunOutcome<S>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return (0..self.config.repetitions)
                .into_par_iter()
                .map(|r| self.run_once(algorithm, instance, r))
                .collect();
        }
        (0..self.config.repetitions)
            .map(|r| self.run_once(algorithm, instance, r))
            .collect()
    }

    fn run_once(
        &self,
        algorithm: &dyn Algorithm<S>,
        instance: &Arc<S::Instance>,
        repetition: u64,
    ) -> RunOutcome<S> {
        let mut rng = RandomSource::new(self.config.seed).stream(repetition);
        let started = Instant::now();
        let result = algorithm.algorithm(instance, &mut rng);
        (result, started.elapsed())
    }

    fn publish_error(
        &self,
        experiment: &Experiment<S>,
        instance: &NamedInstance<S::Instance>,
        algorithm: &str,
        repetition: u64,
        message: &str,
    ) {
        self.sink.publish(Event::Error {
            experiment: experiment.name.clone(),
            instance: instance.name.clone(),
            algorithm: algorithm.to_string(),
            repetition,
            message: message.to_string(),
        });
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
