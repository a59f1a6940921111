//! Experiment runner.
//!
//! Runs every algorithm of every [`Experiment`] on every instance for a
//! configured number of repetitions, publishing lifecycle [`Event`]s and
//! collecting an [`ExperimentReport`].
//!
//! [`Event`]: crate::events::Event

mod config;
mod runner;

pub use config::ExperimentConfig;
pub use runner::{
    BestRun, Experiment, ExperimentReport, ExperimentRunner, NamedInstance, RunRecord,
    SolutionExporter,
};
