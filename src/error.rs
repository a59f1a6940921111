//! Error types for the search engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or running a search.
///
/// Configuration errors are raised at construction time and are fatal
/// to the run. Absence of moves is never an error: neighborhoods signal
/// it with `None`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("strength list must contain at least one value")]
    EmptyStrengths,

    #[error("{0} requires at least one neighborhood")]
    NoNeighborhoods(&'static str),

    #[error("VNS requires at least one shake")]
    NoShakes,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("duplicated key: {0}")]
    DuplicateKey(String),

    #[error("missing required key: {0}")]
    MissingKey(String),

    #[error("malformed parameter `{0}`, expected key=value")]
    MalformedParameter(String),

    #[error("invalid value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },

    #[error("termination check failed: {0}")]
    Termination(String),

    #[error("failed to load instance {path}: {reason}")]
    InstanceLoad { path: PathBuf, reason: String },

    #[error("solution export failed: {0}")]
    Export(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
