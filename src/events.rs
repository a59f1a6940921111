//! Lifecycle events.
//!
//! The experiment runner publishes an [`Event`] at every lifecycle
//! boundary through an [`EventSink`]. Sinks must be cheap and must not
//! fail: an event that cannot be delivered is dropped.

use std::fmt;
use std::sync::{Mutex, PoisonError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Something that happened during an execution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    /// A batch of experiments is about to run.
    ExecutionStarted { experiments: Vec<String> },
    /// Every experiment of the batch has finished.
    ExecutionEnded { elapsed_ms: u64 },
    /// An experiment is about to run over the given instances.
    ExperimentStarted {
        experiment: String,
        instances: Vec<String>,
    },
    /// An experiment has finished.
    ExperimentEnded { experiment: String, elapsed_ms: u64 },
    /// One run produced a solution.
    SolutionGenerated {
        experiment: String,
        instance: String,
        algorithm: String,
        repetition: u64,
        score: f64,
        elapsed_ms: u64,
    },
    /// One run failed.
    Error {
        experiment: String,
        instance: String,
        algorithm: String,
        repetition: u64,
        message: String,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::ExecutionStarted { experiments } => {
                write!(f, "execution started: {}", experiments.join(", "))
            }
            Event::ExecutionEnded { elapsed_ms } => {
                write!(f, "execution ended after {} ms", elapsed_ms)
            }
            Event::ExperimentStarted {
                experiment,
                instances,
            } => write!(
                f,
                "experiment {} started on {} instances",
                experiment,
                instances.len()
            ),
            Event::ExperimentEnded {
                experiment,
                elapsed_ms,
            } => write!(f, "experiment {} ended after {} ms", experiment, elapsed_ms),
            Event::SolutionGenerated {
                experiment,
                instance,
                algorithm,
                repetition,
                score,
                elapsed_ms,
            } => write!(
                f,
                "{}/{}/{} #{}: score {} in {} ms",
                experiment, instance, algorithm, repetition, score, elapsed_ms
            ),
            Event::Error {
                experiment,
                instance,
                algorithm,
                repetition,
                message,
            } => write!(
                f,
                "{}/{}/{} #{} failed: {}",
                experiment, instance, algorithm, repetition, message
            ),
        }
    }
}

/// Receiver of lifecycle events.
pub trait EventSink: Send + Sync {
    /// Delivers one event.
    fn publish(&self, event: Event);
}

impl fmt::Debug for dyn EventSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventSink")
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn publish(&self, _event: Event) {}
}

/// Writes events to the `log` facade.
///
/// Failures go to `error`, per-run results to `debug`, everything else
/// to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn publish(&self, event: Event) {
        match event {
            Event::Error { .. } => log::error!("{}", event),
            Event::SolutionGenerated { .. } => log::debug!("{}", event),
            _ => log::info!("{}", event),
        }
    }
}

/// An event with its position in the store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredEvent {
    pub id: u64,
    pub event: Event,
}

/// Keeps every published event in memory, numbered from 0.
#[derive(Debug, Default)]
pub struct MemoryEventStorage {
    events: Mutex<Vec<StoredEvent>>,
}

impl MemoryEventStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events with `id >= from`, in publication order.
    pub fn events_since(&self, from: u64) -> Vec<StoredEvent> {
        let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        let start = usize::try_from(from).unwrap_or(usize::MAX).min(events.len());
        events[start..].to_vec()
    }

    /// Most recent event.
    pub fn last(&self) -> Option<StoredEvent> {
        let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        events.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemoryEventStorage {
    fn publish(&self, event: Event) {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        let id = events.len() as u64;
        events.push(StoredEvent { id, event });
    }
}
