//! Shared observable state of a run.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::recorder::TraceRecorder;
use crate::step::{TerminalResult, Value};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// No run in flight; dataset and controls may change freely
    Idle,
    /// A run task is executing and emitting steps
    Running,
    /// The last run finished and published its result
    Completed,
}

impl Default for RunStatus {
    fn default() -> Self {
        RunStatus::Idle
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunStatus::Idle => "idle",
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// The single shared object observers read while a run executes.
///
/// Held behind a `tokio::sync::RwLock` by the controller; the run task
/// mutates it only under short-lived write guards, so a reader never sees
/// a half-applied step.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub status: RunStatus,
    /// Working copy of the dataset, mirrored after each mutating step.
    pub dataset: Vec<Value>,
    pub trace: TraceRecorder,
    pub result: Option<TerminalResult>,
}

impl RunState {
    /// Create an idle state over the given dataset.
    pub fn new(dataset: Vec<Value>) -> Self {
        Self {
            dataset,
            ..Self::default()
        }
    }

    /// Whether a run task is currently executing.
    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    /// Drop trace, highlights, and result, returning to `Idle`.
    ///
    /// The dataset keeps whatever contents it holds, including partial
    /// mutations left by an interrupted sort.
    pub fn reset(&mut self) {
        self.status = RunStatus::Idle;
        self.trace.clear();
        self.result = None;
    }

    /// Replace the dataset and clear any previous run's outputs.
    pub fn replace_dataset(&mut self, dataset: Vec<Value>) {
        self.reset();
        self.dataset = dataset;
    }
}
