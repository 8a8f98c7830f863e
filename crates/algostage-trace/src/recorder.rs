//! Append-only recorder for run traces.

use crate::step::{Step, StepAction, Value};

/// Append-only sink for the steps of a single run.
///
/// Ordinals are assigned here, contiguously from 1, so a trace can never
/// hold a gap. The recorder also tracks the most recently highlighted
/// indices for rendering; they always mirror the latest step.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    steps: Vec<Step>,
    current_indices: Vec<usize>,
}

impl TraceRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step and return its assigned ordinal.
    ///
    /// # Panics
    ///
    /// Panics when `indices` is empty, holds more than three entries, or
    /// does not pair one value per index.
    pub fn record(&mut self, action: StepAction, indices: Vec<usize>, values: Vec<Value>) -> u64 {
        assert!(
            !indices.is_empty() && indices.len() <= 3,
            "a step highlights one to three indices, got {}",
            indices.len()
        );
        assert_eq!(
            indices.len(),
            values.len(),
            "step values must pair one per index"
        );

        let ordinal = self.steps.len() as u64 + 1;
        self.current_indices = indices.clone();
        self.steps.push(Step {
            ordinal,
            action,
            indices,
            values,
        });
        ordinal
    }

    /// All recorded steps, in emission order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The most recently recorded step, if any.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Indices highlighted by the latest step (empty before the first).
    pub fn current_indices(&self) -> &[usize] {
        &self.current_indices
    }

    /// Steps recorded after the given ordinal, for incremental fetches.
    ///
    /// `steps_since(0)` returns the whole trace.
    pub fn steps_since(&self, ordinal: u64) -> &[Step] {
        let start = (ordinal as usize).min(self.steps.len());
        &self.steps[start..]
    }

    /// Discard all steps and highlights, restarting ordinals at 1.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.current_indices.clear();
    }
}
