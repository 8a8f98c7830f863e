//! Execution context handed to a running algorithm.

use tokio::sync::{Notify, RwLock};

use crate::pacing::{Cancelled, Pacer};
use crate::state::RunState;
use crate::step::{StepAction, Value};

/// Working view of a single run.
///
/// The context owns the run's working copy of the dataset, so algorithm
/// code reads and writes it like a plain slice between steps. `emit`
/// publishes each step into the shared [`RunState`] under a short write
/// guard (step appended, dataset mirrored, highlights updated) before
/// waking observers, and `pace` suspends for the inter-step delay.
pub struct StepContext<'a> {
    data: Vec<Value>,
    state: &'a RwLock<RunState>,
    changed: &'a Notify,
    pacer: Pacer,
}

impl<'a> StepContext<'a> {
    /// Create a context over the run's working copy.
    pub fn new(
        data: Vec<Value>,
        state: &'a RwLock<RunState>,
        changed: &'a Notify,
        pacer: Pacer,
    ) -> Self {
        Self {
            data,
            state,
            changed,
            pacer,
        }
    }

    /// The working copy.
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Mutable access to the working copy.
    pub fn data_mut(&mut self) -> &mut Vec<Value> {
        &mut self.data
    }

    /// Number of elements in the working copy.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the working copy is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Give back the working copy when the run ends.
    pub fn into_data(self) -> Vec<Value> {
        self.data
    }

    /// Emit a step whose values are read from the working copy.
    ///
    /// Values are captured at emission time, so a step emitted after an
    /// exchange carries the post-exchange values.
    pub async fn emit(&mut self, action: StepAction, indices: &[usize]) -> Result<(), Cancelled> {
        let values: Vec<Value> = indices.iter().map(|&i| self.data[i]).collect();
        self.emit_with(action, indices, values).await
    }

    /// Emit a step with explicitly supplied values.
    ///
    /// Merge comparisons use this: their candidates live in a scratch
    /// buffer and one of the compared array slots may already hold a
    /// written-back element.
    pub async fn emit_with(
        &mut self,
        action: StepAction,
        indices: &[usize],
        values: Vec<Value>,
    ) -> Result<(), Cancelled> {
        {
            let mut state = self.state.write().await;
            // Checked under the same lock `reset` holds while clearing, so
            // a cancelled run can never append to a cleared trace.
            if self.pacer.is_cancelled() {
                return Err(Cancelled);
            }
            state.trace.record(action, indices.to_vec(), values);
            state.dataset.clear();
            state.dataset.extend_from_slice(&self.data);
        }
        self.changed.notify_waiters();
        Ok(())
    }

    /// Suspend until the next step is due.
    pub async fn pace(&self) -> Result<(), Cancelled> {
        self.pacer.suspend().await
    }

    /// Whether this run's cancellation token has been tripped.
    pub fn is_cancelled(&self) -> bool {
        self.pacer.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU64;
    use std::sync::Arc;

    fn fixture(data: Vec<Value>) -> (RwLock<RunState>, Notify, Pacer) {
        let state = RwLock::new(RunState::new(data.clone()));
        let changed = Notify::new();
        let pacer = Pacer::new(Arc::new(AtomicU64::new(0)));
        (state, changed, pacer)
    }

    #[tokio::test]
    async fn emit_records_and_mirrors() {
        let (state, changed, pacer) = fixture(vec![5, 3, 8, 1]);
        let mut ctx = StepContext::new(vec![5, 3, 8, 1], &state, &changed, pacer);

        ctx.emit(StepAction::Compare, &[0, 1]).await.unwrap();
        ctx.data_mut().swap(0, 1);
        ctx.emit(StepAction::Swap, &[0, 1]).await.unwrap();

        let observed = state.read().await;
        assert_eq!(observed.trace.len(), 2);
        assert_eq!(observed.dataset, vec![3, 5, 8, 1]);
        assert_eq!(observed.trace.current_indices(), &[0, 1]);

        let swap = observed.trace.last().unwrap();
        assert_eq!(swap.values, vec![3, 5]);
    }

    #[tokio::test]
    async fn emit_with_keeps_explicit_values() {
        let (state, changed, pacer) = fixture(vec![2, 1]);
        let mut ctx = StepContext::new(vec![2, 1], &state, &changed, pacer);

        ctx.emit_with(StepAction::Compare, &[0, 1], vec![7, 9])
            .await
            .unwrap();

        let observed = state.read().await;
        assert_eq!(observed.trace.last().unwrap().values, vec![7, 9]);
    }

    #[tokio::test]
    async fn cancelled_context_emits_nothing() {
        let (state, changed, pacer) = fixture(vec![1, 2]);
        let mut ctx = StepContext::new(vec![1, 2], &state, &changed, pacer.clone());

        pacer.cancel();
        assert_eq!(ctx.emit(StepAction::Check, &[0]).await, Err(Cancelled));

        let observed = state.read().await;
        assert!(observed.trace.is_empty());
    }

    #[tokio::test]
    async fn emit_wakes_changed_waiters() {
        let (state, changed, pacer) = fixture(vec![4]);

        let notified = changed.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        let mut ctx = StepContext::new(vec![4], &state, &changed, pacer);
        ctx.emit(StepAction::Check, &[0]).await.unwrap();

        notified.await;
    }
}
