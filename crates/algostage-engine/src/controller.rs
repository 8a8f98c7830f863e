//! The stage: command surface and run lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Notify, RwLock};
use tracing::{debug, info, warn};

use algostage_algorithms::Algorithm;
use algostage_trace::{
    Cancelled, Pacer, RunState, RunStatus, Step, StepContext, TerminalResult, Value,
};

use crate::config::StageConfig;
use crate::dataset;
use crate::error::{Error, Result};

/// Command-side settings, separate from the run state so observers reading
/// the trace never contend with control updates.
struct Control {
    algorithm: Algorithm,
    target: Option<Value>,
    /// Cancellation token of the current (or most recent) run.
    pacer: Option<Pacer>,
}

struct StageShared {
    run: RwLock<RunState>,
    control: RwLock<Control>,
    changed: Notify,
    delay_ms: Arc<AtomicU64>,
    config: StageConfig,
}

/// One interactive algorithm stage.
///
/// A stage holds a dataset, a selected algorithm, and at most one run in
/// flight. Commands (`start`, `reset`, `regenerate`, ...) may arrive from
/// any task at any time; observers follow along through [`snapshot`],
/// [`steps_since`], and [`changed`].
///
/// Cloning is cheap and every clone commands the same stage.
///
/// [`snapshot`]: Stage::snapshot
/// [`steps_since`]: Stage::steps_since
/// [`changed`]: Stage::changed
#[derive(Clone)]
pub struct Stage {
    shared: Arc<StageShared>,
}

/// Point-in-time view of a stage, cheap to serialize for a UI frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub status: RunStatus,
    pub algorithm: Algorithm,
    pub dataset: Vec<Value>,
    pub target: Option<Value>,
    pub delay_ms: u64,
    /// Indices highlighted by the most recent step.
    pub current_indices: Vec<usize>,
    pub step_count: usize,
    pub last_step: Option<Step>,
    pub result: Option<TerminalResult>,
}

impl Stage {
    /// Create an idle stage with a freshly generated dataset.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is inconsistent: a zero or
    /// over-maximum default size, or an inverted value range.
    pub fn new(config: StageConfig) -> Self {
        assert!(
            config.default_size >= 1 && config.default_size <= config.max_size,
            "default_size {} outside 1..={}",
            config.default_size,
            config.max_size
        );
        assert!(
            config.min_value <= config.max_value,
            "inverted value range {}..={}",
            config.min_value,
            config.max_value
        );

        let initial = dataset::random(&config, config.default_size);
        let delay_ms = Arc::new(AtomicU64::new(config.default_delay_ms));
        Self {
            shared: Arc::new(StageShared {
                run: RwLock::new(RunState::new(initial)),
                control: RwLock::new(Control {
                    algorithm: Algorithm::default(),
                    target: None,
                    pacer: None,
                }),
                changed: Notify::new(),
                delay_ms,
                config,
            }),
        }
    }

    /// Start a run of the selected algorithm over the current dataset.
    ///
    /// Ignored when a run is already in flight. A search with no target
    /// set is rejected before any state changes. The previous run's trace
    /// and result are cleared, so a restart after completion or reset
    /// replays from the dataset as it stands now.
    pub async fn start(&self) -> Result<()> {
        let mut run = self.shared.run.write().await;
        if run.is_running() {
            debug!("Start ignored, a run is already in flight");
            return Ok(());
        }

        let (algorithm, target, pacer) = {
            let mut control = self.shared.control.write().await;
            if control.algorithm.is_search() && control.target.is_none() {
                warn!("{} refused to start without a target", control.algorithm);
                return Err(Error::MissingTarget(control.algorithm.name()));
            }
            let pacer = Pacer::new(Arc::clone(&self.shared.delay_ms));
            control.pacer = Some(pacer.clone());
            (control.algorithm, control.target, pacer)
        };

        run.trace.clear();
        run.result = None;
        run.status = RunStatus::Running;
        let data = run.dataset.clone();
        drop(run);

        info!("{} started over {} values", algorithm, data.len());
        spawn_run(Arc::clone(&self.shared), algorithm, target, data, pacer);
        self.shared.changed.notify_waiters();
        Ok(())
    }

    /// Cancel any run in flight and drop its outputs.
    ///
    /// The stage returns to `Idle` with an empty trace and no result. The
    /// dataset keeps its current contents, including partial mutations
    /// left by an interrupted sort. Idempotent when already idle.
    pub async fn reset(&self) {
        let mut run = self.shared.run.write().await;
        self.cancel_current_run().await;
        run.reset();
        drop(run);
        debug!("Stage reset");
        self.shared.changed.notify_waiters();
    }

    /// Replace the dataset with `size` freshly generated values.
    ///
    /// Cancels any run in flight. When binary search is selected the new
    /// dataset is sorted before it is installed.
    pub async fn regenerate(&self, size: usize) -> Result<()> {
        dataset::validate_size(&self.shared.config, size)?;
        let values = dataset::random(&self.shared.config, size);
        self.install_dataset(values).await;
        info!("Regenerated dataset of {} values", size);
        Ok(())
    }

    /// Replace the dataset with caller-supplied values.
    ///
    /// Invalid input (empty, or larger than the configured maximum) is
    /// rejected and the current dataset stays untouched. Valid input
    /// cancels any run in flight, like [`regenerate`](Stage::regenerate).
    pub async fn submit_custom_dataset(&self, values: Vec<Value>) -> Result<()> {
        dataset::validate_custom(&self.shared.config, &values)?;
        let size = values.len();
        self.install_dataset(values).await;
        info!("Installed custom dataset of {} values", size);
        Ok(())
    }

    /// Select the algorithm for the next run.
    ///
    /// Cancels any run in flight and clears previous outputs. Selecting
    /// binary search sorts the dataset in place so its precondition holds;
    /// selecting a sort clears any leftover search target.
    pub async fn set_algorithm(&self, algorithm: Algorithm) {
        let mut run = self.shared.run.write().await;
        {
            let mut control = self.shared.control.write().await;
            if let Some(pacer) = control.pacer.take() {
                pacer.cancel();
            }
            control.algorithm = algorithm;
            if !algorithm.is_search() {
                control.target = None;
            }
        }
        run.reset();
        if algorithm.requires_sorted() {
            run.dataset.sort_unstable();
        }
        drop(run);
        debug!("Selected {}", algorithm);
        self.shared.changed.notify_waiters();
    }

    /// Set the inter-step delay in milliseconds.
    ///
    /// Takes effect at the run's next suspension point; a step already
    /// sleeping under the old delay finishes that sleep first.
    pub fn set_delay(&self, delay_ms: u64) {
        self.shared.delay_ms.store(delay_ms, Ordering::SeqCst);
        debug!("Inter-step delay set to {}ms", delay_ms);
        self.shared.changed.notify_waiters();
    }

    /// Set the value the next search run looks for.
    ///
    /// # Panics
    ///
    /// Panics if a sort is selected; targets are meaningful only for
    /// searches, and the UI offers the field only then.
    pub async fn set_target(&self, target: Value) {
        let mut control = self.shared.control.write().await;
        assert!(
            control.algorithm.is_search(),
            "set_target with {} selected",
            control.algorithm
        );
        control.target = Some(target);
        drop(control);
        debug!("Search target set to {}", target);
        self.shared.changed.notify_waiters();
    }

    /// Capture a point-in-time view of the stage.
    pub async fn snapshot(&self) -> StageSnapshot {
        let run = self.shared.run.read().await;
        let control = self.shared.control.read().await;
        StageSnapshot {
            status: run.status,
            algorithm: control.algorithm,
            dataset: run.dataset.clone(),
            target: control.target,
            delay_ms: self.shared.delay_ms.load(Ordering::SeqCst),
            current_indices: run.trace.current_indices().to_vec(),
            step_count: run.trace.len(),
            last_step: run.trace.last().cloned(),
            result: run.result,
        }
    }

    /// Every step of the current run so far, in emission order.
    pub async fn history(&self) -> Vec<Step> {
        self.shared.run.read().await.trace.steps().to_vec()
    }

    /// Steps emitted after the given ordinal, for incremental consumers.
    pub async fn steps_since(&self, ordinal: u64) -> Vec<Step> {
        self.shared.run.read().await.trace.steps_since(ordinal).to_vec()
    }

    /// Current lifecycle status.
    pub async fn status(&self) -> RunStatus {
        self.shared.run.read().await.status
    }

    /// Current dataset contents as observers see them.
    pub async fn dataset(&self) -> Vec<Value> {
        self.shared.run.read().await.dataset.clone()
    }

    /// Terminal result of the last completed run, if any.
    pub async fn result(&self) -> Option<TerminalResult> {
        self.shared.run.read().await.result
    }

    /// Currently selected algorithm.
    pub async fn algorithm(&self) -> Algorithm {
        self.shared.control.read().await.algorithm
    }

    /// Current inter-step delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.shared.delay_ms.load(Ordering::SeqCst)
    }

    /// The configuration this stage was built with.
    pub fn config(&self) -> &StageConfig {
        &self.shared.config
    }

    /// Wait for the next observable change: a step, a status transition,
    /// a dataset swap, or a control update.
    ///
    /// Changes that land while the caller is away are not queued; render
    /// loops re-read a [`snapshot`](Stage::snapshot) after each wakeup.
    pub async fn changed(&self) {
        self.shared.changed.notified().await;
    }

    /// Wait until no run is in flight.
    ///
    /// Returns immediately when the stage is `Idle` or `Completed`.
    pub async fn wait_until_settled(&self) {
        loop {
            let notified = self.shared.changed.notified();
            tokio::pin!(notified);
            // Arm before reading the status, so a transition landing
            // between the read and the await still wakes the loop.
            notified.as_mut().enable();
            if self.shared.run.read().await.status != RunStatus::Running {
                return;
            }
            notified.await;
        }
    }

    /// Trip the current run's token under the already-held run lock.
    async fn cancel_current_run(&self) {
        let mut control = self.shared.control.write().await;
        if let Some(pacer) = control.pacer.take() {
            pacer.cancel();
        }
    }

    /// Cancel any run in flight and install a replacement dataset.
    async fn install_dataset(&self, mut values: Vec<Value>) {
        let mut run = self.shared.run.write().await;
        {
            let control = self.shared.control.read().await;
            if let Some(pacer) = &control.pacer {
                pacer.cancel();
            }
            if control.algorithm.requires_sorted() {
                values.sort_unstable();
            }
        }
        run.replace_dataset(values);
        drop(run);
        self.shared.changed.notify_waiters();
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageConfig::default())
    }
}

/// Run the algorithm to completion on its own task and publish the outcome.
///
/// The task owns the working copy; the shared state only ever sees it
/// through `emit`. Cancellation is checked once more under the write lock
/// before publishing, so a reset that raced the final step always wins.
fn spawn_run(
    shared: Arc<StageShared>,
    algorithm: Algorithm,
    target: Option<Value>,
    data: Vec<Value>,
    pacer: Pacer,
) {
    tokio::spawn(async move {
        let mut ctx = StepContext::new(data, &shared.run, &shared.changed, pacer.clone());
        match algorithm.execute(&mut ctx, target).await {
            Ok(result) => {
                let data = ctx.into_data();
                let mut run = shared.run.write().await;
                if pacer.is_cancelled() {
                    debug!("{} finished after cancellation, outcome discarded", algorithm);
                    return;
                }
                run.status = RunStatus::Completed;
                run.dataset = data;
                run.result = Some(result);
                let steps = run.trace.len();
                drop(run);
                shared.changed.notify_waiters();
                info!("{} completed in {} steps: {:?}", algorithm, steps, result);
            }
            Err(Cancelled) => {
                debug!("{} run cancelled", algorithm);
            }
        }
    });
}
