//! AlgoStage Trace
//!
//! Step model, trace recorder, shared run state, and pacing primitives for
//! animated algorithm runs.
//!
//! # Architecture
//!
//! - **Step model**: What happened at which indices, ordinals contiguous from 1
//! - **Recorder**: Append-only history plus the currently highlighted indices
//! - **Run state**: The single shared object observers read during a run
//! - **Pacing**: Delay between steps, preemptible by per-run cancellation
//!
//! # Usage
//!
//! ```ignore
//! let mut ctx = StepContext::new(data, &state, &changed, pacer);
//! ctx.emit(StepAction::Compare, &[0, 1]).await?;
//! ctx.pace().await?;
//! ```

mod context;
mod pacing;
mod recorder;
mod state;
mod step;

pub use context::StepContext;
pub use pacing::{Cancelled, Pacer};
pub use recorder::TraceRecorder;
pub use state::{RunState, RunStatus};
pub use step::{Step, StepAction, TerminalResult, Value};
