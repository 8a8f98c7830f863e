//! AlgoStage Algorithms
//!
//! The closed library of animated search and sort algorithms.
//!
//! # Architecture
//!
//! - **Algorithm**: Closed enum over two searches and five sorts
//! - **Search**: Linear scan and binary halving, probing via `Check` steps
//! - **Sort**: Bubble, selection, insertion, merge, and quick, emitting
//!   `Compare`/`Swap`/`Shift`/`Insert`/`Merge` steps as they reorder
//!
//! Every routine drives a [`StepContext`](algostage_trace::StepContext):
//! emit a step, pace, repeat. Runs are deterministic, identical inputs
//! emit identical traces.
//!
//! # Usage
//!
//! ```ignore
//! let algorithm: Algorithm = "quick sort".parse()?;
//! let result = algorithm.execute(&mut ctx, None).await?;
//! assert_eq!(result, TerminalResult::Sorted);
//! ```

mod algorithm;
mod search;
mod sort;

pub use algorithm::{Algorithm, UnknownAlgorithm};
