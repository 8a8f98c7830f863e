//! AlgoStage Engine
//!
//! Playback controller for interactive, animated algorithm runs.
//!
//! # Architecture
//!
//! - **Stage**: Clonable handle owning the dataset, selection, and runs
//! - **Config**: Dataset size bounds, value range, initial delay
//! - **Dataset**: Random generation, validation, custom input parsing
//! - **Snapshot**: Wire-friendly view of the stage for UI frames
//!
//! # Usage
//!
//! ```ignore
//! let stage = Stage::new(StageConfig::default());
//! stage.set_algorithm(Algorithm::MergeSort).await;
//! stage.set_delay(50);
//! stage.start().await?;
//! stage.wait_until_settled().await;
//! println!("{:?}", stage.snapshot().await.result);
//! ```

mod config;
mod controller;
mod dataset;
mod error;

pub use algostage_algorithms::Algorithm;
pub use algostage_trace::{RunStatus, Step, StepAction, TerminalResult, Value};
pub use config::StageConfig;
pub use controller::{Stage, StageSnapshot};
pub use dataset::parse_values;
pub use error::{Error, Result};
