//! Step model for algorithm run traces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element type for all datasets run through the engine.
pub type Value = i64;

/// The kind of operation a single step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    /// A search probe examined an element
    Check,
    /// Two elements were compared
    Compare,
    /// Two elements exchanged positions
    Swap,
    /// An element moved one position during an insertion walk
    Shift,
    /// A key settled into its final position
    Insert,
    /// An element was written back during a merge
    Merge,
    /// A search located its target
    Found,
}

impl StepAction {
    /// Lowercase label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            StepAction::Check => "check",
            StepAction::Compare => "compare",
            StepAction::Swap => "swap",
            StepAction::Shift => "shift",
            StepAction::Insert => "insert",
            StepAction::Merge => "merge",
            StepAction::Found => "found",
        }
    }
}

impl fmt::Display for StepAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One animated step of an algorithm run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position within the run, contiguous from 1.
    pub ordinal: u64,
    pub action: StepAction,
    /// Highlighted dataset positions (one to three entries).
    pub indices: Vec<usize>,
    /// Element values parallel to `indices`.
    pub values: Vec<Value>,
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TerminalResult {
    /// A search located the target at this index
    Found { index: usize },
    /// A search exhausted its candidates without a match
    NotFound,
    /// A sort left the dataset in ascending order
    Sorted,
}

impl TerminalResult {
    /// The located index, if this outcome is a successful search.
    pub fn found_index(&self) -> Option<usize> {
        match self {
            TerminalResult::Found { index } => Some(*index),
            _ => None,
        }
    }
}
