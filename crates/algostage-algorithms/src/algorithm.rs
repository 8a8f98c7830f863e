//! The closed set of algorithms the stage can run.

use std::fmt;
use std::str::FromStr;

use algostage_trace::{Cancelled, StepContext, TerminalResult, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{search, sort};

/// An algorithm name that matches no library entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

/// Every algorithm the engine can animate.
///
/// The set is closed: callers select a variant, never supply code. Two
/// searches take a target value; five sorts take none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
}

impl Algorithm {
    /// Every library entry, in menu order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    /// Human-readable name for menus and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
        }
    }

    /// One-line description rendered next to the selection.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Scans elements front to back until the target appears",
            Algorithm::BinarySearch => "Halves an ascending dataset around the midpoint probe",
            Algorithm::BubbleSort => "Bubbles larger neighbors upward in repeated passes",
            Algorithm::SelectionSort => "Selects the minimum of the remainder into each position",
            Algorithm::InsertionSort => "Grows a sorted prefix by walking each key into place",
            Algorithm::MergeSort => "Splits recursively and merges the sorted halves back",
            Algorithm::QuickSort => "Partitions around a pivot and conquers each side",
        }
    }

    /// Whether this algorithm searches for a target value.
    pub fn is_search(&self) -> bool {
        matches!(self, Algorithm::LinearSearch | Algorithm::BinarySearch)
    }

    /// Whether this algorithm only runs on an ascending dataset.
    pub fn requires_sorted(&self) -> bool {
        matches!(self, Algorithm::BinarySearch)
    }

    /// Run the algorithm over the context's working copy.
    ///
    /// Sorts ignore `target`; searches return `Found`/`NotFound` for it.
    /// `Err(Cancelled)` means the run was interrupted at a suspension
    /// point and emitted nothing further.
    ///
    /// # Panics
    ///
    /// Panics when a search variant is executed without a target. The
    /// controller rejects that combination before a run starts.
    pub async fn execute(
        &self,
        ctx: &mut StepContext<'_>,
        target: Option<Value>,
    ) -> Result<TerminalResult, Cancelled> {
        match self {
            Algorithm::LinearSearch => {
                let Some(target) = target else {
                    panic!("linear search executed without a target");
                };
                search::linear_search(ctx, target).await
            }
            Algorithm::BinarySearch => {
                let Some(target) = target else {
                    panic!("binary search executed without a target");
                };
                search::binary_search(ctx, target).await
            }
            Algorithm::BubbleSort => sort::bubble_sort(ctx).await,
            Algorithm::SelectionSort => sort::selection_sort(ctx).await,
            Algorithm::InsertionSort => sort::insertion_sort(ctx).await,
            Algorithm::MergeSort => sort::merge_sort(ctx).await,
            Algorithm::QuickSort => sort::quick_sort(ctx).await,
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::BubbleSort
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parse a menu key. Case, spaces, hyphens, and underscores are
    /// ignored, and the `Search`/`Sort` suffix is optional: `"bubble"`,
    /// `"Bubble Sort"`, and `"bubble_sort"` all name the same entry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let algorithm = match key.as_str() {
            "linearsearch" | "linear" => Algorithm::LinearSearch,
            "binarysearch" | "binary" => Algorithm::BinarySearch,
            "bubblesort" | "bubble" => Algorithm::BubbleSort,
            "selectionsort" | "selection" => Algorithm::SelectionSort,
            "insertionsort" | "insertion" => Algorithm::InsertionSort,
            "mergesort" | "merge" => Algorithm::MergeSort,
            "quicksort" | "quick" => Algorithm::QuickSort,
            _ => return Err(UnknownAlgorithm(s.to_string())),
        };
        Ok(algorithm)
    }
}
