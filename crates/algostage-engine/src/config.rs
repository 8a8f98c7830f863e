//! Stage configuration.

use algostage_trace::Value;

/// Tunable parameters for a [`Stage`](crate::Stage).
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Number of values a freshly created or regenerated dataset holds.
    pub default_size: usize,
    /// Upper bound on dataset size, for generated and custom datasets alike.
    pub max_size: usize,
    /// Inclusive lower bound for generated values.
    pub min_value: Value,
    /// Inclusive upper bound for generated values.
    pub max_value: Value,
    /// Inter-step delay a new stage starts with, in milliseconds.
    pub default_delay_ms: u64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            default_size: 12,
            max_size: 64,
            min_value: 1,
            max_value: 99,
            default_delay_ms: 300,
        }
    }
}

impl StageConfig {
    /// Set the size of freshly generated datasets.
    #[must_use]
    pub fn with_default_size(mut self, size: usize) -> Self {
        self.default_size = size;
        self
    }

    /// Set the maximum dataset size.
    #[must_use]
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// Set the inclusive range generated values are drawn from.
    #[must_use]
    pub fn with_value_range(mut self, min: Value, max: Value) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Set the initial inter-step delay in milliseconds.
    #[must_use]
    pub fn with_default_delay_ms(mut self, delay_ms: u64) -> Self {
        self.default_delay_ms = delay_ms;
        self
    }
}
