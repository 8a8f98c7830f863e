//! Dataset generation, validation, and parsing.

use rand::Rng;

use algostage_trace::Value;

use crate::config::StageConfig;
use crate::error::{Error, Result};

/// Draw `size` random values from the configured range.
///
/// Callers validate `size` first; this function generates unconditionally.
pub fn random(config: &StageConfig, size: usize) -> Vec<Value> {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| rng.gen_range(config.min_value..=config.max_value))
        .collect()
}

/// Check a requested dataset size against the configured bounds.
pub fn validate_size(config: &StageConfig, size: usize) -> Result<()> {
    if size == 0 || size > config.max_size {
        return Err(Error::InvalidSize {
            requested: size,
            max: config.max_size,
        });
    }
    Ok(())
}

/// Check a caller-supplied dataset against the configured bounds.
pub fn validate_custom(config: &StageConfig, values: &[Value]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if values.len() > config.max_size {
        return Err(Error::DatasetTooLarge {
            got: values.len(),
            max: config.max_size,
        });
    }
    Ok(())
}

/// Parse comma or whitespace separated integers from user input.
///
/// `"3, 1 4,1"` and `"3 1 4 1"` both yield `[3, 1, 4, 1]`. Empty tokens
/// between separators are skipped; any non-integer token is an error.
pub fn parse_values(input: &str) -> Result<Vec<Value>> {
    let values = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Value>()
                .map_err(|_| Error::InvalidInput(format!("not an integer: {token:?}")))
        })
        .collect::<Result<Vec<Value>>>()?;

    if values.is_empty() {
        return Err(Error::InvalidInput("no values supplied".to_string()));
    }
    Ok(values)
}
