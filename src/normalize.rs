//! Weight vector to probability vector.

use crate::error::{DistError, WeightError};

/// Scale non-negative `weights` so they sum to one.
///
/// An empty slice is valid and yields an empty vector.
///
/// # Errors
/// * [`WeightError::Negative`] if any weight is below zero.
/// * [`WeightError::NotFinite`] if any weight is NaN or infinite.
/// * [`WeightError::ZeroSum`] if the weights are non-empty and their sum is
///   zero or overflows to infinity.
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>, DistError> {
    if weights.is_empty() {
        return Ok(Vec::new());
    }

    let mut sum = 0.0f64;
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() {
            return Err(WeightError::NotFinite { index, value }.into());
        }
        if value < 0.0 {
            return Err(WeightError::Negative { index, value }.into());
        }
        sum += value;
    }
    if !sum.is_finite() || sum == 0.0 {
        return Err(WeightError::ZeroSum.into());
    }

    Ok(weights.iter().map(|&w| w / sum).collect())
}
