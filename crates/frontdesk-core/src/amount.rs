use crate::{CoreError, CoreResult};

/// Coerces the amount text typed into the entry form into a number.
///
/// Surrounding whitespace is ignored. Empty, non-numeric and non-finite input
/// is rejected instead of being sent upstream.
pub fn coerce_amount(raw: &str) -> CoreResult<f64> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoreError::InvalidAmount(raw.to_string()))
}
