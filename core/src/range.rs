//! Bounded integer input.

use crate::Error;
use core::num::IntErrorKind;
use tracing::debug;

/// Parse `raw` as an integer within `min..=max`.
///
/// This function does not retry. Interactive callers are expected to report the returned
/// error and prompt again.
pub fn validate_integer_range(raw: &str, min: i64, max: i64) -> Result<i64, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyRange { min, max });
    }
    let value = trimmed.parse::<i64>().map_err(|err| match err.kind() {
        // Still an integer, just beyond any representable bound
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::Overflow {
            raw: trimmed.to_string(),
            min,
            max,
        },
        _ => Error::NotInteger(trimmed.to_string()),
    })?;
    if value < min || value > max {
        return Err(Error::OutOfRange { value, min, max });
    }
    debug!(value, min, max, "accepted integer");
    Ok(value)
}
