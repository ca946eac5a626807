//! Input guards evaluated before segmentation.
//!
//! Pre: nothing.
//! Post: on `Ok`, the three slices share one length and the precision is a
//! usable digit count; no output has been produced either way.

use crate::error::{Axis, EncodeError, Result};

/// Largest accepted digit count. Every finite `f64` has at most 1074
/// fractional binary digits, so its exact decimal expansion fits; beyond
/// this only zeros would be appended.
pub const MAX_PRECISION: usize = 1074;

/// Check slice lengths and precision; returns the precision as a digit count.
pub fn validate(x: &[f64], y: &[f64], classes: &[i64], precision: i64) -> Result<usize> {
    check_lengths(x, y, classes)?;
    check_precision(precision)
}

pub fn check_lengths(x: &[f64], y: &[f64], classes: &[i64]) -> Result<()> {
    if x.len() != y.len() || x.len() != classes.len() {
        return Err(EncodeError::LengthMismatch {
            x: x.len(),
            y: y.len(),
            classes: classes.len(),
        });
    }
    Ok(())
}

/// Accepts `0..=MAX_PRECISION`.
pub fn check_precision(precision: i64) -> Result<usize> {
    usize::try_from(precision)
        .ok()
        .filter(|&p| p <= MAX_PRECISION)
        .ok_or(EncodeError::InvalidPrecision { precision })
}

/// First NaN/inf coordinate in point order (x before y at the same index).
pub fn check_finite(x: &[f64], y: &[f64]) -> Result<()> {
    for (index, (&xv, &yv)) in x.iter().zip(y).enumerate() {
        if !xv.is_finite() {
            return Err(EncodeError::NonFiniteCoordinate {
                index,
                axis: Axis::X,
                value: xv,
            });
        }
        if !yv.is_finite() {
            return Err(EncodeError::NonFiniteCoordinate {
                index,
                axis: Axis::Y,
                value: yv,
            });
        }
    }
    Ok(())
}
