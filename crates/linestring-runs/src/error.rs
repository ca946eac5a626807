//! Errors raised by the encoder. All of them are caller contract
//! violations detected before any output is produced.

use std::fmt;

use crate::validate::MAX_PRECISION;

/// Coordinate axis, used to point at an offending value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EncodeError {
    /// Input slices differ in length; lengths reported as `x`, `y`, `classes`.
    LengthMismatch { x: usize, y: usize, classes: usize },
    /// Requested digit count is negative or above `MAX_PRECISION`.
    InvalidPrecision { precision: i64 },
    /// NaN or infinite coordinate under `NonFinite::Reject`.
    NonFiniteCoordinate { index: usize, axis: Axis, value: f64 },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { x, y, classes } => {
                write!(f, "Array lengths mismatch {x} {y} {classes}")
            }
            Self::InvalidPrecision { precision } => write!(
                f,
                "Invalid precision {precision} (must be between 0 and {MAX_PRECISION})"
            ),
            Self::NonFiniteCoordinate { index, axis, value } => write!(
                f,
                "Non-finite coordinate {axis}[{index}] = {value}"
            ),
        }
    }
}

impl std::error::Error for EncodeError {}

pub type Result<T> = std::result::Result<T, EncodeError>;
