//! Slow comparison oracle.
//!
//! `naive` groups consecutive equal labels with a general-purpose
//! `chunk_by` and formats every coordinate with its own `format!` call. It
//! shares no code with the fast path beyond input validation, so agreement
//! between the two is a meaningful check. Validation follows `encode` with
//! default options: NaN and infinite coordinates are rejected.

use itertools::Itertools;

use crate::error::Result;
use crate::validate::{check_finite, validate};

/// Reference encoding; must equal `encode` byte for byte.
pub fn naive(x: &[f64], y: &[f64], classes: &[i64], precision: i64) -> Result<Vec<String>> {
    let p = validate(x, y, classes, precision)?;
    check_finite(x, y)?;
    let chunks = x.iter().zip(y).zip(classes).chunk_by(|&(_, &c)| c);
    let mut out = Vec::new();
    for (_, chunk) in &chunks {
        let body = chunk
            .map(|((xv, yv), _)| format!("{xv:.p$} {yv:.p$}"))
            .join(", ");
        out.push(format!("LINESTRING ({body})"));
    }
    Ok(out)
}
