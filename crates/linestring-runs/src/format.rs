//! Fixed-precision WKT rendering of one run.
//!
//! Numbers go through `core::fmt`'s `{:.p}` path, which prints exactly `p`
//! fractional digits (no point at all for `p == 0`), keeps trailing zeros and
//! rounds the exact binary value half-to-even. That is the same text a
//! `format(v, ".{p}f")` reference produces, so output strings compare equal.
//!
//! Everything is written straight into the caller's buffer; no per-point
//! allocation happens.

use std::fmt::{self, Write};

const PREFIX: &str = "LINESTRING (";
const EMPTY: &str = "LINESTRING EMPTY";
const MAX_ESTIMATE: usize = 1 << 30;

/// Rough byte length of one rendered run of `points` coordinate pairs.
///
/// Assumes up to four integer digits plus sign per number; used only to
/// pre-size buffers, never for correctness. Saturates, and is capped at
/// `MAX_ESTIMATE` so absurd inputs cannot request a huge allocation up front.
#[inline]
pub fn estimate_len(points: usize, precision: usize) -> usize {
    // "d.ddd d.ddd, " -> two numbers, one space, one ", " separator
    let per_number = precision
        .saturating_add(5)
        .saturating_add(usize::from(precision > 0));
    let per_point = per_number.saturating_mul(2).saturating_add(3);
    points
        .saturating_mul(per_point)
        .saturating_add(PREFIX.len() + 1)
        .min(MAX_ESTIMATE)
}

/// Write `LINESTRING (x0 y0, x1 y1, ...)` for the paired slices.
///
/// Pre: `x.len() == y.len()`; extra elements of the longer slice are ignored.
/// Pre: `precision <= MAX_PRECISION` (callers go through `check_precision`).
/// An empty pair of slices renders as `LINESTRING EMPTY`.
pub fn write_linestring<W: Write>(
    writer: &mut W,
    x: &[f64],
    y: &[f64],
    precision: usize,
) -> fmt::Result {
    if x.is_empty() || y.is_empty() {
        return writer.write_str(EMPTY);
    }
    writer.write_str(PREFIX)?;
    for (i, (xv, yv)) in x.iter().zip(y).enumerate() {
        if i > 0 {
            writer.write_str(", ")?;
        }
        write!(writer, "{xv:.precision$} {yv:.precision$}")?;
    }
    writer.write_char(')')
}

/// Render one run into a freshly sized `String`.
pub fn render_linestring(x: &[f64], y: &[f64], precision: usize) -> String {
    let mut out = String::with_capacity(estimate_len(x.len().min(y.len()), precision));
    // Writing into a `String` never fails.
    let _ = write_linestring(&mut out, x, y, precision);
    out
}
