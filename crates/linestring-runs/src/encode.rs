//! Validator → segmenter → formatter.
//!
//! `encode` is the one-call entry point. `Encoder` carries `EncodeOptions`
//! for callers that want a non-default non-finite policy or parallel cutoff.
//! Either way the call is atomic: all checks run before the first run is
//! rendered, so an `Err` never comes with partial output.

use std::ops::Range;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::{EncodeError, Result};
use crate::format::render_linestring;
use crate::runs::runs;
use crate::validate::{check_finite, check_lengths, check_precision, validate, MAX_PRECISION};

/// What to do with NaN / infinite coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NonFinite {
    /// Fail with `NonFiniteCoordinate` before rendering anything.
    #[default]
    Reject,
    /// Render Rust's display text (`NaN`, `inf`, `-inf`) as-is.
    PassThrough,
}

/// Encoder configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Digits after the decimal point for every coordinate.
    pub precision: usize,
    pub non_finite: NonFinite,
    /// Point count from which runs are rendered in parallel (`rayon` feature).
    pub parallel_threshold: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            precision: 2,
            non_finite: NonFinite::Reject,
            parallel_threshold: 100_000,
        }
    }
}

impl EncodeOptions {
    /// Options with a caller-supplied precision; values outside
    /// `0..=MAX_PRECISION` are rejected.
    pub fn new(precision: i64) -> Result<Self> {
        Ok(Self {
            precision: check_precision(precision)?,
            ..Self::default()
        })
    }

    pub fn with_non_finite(mut self, non_finite: NonFinite) -> Self {
        self.non_finite = non_finite;
        self
    }

    pub fn with_parallel_threshold(mut self, points: usize) -> Self {
        self.parallel_threshold = points;
        self
    }
}

/// Stateless encoder; one instance can serve any number of calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// One `LINESTRING` per contiguous class run, in input order.
    pub fn encode(&self, x: &[f64], y: &[f64], classes: &[i64]) -> Result<Vec<String>> {
        check_lengths(x, y, classes)?;
        let precision = self.options.precision;
        if precision > MAX_PRECISION {
            return Err(EncodeError::InvalidPrecision {
                precision: i64::try_from(precision).unwrap_or(i64::MAX),
            });
        }
        if self.options.non_finite == NonFinite::Reject {
            check_finite(x, y)?;
        }

        #[cfg(feature = "rayon")]
        {
            if x.len() >= self.options.parallel_threshold {
                let spans: Vec<Range<usize>> = runs(classes).collect();
                let mut out = Vec::with_capacity(spans.len());
                spans
                    .par_iter()
                    .map(|r| render_run(x, y, r.clone(), precision))
                    .collect_into_vec(&mut out);
                return Ok(out);
            }
        }

        Ok(runs(classes)
            .map(|r| render_run(x, y, r, precision))
            .collect())
    }
}

#[inline]
fn render_run(x: &[f64], y: &[f64], r: Range<usize>, precision: usize) -> String {
    render_linestring(&x[r.clone()], &y[r], precision)
}

/// Encode with default options at the given precision.
///
/// Errors: `LengthMismatch` (checked first), then `InvalidPrecision`, then
/// `NonFiniteCoordinate` for the first NaN/inf coordinate.
pub fn encode(x: &[f64], y: &[f64], classes: &[i64], precision: i64) -> Result<Vec<String>> {
    let precision = validate(x, y, classes, precision)?;
    Encoder::new(EncodeOptions {
        precision,
        ..EncodeOptions::default()
    })
    .encode(x, y, classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_reject_negative_precision() {
        assert_eq!(
            EncodeOptions::new(-2),
            Err(EncodeError::InvalidPrecision { precision: -2 })
        );
        let opts = EncodeOptions::new(3)
            .unwrap()
            .with_non_finite(NonFinite::PassThrough)
            .with_parallel_threshold(10);
        assert_eq!(opts.precision, 3);
        assert_eq!(opts.non_finite, NonFinite::PassThrough);
        assert_eq!(opts.parallel_threshold, 10);
    }

    #[test]
    fn oversized_precision_is_an_error_not_a_panic() {
        for p in [70_000, 1 << 62, i64::MAX] {
            assert_eq!(
                encode(&[1.0], &[1.0], &[0], p),
                Err(EncodeError::InvalidPrecision { precision: p })
            );
        }
        let forced = Encoder::new(EncodeOptions {
            precision: usize::MAX,
            ..EncodeOptions::default()
        });
        assert!(matches!(
            forced.encode(&[1.0], &[1.0], &[0]),
            Err(EncodeError::InvalidPrecision { .. })
        ));
    }

    #[test]
    fn max_precision_prints_exact_expansion() {
        let out = encode(&[5e-324], &[0.0], &[0], MAX_PRECISION as i64).unwrap();
        let x = out[0]
            .strip_prefix("LINESTRING (")
            .and_then(|s| s.split(' ').next())
            .unwrap();
        assert_eq!(x.len(), 2 + MAX_PRECISION);
        assert!(x.starts_with("0.000"));
        assert!(x.ends_with("65625"));
    }

    #[test]
    fn reject_policy_fails_before_output() {
        let err = encode(&[0.0, f64::NAN], &[0.0, 1.0], &[0, 1], 2).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::NonFiniteCoordinate { index: 1, .. }
        ));
    }

    #[test]
    fn pass_through_policy_renders_display_text() {
        let enc = Encoder::new(
            EncodeOptions::new(1)
                .unwrap()
                .with_non_finite(NonFinite::PassThrough),
        );
        let out = enc
            .encode(&[f64::INFINITY, 1.0], &[2.0, f64::NAN], &[4, 4])
            .unwrap();
        assert_eq!(out, vec!["LINESTRING (inf 2.0, 1.0 NaN)".to_string()]);
    }

    #[test]
    fn parallel_cutoff_keeps_run_order() {
        let classes: Vec<i64> = (0..2_000).map(|i| i / 7).collect();
        let x: Vec<f64> = (0..2_000).map(|i| i as f64 * 0.5).collect();
        let y: Vec<f64> = x.iter().map(|v| -v).collect();
        let sequential = Encoder::new(EncodeOptions::new(1).unwrap()).encode(&x, &y, &classes);
        let eager = Encoder::new(EncodeOptions::new(1).unwrap().with_parallel_threshold(0))
            .encode(&x, &y, &classes);
        assert_eq!(sequential, eager);
        assert_eq!(sequential.unwrap().len(), 286);
    }
}
