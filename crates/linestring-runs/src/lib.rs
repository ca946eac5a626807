//! Contiguous-run WKT encoding for labelled 2D point streams.
//!
//! Given parallel `x`, `y`, `classes` slices, the encoder splits the points
//! into maximal runs of equal class label and renders each run as a
//! `LINESTRING (x y, x y, ...)` literal at a fixed decimal precision.
//!
//! Pipeline
//! - `validate`: length and precision guard, evaluated before any output.
//! - `runs`: single-scan adjacency segmentation into `start..end` ranges.
//! - `format`: fixed-precision coordinate rendering into one buffer per run.
//!
//! `reference` holds the slow comparison oracle, `synth` the seeded
//! synthetic point streams used by tests, benches and the CLI.

pub mod encode;
pub mod error;
pub mod format;
pub mod reference;
pub mod runs;
pub mod synth;
pub mod validate;

#[cfg(test)]
mod tests;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use encode::{encode, EncodeOptions, Encoder, NonFinite};
pub use error::{EncodeError, Result};
pub use runs::{count_runs, runs, Runs};
pub use validate::MAX_PRECISION;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::encode::{encode, EncodeOptions, Encoder, NonFinite};
    pub use crate::error::{Axis, EncodeError};
    pub use crate::format::{estimate_len, render_linestring, write_linestring};
    pub use crate::runs::{count_runs, runs};
    pub use crate::synth::{synth_set, SynthSet};
}
