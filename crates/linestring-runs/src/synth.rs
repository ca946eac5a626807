//! Seeded synthetic point streams.
//!
//! Model
//! - Point count uniform in `[lower, upper)`.
//! - `x`, `y` standard normal (Box–Muller on `StdRng` uniforms).
//! - `classes` is the running count of `u > 0.85` draws, so labels are
//!   non-decreasing and runs average about seven points.
//!
//! The same seed always gives the same set, which keeps oracle comparisons
//! and benchmark inputs reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability threshold above which a point opens a new class.
const NEW_CLASS_ABOVE: f64 = 0.85;

/// One synthetic point stream.
#[derive(Clone, Debug, PartialEq)]
pub struct SynthSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub classes: Vec<i64>,
}

impl SynthSet {
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Draw a set with `lower <= len < upper` points (exactly `lower` if the
/// range is empty).
pub fn synth_set(seed: u64, lower: usize, upper: usize) -> SynthSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = if upper > lower {
        rng.gen_range(lower..upper)
    } else {
        lower
    };
    let x = (0..count).map(|_| standard_normal(&mut rng)).collect();
    let y = (0..count).map(|_| standard_normal(&mut rng)).collect();
    let classes = (0..count)
        .scan(0i64, |acc, _| {
            *acc += i64::from(rng.gen::<f64>() > NEW_CLASS_ABOVE);
            Some(*acc)
        })
        .collect();
    SynthSet { x, y, classes }
}

/// Fixed-size convenience wrapper around `synth_set`.
pub fn synth_exact(seed: u64, count: usize) -> SynthSet {
    synth_set(seed, count, count)
}

fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // 1 - u keeps the log argument in (0, 1].
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
