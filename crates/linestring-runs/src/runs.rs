//! Adjacency-based run segmentation.
//!
//! A run is a maximal `start..end` range with one class label. Boundaries
//! come from comparing each label to its predecessor only, so a label that
//! reappears after a different one always opens a new run.

use std::iter::FusedIterator;
use std::ops::Range;

/// Lazy iterator over the runs of a class sequence.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    classes: &'a [i64],
    start: usize,
}

/// Runs of `classes` in input order. Empty input yields nothing.
#[inline]
pub fn runs(classes: &[i64]) -> Runs<'_> {
    Runs { classes, start: 0 }
}

/// Number of runs, without materializing them.
pub fn count_runs(classes: &[i64]) -> usize {
    match classes.first() {
        None => 0,
        Some(_) => 1 + classes.windows(2).filter(|w| w[0] != w[1]).count(),
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let start = self.start;
        let tag = *self.classes.get(start)?;
        let end = self.classes[start + 1..]
            .iter()
            .position(|&c| c != tag)
            .map_or(self.classes.len(), |off| start + 1 + off);
        self.start = end;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.classes.len() - self.start;
        (usize::from(left > 0), Some(left))
    }
}

impl FusedIterator for Runs<'_> {}
