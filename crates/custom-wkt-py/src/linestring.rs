//! `custom_wkt.linestring` binding.

use crate::common::{map_encode_err, slice_1d};
use linestring_runs::encode;
use numpy::PyReadonlyArrayDyn;
use pyo3::prelude::*;

/// Returns a list of WKT `LINESTRING`s, one per contiguous run of `classes`.
///
/// `x`, `y` are float64 and `classes` int64 1-D arrays of equal length;
/// `precision` is the number of digits after the decimal point (>= 0).
/// The GIL is released while encoding.
#[pyfunction]
#[pyo3(signature = (x, y, classes, precision))]
pub fn linestring(
    py: Python<'_>,
    x: PyReadonlyArrayDyn<'_, f64>,
    y: PyReadonlyArrayDyn<'_, f64>,
    classes: PyReadonlyArrayDyn<'_, i64>,
    precision: i64,
) -> PyResult<Vec<String>> {
    let xs = slice_1d(&x, "x")?;
    let ys = slice_1d(&y, "y")?;
    let cs = slice_1d(&classes, "classes")?;
    py.allow_threads(|| encode(xs, ys, cs, precision))
        .map_err(map_encode_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(linestring, m)?)?;
    Ok(())
}
