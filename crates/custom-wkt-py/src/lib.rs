//! PyO3 bindings exposing the run encoder as the `custom_wkt` module.
//!
//! Notes
//! - Keep bindings thin: NumPy arrays are borrowed as slices, validation and
//!   encoding stay in `linestring_runs`.
//! - Errors surface as `ValueError` carrying the core error message.

mod common;
mod linestring;

use pyo3::prelude::*;

/// Convert floating point point streams to WKT strings.
#[pymodule]
fn custom_wkt(_py: Python, m: &PyModule) -> PyResult<()> {
    linestring::register(m)?;
    m.add("__version__", linestring_runs::VERSION)?;
    Ok(())
}
