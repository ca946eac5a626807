use linestring_runs::EncodeError;
use numpy::{Element, PyReadonlyArrayDyn, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Borrow a 1-D, contiguous NumPy array as a slice.
pub fn slice_1d<'a, T: Element>(
    arr: &'a PyReadonlyArrayDyn<'_, T>,
    label: &str,
) -> PyResult<&'a [T]> {
    let dims = arr.ndim();
    if dims != 1 {
        return Err(PyValueError::new_err(format!(
            "Expected 1d array for {label}, but found {dims}"
        )));
    }
    arr.as_slice()
        .map_err(|_| PyValueError::new_err(format!("{label} must be a contiguous array")))
}

pub fn map_encode_err(err: EncodeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
