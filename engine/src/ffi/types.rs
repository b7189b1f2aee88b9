//! Error conversion for the FFI boundary

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::error::IsaacError;

/// Map an engine error onto the closest Python exception
pub fn isaac_error_to_py(err: IsaacError) -> PyErr {
    match err {
        IsaacError::Io(msg) => PyIOError::new_err(msg),
        other => PyValueError::new_err(other.to_string()),
    }
}
