use pyo3::exceptions::{PyIndexError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBool;

use crate::coordinates::{normalize_longitudes, reduce_to_180, reduce_to_360, LonArray, WrapMode};
use crate::error::LonError;

pyo3::create_exception!(
    regionmask_rust,
    AmbiguousRangeError,
    PyRuntimeError,
    "Longitudes hold values below 0 and above 180; the convention cannot be inferred."
);
pyo3::create_exception!(
    regionmask_rust,
    DuplicateCoordinateError,
    PyIndexError,
    "Two longitudes are equal after wrapping."
);

impl From<LonError> for PyErr {
    fn from(err: LonError) -> Self {
        match err {
            LonError::AmbiguousRange { .. } => AmbiguousRangeError::new_err(err.to_string()),
            LonError::DuplicateCoordinates { .. } => {
                DuplicateCoordinateError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Accept a float, a list of floats or a list of equally long lists.
fn extract_lon(obj: &Bound<'_, PyAny>) -> PyResult<LonArray> {
    if let Ok(value) = obj.extract::<f64>() {
        return Ok(LonArray::from(value));
    }
    if let Ok(values) = obj.extract::<Vec<f64>>() {
        return Ok(LonArray::from(values));
    }
    let rows: Vec<Vec<f64>> = obj.extract().map_err(|_| {
        PyValueError::new_err("lon must be a float, a list of floats or a list of lists of floats")
    })?;
    Ok(LonArray::from_rows(rows)?)
}

/// Accept `True`/`False`, `180`/`360` or one of the mode names.
fn extract_mode(obj: Option<&Bound<'_, PyAny>>) -> PyResult<WrapMode> {
    let Some(obj) = obj else {
        return Ok(WrapMode::Auto);
    };
    if obj.is_instance_of::<PyBool>() {
        return Ok(WrapMode::from(obj.extract::<bool>()?));
    }
    if let Ok(code) = obj.extract::<i64>() {
        return Ok(WrapMode::try_from(code)?);
    }
    let name: String = obj.extract()?;
    Ok(name.parse::<WrapMode>()?)
}

fn lon_to_py<'py>(py: Python<'py>, lon: LonArray) -> PyResult<Bound<'py, PyAny>> {
    match lon.rows() {
        Some(rows) => Ok(rows.into_pyobject(py)?.into_any()),
        None => Ok(lon.into_values().into_pyobject(py)?.into_any()),
    }
}

/// Wrap longitudes to [0, 360)
#[pyfunction]
pub fn wrap_angle_360<'py>(py: Python<'py>, lon: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    let lon = extract_lon(lon)?;
    let wrapped = LonArray::from_shape(lon.shape().to_vec(), reduce_to_360(lon.values()))?;
    lon_to_py(py, wrapped)
}

/// Wrap longitudes to [-180, 180)
#[pyfunction]
pub fn wrap_angle_180<'py>(py: Python<'py>, lon: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    let lon = extract_lon(lon)?;
    let wrapped = LonArray::from_shape(lon.shape().to_vec(), reduce_to_180(lon.values()))?;
    lon_to_py(py, wrapped)
}

/// Wrap longitudes to the other convention if needed
///
/// `wrap_lon` defaults to auto-detection (`True`).
#[pyfunction]
#[pyo3(signature = (lon, wrap_lon=None))]
pub fn wrap_angle<'py>(
    py: Python<'py>,
    lon: &Bound<'py, PyAny>,
    wrap_lon: Option<&Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyAny>> {
    let lon = extract_lon(lon)?;
    let mode = extract_mode(wrap_lon)?;
    let normalized = normalize_longitudes(lon, mode)?;
    lon_to_py(py, normalized)
}

pub fn register_wrap_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wrap_angle, m)?)?;
    m.add_function(wrap_pyfunction!(wrap_angle_180, m)?)?;
    m.add_function(wrap_pyfunction!(wrap_angle_360, m)?)?;
    m.add("AmbiguousRangeError", m.py().get_type::<AmbiguousRangeError>())?;
    m.add(
        "DuplicateCoordinateError",
        m.py().get_type::<DuplicateCoordinateError>(),
    )?;
    Ok(())
}
