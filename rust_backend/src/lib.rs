//! Longitude normalization core for region masking.
//!
//! Region outlines and grid coordinates have to share a longitude convention
//! before overlap tests make sense. This crate detects whether longitudes use
//! `[0, 360)` or `[-180, 180)` and converts them, rejecting inputs where the
//! convention cannot be inferred or where wrapping would merge coordinates.
//!
//! # Example
//!
//! ```
//! use regionmask_rust::{normalize_longitudes, LonError, WrapMode};
//!
//! let lon = normalize_longitudes(vec![-90.0, 0.0, 90.0], WrapMode::Auto).unwrap();
//! assert_eq!(lon.values(), &[270.0, 0.0, 90.0]);
//!
//! let err = normalize_longitudes(vec![-10.0, 350.0], WrapMode::Auto).unwrap_err();
//! assert!(matches!(err, LonError::AmbiguousRange { .. }));
//! ```

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod config;
pub mod coordinates;
pub mod error;
#[cfg(feature = "python")]
pub mod python;

pub use config::LongitudeConfig;
pub use coordinates::{
    normalize_longitudes, reduce_to_180, reduce_to_360, Convention, LonArray, WrapMode,
};
pub use error::{LonError, LonResult};

/// regionmask Rust core - longitude normalization
#[cfg(feature = "python")]
#[pymodule]
fn regionmask_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_wrap_functions(m)?;
    Ok(())
}
