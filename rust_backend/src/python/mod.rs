//! Python bindings for longitude normalization.
//!
//! This module exposes the [`coordinates`](crate::coordinates) functions to
//! Python via PyO3, so the masking library can hand its region outlines and
//! grid coordinates to the Rust core.
//!
//! # Modules
//!
//! - [`wrap_bindings`]: `wrap_angle`, `wrap_angle_180`, `wrap_angle_360` and
//!   the exception types they raise
//!
//! # Python API
//!
//! All functions are available in the `regionmask_rust` Python module after
//! building with the `extension-module` feature.

pub mod wrap_bindings;

pub use wrap_bindings::*;
