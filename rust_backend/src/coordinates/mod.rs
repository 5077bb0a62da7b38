//! Longitude conventions and normalization.
//!
//! Longitudes come in two canonical conventions, `[0, 360)` and
//! `[-180, 180)`. Comparing region outlines against grid coordinates only
//! works when both use the same one, so this module provides the tools to
//! detect and convert between them.
//!
//! # Modules
//!
//! - [`wrap`]: Element-wise reduction onto either convention
//! - [`mode`]: The [`WrapMode`] selector and the [`Convention`] type
//! - [`array`]: [`LonArray`], an owned n-dimensional longitude array
//! - [`normalize`]: Convention detection and [`normalize_longitudes`]

pub mod array;
pub mod mode;
pub mod normalize;
pub mod wrap;


pub use array::LonArray;
pub use mode::{Convention, WrapMode};
pub use normalize::{normalize_longitudes, target_convention};
pub use wrap::{reduce_to_180, reduce_to_360, wrap_180, wrap_360};
