//! Convention detection and longitude normalization.
//!
//! [`normalize_longitudes`] decides whether the input has to move to the
//! other canonical convention and rejects inputs that cannot be converted
//! safely:
//!
//! 1. With [`WrapMode::Auto`], data that is both `< 0` and `> 180` is
//!    ambiguous and rejected with [`LonError::AmbiguousRange`].
//! 2. The target convention is chosen from the mode and the range of the
//!    *original* data (see [`target_convention`]).
//! 3. One-dimensional results must hold pairwise distinct values, otherwise
//!    [`LonError::DuplicateCoordinates`] is returned.
//!
//! # Example
//!
//! ```
//! use regionmask_rust::coordinates::{normalize_longitudes, WrapMode};
//!
//! let lon = normalize_longitudes(vec![0.0, 90.0, 270.0], WrapMode::Auto).unwrap();
//! assert_eq!(lon.values(), &[0.0, 90.0, -90.0]);
//! ```

use log::{debug, warn};

use super::array::LonArray;
use super::mode::{Convention, WrapMode};
use super::wrap::HALF_TURN;
use crate::error::{LonError, LonResult};

/// Pick the convention to reduce to, given the mode and the range of the
/// original data.
///
/// The `[-180, 180)` and `[0, 360)` triggers are evaluated independently;
/// when both fire, `[0, 360)` wins. Under [`WrapMode::Auto`] both can only
/// fire for data that [`normalize_longitudes`] already rejects as ambiguous.
pub fn target_convention(mode: WrapMode, min: f64, max: f64) -> Option<Convention> {
    let to_180 = mode == WrapMode::Force180 || (mode == WrapMode::Auto && max > HALF_TURN);
    let to_360 = mode == WrapMode::Force360 || (mode == WrapMode::Auto && min < 0.0);

    let mut target = None;
    if to_180 {
        target = Some(Convention::Lon180);
    }
    if to_360 {
        target = Some(Convention::Lon360);
    }
    target
}

/// Normalize longitudes to a canonical convention.
///
/// A scalar is treated as a length-1 array. The caller's data is never
/// modified; the result is always a new array of the same shape.
///
/// # Errors
/// * [`LonError::AmbiguousRange`] if `mode` is [`WrapMode::Auto`] and the data
///   holds values `< 0` as well as `> 180`.
/// * [`LonError::DuplicateCoordinates`] if the result is one-dimensional and
///   two of its values are equal.
///
/// [`WrapMode::Off`] returns the input as is and runs neither check.
pub fn normalize_longitudes<L: Into<LonArray>>(lon: L, mode: WrapMode) -> LonResult<LonArray> {
    let lon = lon.into();

    if mode == WrapMode::Off {
        return Ok(lon);
    }

    let (Some(min), Some(max)) = (lon.min(), lon.max()) else {
        return Ok(lon);
    };

    if mode == WrapMode::Auto && min < 0.0 && max > HALF_TURN {
        warn!(
            "Cannot infer longitude convention: min = {}, max = {}",
            min, max
        );
        return Err(LonError::AmbiguousRange { min, max });
    }

    let normalized = match target_convention(mode, min, max) {
        Some(convention) => {
            debug!(
                "Wrapping {} longitudes to {} (mode = {}, min = {}, max = {})",
                lon.len(),
                convention,
                mode,
                min,
                max
            );
            lon.with_values(convention.reduce(lon.values()))
        }
        None => {
            debug!(
                "Longitudes left unchanged (mode = {}, min = {}, max = {})",
                mode, min, max
            );
            lon
        }
    };

    if normalized.ndim() == 1 {
        if let Some(value) = normalized.first_duplicate() {
            warn!("Equal longitude coordinates after wrapping: {}", value);
            return Err(LonError::DuplicateCoordinates { value });
        }
    }

    Ok(normalized)
}
