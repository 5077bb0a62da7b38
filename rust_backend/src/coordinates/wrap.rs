//! Reduction of longitudes onto the two canonical conventions.
//!
//! * [`wrap_360`] / [`reduce_to_360`] map any angle into `[0, 360)`.
//! * [`wrap_180`] / [`reduce_to_180`] map any angle into `[-180, 180)`.
//!
//! Both use floored (Euclidean) modulo, so negative inputs land on the
//! positive side: `-10 → 350`, `370 → 10`, `360 → 0`.
//!
//! The slice forms always return a freshly allocated vector and never touch
//! the caller's data.
//!
//! IEEE‑754 note: `NaN`/`±∞` inputs produce `NaN`.
//!
//! # Example
//!
//! ```
//! use regionmask_rust::coordinates::wrap::{reduce_to_180, reduce_to_360};
//!
//! assert_eq!(reduce_to_360(&[-10.0, 370.0]), vec![350.0, 10.0]);
//! assert_eq!(reduce_to_180(&[190.0, 180.0]), vec![-170.0, -180.0]);
//! ```

use qtty::Degrees;

/// One full turn in degrees.
pub const FULL_TURN: f64 = 360.0;
/// Half a turn in degrees.
pub const HALF_TURN: f64 = 180.0;

/// Wrap a single angle into `[0, 360)`.
#[inline]
pub fn wrap_360(deg: f64) -> f64 {
    let wrapped = Degrees::new(deg).wrap_pos().value();
    // rem_euclid rounds tiny negative inputs up to exactly one full turn
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Wrap a single angle into `[-180, 180)`.
///
/// Values already inside the range are returned untouched.
#[inline]
pub fn wrap_180(deg: f64) -> f64 {
    if (-HALF_TURN..HALF_TURN).contains(&deg) {
        deg
    } else {
        wrap_360(deg + HALF_TURN) - HALF_TURN
    }
}

/// Reduce every value to the `[0, 360)` convention.
pub fn reduce_to_360(values: &[f64]) -> Vec<f64> {
    values.iter().copied().map(wrap_360).collect()
}

/// Reduce every value to the `[-180, 180)` convention.
pub fn reduce_to_180(values: &[f64]) -> Vec<f64> {
    values.iter().copied().map(wrap_180).collect()
}
