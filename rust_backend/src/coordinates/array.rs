//! Owned longitude arrays.
//!
//! [`LonArray`] stores its values flat in row-major order next to a shape, so
//! 1-D coordinate vectors and 2-D curvilinear grids go through the same code.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::error::{LonError, LonResult};

/// An n-dimensional array of longitudes in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LonArrayParts")]
pub struct LonArray {
    values: Vec<f64>,
    shape: Vec<usize>,
}

/// Unchecked serialized form, validated through [`LonArray::from_shape`].
#[derive(Deserialize)]
struct LonArrayParts {
    values: Vec<f64>,
    shape: Vec<usize>,
}

impl TryFrom<LonArrayParts> for LonArray {
    type Error = LonError;

    fn try_from(parts: LonArrayParts) -> Result<Self, Self::Error> {
        LonArray::from_shape(parts.shape, parts.values)
    }
}

impl LonArray {
    /// Build an array from a shape and its row-major values.
    pub fn from_shape(shape: Vec<usize>, values: Vec<f64>) -> LonResult<Self> {
        let expected: usize = shape.iter().product();
        if expected != values.len() {
            return Err(LonError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { values, shape })
    }

    /// Build a 2-D array from equally long rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> LonResult<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != ncols) {
            return Err(LonError::ShapeMismatch {
                expected: ncols,
                actual: row.len(),
            });
        }
        let nrows = rows.len();
        let values: Vec<f64> = rows.into_iter().flatten().collect();
        Self::from_shape(vec![nrows, ncols], values)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Smallest value, `NaN` if any value is `NaN`, `None` when empty.
    pub fn min(&self) -> Option<f64> {
        self.fold_propagating_nan(f64::min)
    }

    /// Largest value, `NaN` if any value is `NaN`, `None` when empty.
    pub fn max(&self) -> Option<f64> {
        self.fold_propagating_nan(f64::max)
    }

    fn fold_propagating_nan(&self, pick: fn(f64, f64) -> f64) -> Option<f64> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, x| {
            if acc.is_nan() || x.is_nan() {
                f64::NAN
            } else {
                pick(acc, x)
            }
        }))
    }

    /// Rows of a 2-D array; `None` for any other dimensionality.
    pub fn rows(&self) -> Option<Vec<Vec<f64>>> {
        match self.shape.as_slice() {
            [_, 0] => Some(vec![Vec::new(); self.shape[0]]),
            [_, ncols] => Some(self.values.chunks(*ncols).map(<[f64]>::to_vec).collect()),
            _ => None,
        }
    }

    /// The first value that occurs more than once, if any.
    ///
    /// `-0.0` equals `0.0` and all `NaN`s are considered equal to each other.
    pub fn first_duplicate(&self) -> Option<f64> {
        let mut sorted: Vec<f64> = self.values.iter().copied().filter(|x| !x.is_nan()).collect();
        if self.values.len() - sorted.len() > 1 {
            return Some(f64::NAN);
        }
        // total_cmp keeps -0.0 and 0.0 next to each other
        sorted.sort_by(f64::total_cmp);
        sorted
            .windows(2)
            .find(|pair| pair[0] == pair[1])
            .map(|pair| pair[0])
    }

    pub fn has_unique_values(&self) -> bool {
        self.first_duplicate().is_none()
    }

    /// Same shape, new values.
    pub(crate) fn with_values(&self, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), self.values.len());
        Self {
            values,
            shape: self.shape.clone(),
        }
    }

    pub fn to_degrees(&self) -> Vec<Degrees> {
        self.values.iter().copied().map(Degrees::new).collect()
    }
}

impl From<f64> for LonArray {
    fn from(value: f64) -> Self {
        Self {
            values: vec![value],
            shape: vec![1],
        }
    }
}

impl From<Vec<f64>> for LonArray {
    fn from(values: Vec<f64>) -> Self {
        let shape = vec![values.len()];
        Self { values, shape }
    }
}

impl From<&[f64]> for LonArray {
    fn from(values: &[f64]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for LonArray {
    fn from(values: [f64; N]) -> Self {
        Self::from(values.to_vec())
    }
}

impl From<&[Degrees]> for LonArray {
    fn from(values: &[Degrees]) -> Self {
        Self::from(values.iter().map(|d| d.value()).collect::<Vec<f64>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_is_promoted() {
        let arr = LonArray::from(45.0);
        assert_eq!(arr.shape(), &[1]);
        assert_eq!(arr.values(), &[45.0]);
        assert_eq!(arr.ndim(), 1);
    }

    #[test]
    fn from_shape_checks_length() {
        let ok = LonArray::from_shape(vec![2, 2], vec![0.0, 1.0, 2.0, 3.0]);
        assert!(ok.is_ok());

        let err = LonArray::from_shape(vec![2, 3], vec![0.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            LonError::ShapeMismatch {
                expected: 6,
                actual: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let grid = LonArray::from_rows(vec![vec![0.0, 10.0], vec![0.0, 10.0]]).unwrap();
        assert_eq!(grid.shape(), &[2, 2]);
        assert_eq!(grid.ndim(), 2);

        let ragged = LonArray::from_rows(vec![vec![0.0, 10.0], vec![0.0]]);
        assert!(matches!(ragged, Err(LonError::ShapeMismatch { .. })));

        // total count matches 3 x 2, but the rows do not line up
        let misaligned = LonArray::from_rows(vec![vec![0.0, 1.0], vec![2.0], vec![3.0, 4.0, 5.0]]);
        assert_eq!(
            misaligned.unwrap_err(),
            LonError::ShapeMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rows_round_trip() {
        let rows = vec![vec![0.0, 10.0, 20.0], vec![30.0, 40.0, 50.0]];
        let grid = LonArray::from_rows(rows.clone()).unwrap();
        assert_eq!(grid.rows(), Some(rows));
        assert_eq!(LonArray::from(vec![1.0, 2.0]).rows(), None);
    }

    #[test]
    fn min_max() {
        let arr = LonArray::from(vec![10.0, -5.0, 200.0]);
        assert_eq!(arr.min(), Some(-5.0));
        assert_eq!(arr.max(), Some(200.0));

        let empty = LonArray::from(Vec::<f64>::new());
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn min_max_propagate_nan() {
        let arr = LonArray::from(vec![10.0, f64::NAN, 200.0]);
        assert!(arr.min().unwrap().is_nan());
        assert!(arr.max().unwrap().is_nan());
    }

    #[test]
    fn duplicates() {
        assert!(LonArray::from(vec![0.0, 90.0, -90.0]).has_unique_values());
        assert_eq!(
            LonArray::from(vec![10.0, -180.0, -180.0]).first_duplicate(),
            Some(-180.0)
        );
    }

    #[test]
    fn signed_zero_and_nan_collide() {
        assert!(!LonArray::from(vec![-0.0, 0.0]).has_unique_values());
        assert!(!LonArray::from(vec![f64::NAN, 1.0, f64::NAN]).has_unique_values());
    }

    #[test]
    fn deserialize_validates_shape() {
        let arr: LonArray =
            serde_json::from_str(r#"{"values": [0.0, 1.0], "shape": [2, 1]}"#).unwrap();
        assert_eq!(arr.ndim(), 2);

        let bad = serde_json::from_str::<LonArray>(r#"{"values": [0.0], "shape": [2]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn degrees_interop() {
        let degs = [Degrees::new(-10.0), Degrees::new(20.0)];
        let arr = LonArray::from(&degs[..]);
        assert_eq!(arr.values(), &[-10.0, 20.0]);
        let back = arr.to_degrees();
        assert_eq!(back[1].value(), 20.0);
    }
}
