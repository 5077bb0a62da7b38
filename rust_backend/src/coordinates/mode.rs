//! Wrap mode selector and longitude conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::wrap::{reduce_to_180, reduce_to_360, FULL_TURN, HALF_TURN};
use crate::error::LonError;

/// How [`normalize_longitudes`](super::normalize::normalize_longitudes)
/// treats its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawWrapMode", into = "String")]
pub enum WrapMode {
    /// Infer the current convention from the data and flip to the other one
    /// when needed.
    #[default]
    Auto,
    /// Leave the longitudes untouched.
    Off,
    /// Always reduce to `[-180, 180)`.
    Force180,
    /// Always reduce to `[0, 360)`.
    Force360,
}

impl WrapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WrapMode::Auto => "auto",
            WrapMode::Off => "off",
            WrapMode::Force180 => "180",
            WrapMode::Force360 => "360",
        }
    }

    /// The convention this mode forces, if any.
    pub fn forced(&self) -> Option<Convention> {
        match self {
            WrapMode::Force180 => Some(Convention::Lon180),
            WrapMode::Force360 => Some(Convention::Lon360),
            WrapMode::Auto | WrapMode::Off => None,
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for WrapMode {
    fn from(flag: bool) -> Self {
        if flag {
            WrapMode::Auto
        } else {
            WrapMode::Off
        }
    }
}

impl TryFrom<i64> for WrapMode {
    type Error = LonError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            180 => Ok(WrapMode::Force180),
            360 => Ok(WrapMode::Force360),
            other => Err(LonError::InvalidMode(other.to_string())),
        }
    }
}

impl FromStr for WrapMode {
    type Err = LonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "true" => Ok(WrapMode::Auto),
            "off" | "false" | "none" => Ok(WrapMode::Off),
            "180" => Ok(WrapMode::Force180),
            "360" => Ok(WrapMode::Force360),
            _ => Err(LonError::InvalidMode(s.to_string())),
        }
    }
}

impl From<WrapMode> for String {
    fn from(mode: WrapMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Any of the spellings a config file may use for the wrap mode.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawWrapMode {
    Flag(bool),
    Code(i64),
    Name(String),
}

impl TryFrom<RawWrapMode> for WrapMode {
    type Error = LonError;

    fn try_from(raw: RawWrapMode) -> Result<Self, Self::Error> {
        match raw {
            RawWrapMode::Flag(flag) => Ok(WrapMode::from(flag)),
            RawWrapMode::Code(code) => WrapMode::try_from(code),
            RawWrapMode::Name(name) => name.parse(),
        }
    }
}

/// One of the two canonical half-open longitude ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Convention {
    /// `[-180, 180)`
    Lon180,
    /// `[0, 360)`
    Lon360,
}

impl Convention {
    /// Inclusive lower and exclusive upper bound.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Convention::Lon180 => (-HALF_TURN, HALF_TURN),
            Convention::Lon360 => (0.0, FULL_TURN),
        }
    }

    pub fn contains(&self, deg: f64) -> bool {
        let (lo, hi) = self.bounds();
        (lo..hi).contains(&deg)
    }

    /// Reduce `values` onto this convention.
    pub fn reduce(&self, values: &[f64]) -> Vec<f64> {
        match self {
            Convention::Lon180 => reduce_to_180(values),
            Convention::Lon360 => reduce_to_360(values),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Lon180 => f.write_str("[-180, 180)"),
            Convention::Lon360 => f.write_str("[0, 360)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_auto() {
        assert_eq!(WrapMode::default(), WrapMode::Auto);
    }

    #[test]
    fn from_bool() {
        assert_eq!(WrapMode::from(true), WrapMode::Auto);
        assert_eq!(WrapMode::from(false), WrapMode::Off);
    }

    #[test]
    fn try_from_code() {
        assert_eq!(WrapMode::try_from(180_i64).unwrap(), WrapMode::Force180);
        assert_eq!(WrapMode::try_from(360_i64).unwrap(), WrapMode::Force360);
        assert!(matches!(
            WrapMode::try_from(90_i64),
            Err(LonError::InvalidMode(_))
        ));
    }

    #[test]
    fn parse_names() {
        assert_eq!("auto".parse::<WrapMode>().unwrap(), WrapMode::Auto);
        assert_eq!(" True ".parse::<WrapMode>().unwrap(), WrapMode::Auto);
        assert_eq!("OFF".parse::<WrapMode>().unwrap(), WrapMode::Off);
        assert_eq!("false".parse::<WrapMode>().unwrap(), WrapMode::Off);
        assert_eq!("180".parse::<WrapMode>().unwrap(), WrapMode::Force180);
        assert_eq!("360".parse::<WrapMode>().unwrap(), WrapMode::Force360);
        assert!("270".parse::<WrapMode>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in [
            WrapMode::Auto,
            WrapMode::Off,
            WrapMode::Force180,
            WrapMode::Force360,
        ] {
            assert_eq!(mode.to_string().parse::<WrapMode>().unwrap(), mode);
        }
    }

    #[test]
    fn deserialize_any_spelling() {
        let from_bool: WrapMode = serde_json::from_str("false").unwrap();
        let from_int: WrapMode = serde_json::from_str("360").unwrap();
        let from_str: WrapMode = serde_json::from_str("\"180\"").unwrap();
        assert_eq!(from_bool, WrapMode::Off);
        assert_eq!(from_int, WrapMode::Force360);
        assert_eq!(from_str, WrapMode::Force180);
        assert!(serde_json::from_str::<WrapMode>("45").is_err());
    }

    #[test]
    fn serialize_canonical_token() {
        assert_eq!(serde_json::to_string(&WrapMode::Force360).unwrap(), "\"360\"");
        assert_eq!(serde_json::to_string(&WrapMode::Auto).unwrap(), "\"auto\"");
    }

    #[test]
    fn forced_convention() {
        assert_eq!(WrapMode::Force180.forced(), Some(Convention::Lon180));
        assert_eq!(WrapMode::Force360.forced(), Some(Convention::Lon360));
        assert_eq!(WrapMode::Auto.forced(), None);
    }

    #[test]
    fn convention_contains_is_half_open() {
        assert!(Convention::Lon180.contains(-180.0));
        assert!(!Convention::Lon180.contains(180.0));
        assert!(Convention::Lon360.contains(0.0));
        assert!(!Convention::Lon360.contains(360.0));
    }

    #[test]
    fn convention_reduce() {
        assert_eq!(Convention::Lon360.reduce(&[-90.0]), vec![270.0]);
        assert_eq!(Convention::Lon180.reduce(&[270.0]), vec![-90.0]);
    }
}
