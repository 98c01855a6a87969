// crates/shared-kernel/src/value_objects/number.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Largest magnitude at which every `f64` is already an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0; // 2^52

/// A floating point value that is guaranteed not to be NaN.
///
/// Infinities are allowed; they order and compare like any other value.
/// Serialized as a plain number when finite and as the text `"inf"` or
/// `"-inf"` otherwise, since formats such as JSON have no infinity literal.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "NumberRepr", into = "NumberRepr")]
pub struct Number(f64);

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Finite(f64),
    Text(String),
}

impl Number {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Validates `value`, reporting a NaN as an invalid `field`.
    pub fn named(value: f64, field: &str) -> DomainResult<Self> {
        if value.is_nan() {
            return Err(DomainError::invalid_value(field, "NaN"));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn new(value: f64) -> DomainResult<Self> {
        Self::named(value, "number")
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Number of digits after the decimal point in the shortest textual form
    /// of this value (`0.25` has two, `2` and `2.0` have none).
    ///
    /// The text is always positional, never exponent notation: `1.5e-7` is
    /// read as `0.00000015` and has eight places.
    pub fn decimal_places(self) -> u32 {
        let text = self.0.to_string();
        text.split_once('.')
            .map_or(0, |(_, fraction)| u32::try_from(fraction.len()).unwrap_or(u32::MAX))
    }

    /// Rounds half up to `places` fractional digits.
    #[inline]
    pub fn round_to(self, places: u32) -> Self {
        Self(round_half_up(self.0, places))
    }

    /// Returns `self` clamped to `[lower, upper]`.
    #[inline]
    pub fn clamp_to(self, lower: Self, upper: Self) -> Self {
        Self(self.0.max(lower.0).min(upper.0))
    }
}

/// Rounds `value` half up to `places` fractional digits.
///
/// Values that cannot be scaled without overflowing are returned as is, as
/// are values already too large to carry a fractional part.
pub fn round_half_up(value: f64, places: u32) -> f64 {
    if places == 0 {
        return value;
    }
    let Ok(exponent) = i32::try_from(places) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }
    (scaled + 0.5).floor() / factor
}

impl Default for Number {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Number {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<NumberRepr> for Number {
    type Error = DomainError;

    fn try_from(repr: NumberRepr) -> Result<Self, Self::Error> {
        match repr {
            NumberRepr::Finite(value) => Self::new(value),
            NumberRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Number> for NumberRepr {
    fn from(value: Number) -> Self {
        if value.is_finite() {
            Self::Finite(value.0)
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Number> for f64 {
    fn eq(&self, other: &Number) -> bool {
        *self == other.0
    }
}

impl FromStr for Number {
    type Err = DomainError;

    /// Parses decimal text the way `f64` does, after trimming surrounding
    /// whitespace. Blank text and `NaN` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_value("number", format!("{s:?}")));
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .map(Self)
            .ok_or_else(|| DomainError::invalid_value("number", format!("{s:?}")))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
