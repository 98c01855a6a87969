// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use numeric_range_shared_kernel::{DomainError, DomainResult, Number};
use serde::{Deserialize, Serialize};

/// Whether a range may collapse to a single point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// `min == max` is a valid, single-valued range.
    #[default]
    Inclusive,
    /// The bounds must differ.
    Strict,
}

impl BoundaryPolicy {
    /// Returns `true` when `[min, max]` satisfies the ordering invariant.
    #[inline]
    pub fn permits(self, min: Number, max: Number) -> bool {
        match self {
            Self::Inclusive => min <= max,
            Self::Strict => min < max,
        }
    }

    pub(crate) fn check(self, min: Number, max: Number) -> DomainResult<()> {
        if self.permits(min, max) {
            Ok(())
        } else {
            Err(DomainError::invalid_ordering(min, max))
        }
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for BoundaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inclusive" => Ok(Self::Inclusive),
            "strict" => Ok(Self::Strict),
            other => Err(format!("Unknown boundary policy: {other}")),
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inclusive => "inclusive",
            Self::Strict => "strict",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: f64) -> Number {
        Number::new(v).unwrap()
    }

    #[test]
    fn equality_depends_on_policy() {
        assert!(BoundaryPolicy::Inclusive.permits(n(2.0), n(2.0)));
        assert!(!BoundaryPolicy::Strict.permits(n(2.0), n(2.0)));
        assert!(BoundaryPolicy::Strict.permits(n(1.0), n(2.0)));
        assert!(!BoundaryPolicy::Inclusive.permits(n(3.0), n(2.0)));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Strict".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Strict));
        assert_eq!(" inclusive ".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Inclusive));
        assert!("open".parse::<BoundaryPolicy>().is_err());
    }
}
