// crates/domain/src/range.rs
use std::fmt;

use log::{debug, trace};
use numeric_range_shared_kernel::{DomainError, DomainResult, Number, NumericInput};
use serde::{Deserialize, Serialize};

use crate::{options::BoundaryPolicy, steps::Steps};

const MIN_FIELD: &str = "minimal value of the range";
const MAX_FIELD: &str = "maximal value of the range";
const STEP_FIELD: &str = "step";

/// Most values [`Range::enumerate_by`] will materialize. Longer walks are
/// still available lazily through [`Range::steps`].
pub const MAX_ENUMERATION_LEN: usize = 1 << 26;

/// A closed numeric interval `[min, max]`.
///
/// Both bounds belong to the range. Every write goes through the same
/// validation, so `min <= max` (or `min < max` under
/// [`BoundaryPolicy::Strict`]) holds for every value of this type.
///
/// Bounds are coerced: numeric text such as `"2.5"` is accepted by
/// [`Range::new`], [`Range::set_min`] and [`Range::set_max`]. The operations
/// ([`Range::enumerate_by`], [`Range::includes`], [`Range::incorporate`])
/// only accept numeric-typed input.
///
/// # Examples
///
/// ```rust
/// # use numeric_range_domain::Range;
/// let mut range = Range::new(1, 5).unwrap();
/// assert_eq!(range.enumerate().unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!(range.includes(5).unwrap());
/// assert_eq!(range.incorporate(9).unwrap(), 5.0);
///
/// assert!(range.set_max(0).is_err());
/// assert_eq!(range.max(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct Range {
    min: Number,
    max: Number,
    policy: BoundaryPolicy,
}

impl Range {
    /// Creates `[min, max]`, accepting single-valued ranges.
    pub fn new(min: impl NumericInput, max: impl NumericInput) -> DomainResult<Self> {
        Self::with_policy(min, max, BoundaryPolicy::default())
    }

    /// Creates `[min, max]` validated under `policy`.
    pub fn with_policy(
        min: impl NumericInput,
        max: impl NumericInput,
        policy: BoundaryPolicy,
    ) -> DomainResult<Self> {
        let min = min.coerce_number(MIN_FIELD)?;
        // No upper bound exists yet, so the lower one is taken as is and the
        // upper bound's setter performs the cross-check.
        let mut range = Self { min, max: min, policy };
        range.set_max(max)?;
        trace!("created range {range} ({policy})");
        Ok(range)
    }

    /// Lower bound.
    #[inline]
    pub const fn min(&self) -> f64 {
        self.min.value()
    }

    /// Upper bound.
    #[inline]
    pub const fn max(&self) -> f64 {
        self.max.value()
    }

    /// How equal bounds are treated.
    #[inline]
    pub const fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Replaces the lower bound. On error the range is left untouched.
    pub fn set_min(&mut self, min: impl NumericInput) -> DomainResult<()> {
        let min = min.coerce_number(MIN_FIELD)?;
        self.policy.check(min, self.max).inspect_err(|err| {
            debug!("rejected lower bound {min} for {self}: {err}");
        })?;
        self.min = min;
        Ok(())
    }

    /// Replaces the upper bound. On error the range is left untouched.
    pub fn set_max(&mut self, max: impl NumericInput) -> DomainResult<()> {
        let max = max.coerce_number(MAX_FIELD)?;
        self.policy.check(self.min, max).inspect_err(|err| {
            debug!("rejected upper bound {max} for {self}: {err}");
        })?;
        self.max = max;
        Ok(())
    }

    /// Values from `min` to `max` in steps of one.
    pub fn enumerate(&self) -> DomainResult<Vec<f64>> {
        self.enumerate_by(Number::ONE)
    }

    /// Values from `min` up to `max` in increments of `step`.
    ///
    /// `max` is included only when it falls on a step. Each value is rounded
    /// to as many decimal places as `step` has, so `0.25` yields two-place
    /// values free of accumulated floating point error.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidValue`] when `step` is not numeric or is NaN.
    /// [`DomainError::InvalidArgument`] when it is not positive, the range
    /// has an infinite bound, or the walk is longer than
    /// [`MAX_ENUMERATION_LEN`].
    pub fn enumerate_by(&self, step: impl NumericInput) -> DomainResult<Vec<f64>> {
        let steps = self.steps(step)?;
        if steps.len() > MAX_ENUMERATION_LEN {
            debug!("refused to materialize {} values from {self}", steps.len());
            return Err(DomainError::invalid_argument(
                STEP_FIELD,
                format!(
                    "enumerating {self} would produce {} values, more than {MAX_ENUMERATION_LEN}",
                    steps.len()
                ),
            ));
        }
        let values: Vec<f64> = steps.collect();
        trace!("enumerated {} values from {self}", values.len());
        Ok(values)
    }

    /// Lazy form of [`Range::enumerate_by`].
    pub fn steps(&self, step: impl NumericInput) -> DomainResult<Steps> {
        let step = step.to_number(STEP_FIELD)?;
        if step.value() <= 0.0 {
            debug!("rejected step {step} for {self}");
            return Err(DomainError::invalid_argument(
                STEP_FIELD,
                format!("the step must be a positive number, got {step}"),
            ));
        }
        Steps::new(self.min, self.max, step)
    }

    /// Returns `true` if `min <= value <= max`.
    pub fn includes(&self, value: impl NumericInput) -> DomainResult<bool> {
        let value = value.to_number("number to check")?;
        Ok(self.min <= value && value <= self.max)
    }

    /// Returns `value` clamped into the range.
    pub fn incorporate(&self, value: impl NumericInput) -> DomainResult<f64> {
        let value = value.to_number("number to incorporate")?;
        Ok(value.clamp_to(self.min, self.max).value())
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = DomainError;

    fn try_from((min, max): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

/// Serialized shape of a [`Range`]; deserializing validates like construction.
#[derive(Serialize, Deserialize)]
struct RangeRepr {
    min: Number,
    max: Number,
    #[serde(default, skip_serializing_if = "BoundaryPolicy::is_default")]
    policy: BoundaryPolicy,
}

impl TryFrom<RangeRepr> for Range {
    type Error = DomainError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        Self::with_policy(repr.min, repr.max, repr.policy)
    }
}

impl From<Range> for RangeRepr {
    fn from(range: Range) -> Self {
        Self { min: range.min, max: range.max, policy: range.policy }
    }
}
