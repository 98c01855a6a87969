// crates/domain/src/steps.rs
use std::iter::FusedIterator;

use numeric_range_shared_kernel::{DomainError, DomainResult, Number, round_half_up};

/// Iterator over the on-step values of a closed range.
///
/// Term `i` is computed as `start + i * step` and rounded to the number of
/// decimal places of `step`, so rounding error never accumulates across terms.
/// Clones advance independently.
///
/// ```rust
/// # use numeric_range_domain::Range;
/// let range = Range::new(0, 1).unwrap();
/// let values: Vec<_> = range.steps(0.25).unwrap().collect();
/// assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Steps {
    start: f64,
    step: f64,
    places: u32,
    front: usize,
    back: usize,
}

impl Steps {
    /// Plans the walk from `start` to `end` by a positive `step`.
    pub(crate) fn new(start: Number, end: Number, step: Number) -> DomainResult<Self> {
        let span = end.value() - start.value();
        if !span.is_finite() {
            return Err(DomainError::invalid_argument(
                "range",
                "cannot enumerate a range with an infinite bound",
            ));
        }

        let quotient = span / step.value();
        #[allow(clippy::cast_precision_loss)]
        let limit = usize::MAX as f64;
        if !quotient.is_finite() || quotient >= limit {
            return Err(DomainError::invalid_argument(
                "step",
                format!("step {step} yields too many values for [{start}, {end}]"),
            ));
        }

        let mut steps = Self {
            start: start.value(),
            step: step.value(),
            places: step.decimal_places(),
            front: 0,
            back: 0,
        };
        let last = steps.last_index(quotient, end.value());
        steps.back = last + 1;
        Ok(steps)
    }

    /// Number of decimal places every term is rounded to.
    #[inline]
    pub const fn places(&self) -> u32 {
        self.places
    }

    /// Index of the final term. A quotient just short of an integer, as in
    /// `0.3 / 0.1 = 2.9999999999999996`, is taken as that integer when the
    /// term there does not pass `end`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn last_index(&self, quotient: f64, end: f64) -> usize {
        let floor = quotient.floor() as usize;
        let nearest = quotient.round();
        let close = (quotient - nearest).abs() <= QUOTIENT_TOLERANCE * nearest.abs().max(1.0);
        if close && nearest > quotient {
            let snapped = nearest as usize;
            if self.term(snapped) <= end {
                return snapped;
            }
        }
        floor
    }

    #[allow(clippy::cast_precision_loss)]
    fn term(&self, index: usize) -> f64 {
        if index == 0 {
            // Avoids `0 * inf` when the step is unbounded.
            return round_half_up(self.start, self.places);
        }
        round_half_up(self.start + index as f64 * self.step, self.places)
    }
}

/// Relative distance under which a quotient counts as the integer it approximates.
const QUOTIENT_TOLERANCE: f64 = 1e-9;

impl Iterator for Steps {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let value = self.term(self.front);
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Steps {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.term(self.back))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Steps {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl FusedIterator for Steps {}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(start: f64, end: f64, step: f64) -> Steps {
        Steps::new(
            Number::new(start).unwrap(),
            Number::new(end).unwrap(),
            Number::new(step).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn includes_end_despite_representation_error() {
        // 0.3 / 0.1 is 2.9999999999999996 in binary floating point.
        let values: Vec<_> = plan(0.0, 0.3, 0.1).collect();
        assert_eq!(values, vec![0.0, 0.1, 0.2, 0.3]);
    }

    #[test]
    fn stops_below_end_when_off_step() {
        let values: Vec<_> = plan(1.0, 2.0, 0.4).collect();
        assert_eq!(values, vec![1.0, 1.4, 1.8]);
    }

    #[test]
    fn never_steps_past_end() {
        let values: Vec<_> = plan(0.0, 0.999_999_999_9, 1.0).collect();
        assert_eq!(values, vec![0.0]);

        let steps = plan(0.0, 999_999_999.5, 1.0);
        assert_eq!(steps.len(), 1_000_000_000);
        assert_eq!(steps.clone().next_back(), Some(999_999_999.0));
    }

    #[test]
    fn walks_from_both_ends() {
        let mut steps = plan(0.0, 4.0, 1.0);
        assert_eq!(steps.len(), 5);
        assert_eq!(steps.next_back(), Some(4.0));
        assert_eq!(steps.next(), Some(0.0));
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.rev().collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut steps = plan(0.0, 0.0, 1.0);
        assert_eq!(steps.next(), Some(0.0));
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next_back(), None);
    }

    #[test]
    fn infinite_step_yields_only_start() {
        let values: Vec<_> = plan(2.0, 5.0, f64::INFINITY).collect();
        assert_eq!(values, vec![2.0]);
    }

    #[test]
    fn infinite_span_is_rejected() {
        let err = Steps::new(
            Number::new(0.0).unwrap(),
            Number::new(f64::INFINITY).unwrap(),
            Number::ONE,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { .. }));
    }

    #[test]
    fn places_come_from_step() {
        assert_eq!(plan(0.125, 10.0, 2.0).places(), 0);
        assert_eq!(plan(0.0, 1.0, 0.05).places(), 2);
    }
}
