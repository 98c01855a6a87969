// tests/common/mod.rs
//! Shared test fixtures.

use numeric_range::{BoundaryPolicy, Range};

/// `[0, 1]`, the unit interval.
pub fn unit_interval() -> Range {
    Range::new(0, 1).expect("unit interval is valid")
}

/// `[min, max]` under the strict policy.
pub fn strict(min: f64, max: f64) -> Range {
    Range::with_policy(min, max, BoundaryPolicy::Strict).expect("strict range is valid")
}
