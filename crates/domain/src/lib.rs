//! Closed numeric ranges with validated bounds.
//!
//! [`Range`] holds a lower and an upper bound and re-validates them on every
//! write. It enumerates its on-step values, tests membership and clamps values
//! into itself.

pub mod options;
pub mod range;
pub mod steps;

pub use numeric_range_shared_kernel::{DomainError, DomainResult, Number, NumericInput};
pub use options::BoundaryPolicy;
pub use range::{MAX_ENUMERATION_LEN, Range};
pub use steps::Steps;
