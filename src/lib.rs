//! Closed numeric ranges `[min, max]`.
//!
//! ```rust
//! use numeric_range::Range;
//!
//! let range = Range::new(0, 1)?;
//! assert_eq!(range.enumerate_by(0.25)?, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! assert!(range.includes(1)?);
//! assert_eq!(range.incorporate(-3)?, 0.0);
//! # Ok::<(), numeric_range::DomainError>(())
//! ```

pub use numeric_range_domain::{BoundaryPolicy, MAX_ENUMERATION_LEN, Range, Steps};
pub use numeric_range_shared_kernel::{
    DomainError, DomainResult, ErrorContext, Number, NumericInput, NumericRangeError, Result,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
