// crates/shared-kernel/src/lib.rs
pub use error::{
    DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, NumericRangeError,
    PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Number, NumericInput, round_half_up};
