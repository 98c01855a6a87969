// crates/shared-kernel/src/value_objects/mod.rs
pub mod input;
pub mod number;

pub use input::NumericInput;
pub use number::{Number, round_half_up};
