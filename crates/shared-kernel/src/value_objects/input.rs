// crates/shared-kernel/src/value_objects/input.rs
use serde_json::Value;

use super::number::Number;
use crate::error::{DomainError, DomainResult};

/// An input that may be turned into a [`Number`].
///
/// Numeric primitives are numeric-typed. Text and JSON strings are not, but
/// they can still be coerced by parsing; bound setters accept coercion while
/// the range operations require a numeric-typed input.
pub trait NumericInput {
    /// The value of a numeric-typed input, `None` for anything else.
    fn as_number(&self) -> Option<f64>;

    /// The value after lenient coercion.
    fn coerce(&self) -> Option<f64> {
        self.as_number()
    }

    /// Rendering used in error messages.
    fn describe(&self) -> String;

    /// Requires a numeric-typed, non-NaN input.
    fn to_number(&self, field: &str) -> DomainResult<Number> {
        match self.as_number() {
            Some(value) if !value.is_nan() => Number::named(value, field),
            _ => Err(DomainError::invalid_value(field, self.describe())),
        }
    }

    /// Coerces the input, failing when the result is NaN.
    fn coerce_number(&self, field: &str) -> DomainResult<Number> {
        match self.coerce() {
            Some(value) if !value.is_nan() => Number::named(value, field),
            _ => Err(DomainError::invalid_value(field, self.describe())),
        }
    }
}

macro_rules! impl_numeric_input {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumericInput for $ty {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_input!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl NumericInput for Number {
    #[inline]
    fn as_number(&self) -> Option<f64> {
        Some(self.value())
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl NumericInput for str {
    fn as_number(&self) -> Option<f64> {
        None
    }

    fn coerce(&self) -> Option<f64> {
        self.parse::<Number>().ok().map(Number::value)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl NumericInput for String {
    fn as_number(&self) -> Option<f64> {
        None
    }

    fn coerce(&self) -> Option<f64> {
        self.as_str().coerce()
    }

    fn describe(&self) -> String {
        self.as_str().describe()
    }
}

impl NumericInput for Value {
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    fn coerce(&self) -> Option<f64> {
        match self {
            Value::String(s) => s.as_str().coerce(),
            other => NumericInput::as_number(other),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(NumericInput::as_number)
    }

    fn coerce(&self) -> Option<f64> {
        self.as_ref().and_then(NumericInput::coerce)
    }

    fn describe(&self) -> String {
        self.as_ref().map_or_else(|| "nothing".to_string(), NumericInput::describe)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    #[inline]
    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }

    #[inline]
    fn coerce(&self) -> Option<f64> {
        (**self).coerce()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
