// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NumericRangeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NumericRangeError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, NumericRangeError>;

/// Errors raised by the range value object and its inputs.
///
/// Every variant is produced synchronously by the offending call and the
/// call has no effect on the range it was made against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An input required to be numeric is not, or coerces to NaN.
    #[error("The {field} must be a numerical value, got {value}")]
    InvalidValue { field: String, value: String },

    /// A bound mutation would place `min` above `max`.
    #[error("The maximal value cannot be smaller than the minimal value (min = {min}, max = {max})")]
    InvalidOrdering { min: String, max: String },

    /// A numeric input violates an operation-specific constraint.
    #[error("Invalid {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },
}

impl DomainError {
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue { field: field.into(), value: value.into() }
    }

    pub fn invalid_ordering(min: impl ToString, max: impl ToString) -> Self {
        Self::InvalidOrdering { min: min.to_string(), max: max.to_string() }
    }

    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { argument: argument.into(), reason: reason.into() }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors (output sinks).
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for NumericRangeError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for NumericRangeError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<NumericRangeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| NumericRangeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NumericRangeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

impl NumericRangeError {
    /// Returns the innermost domain error, looking through context layers.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Context { source, .. } => source.domain(),
            _ => None,
        }
    }
}
