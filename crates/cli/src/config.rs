use derive_builder::Builder;
use numeric_range_domain::BoundaryPolicy;
use numeric_range_shared_kernel::{PresentationError, PresentationResult};

use crate::args::{Args, BoundsArgs, Command};
use crate::options::OutputFormat;

/// What to compute once the range is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Enumerate { step: f64 },
    Includes { value: f64 },
    Incorporate { value: f64 },
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub min: String,
    pub max: String,
    pub operation: Operation,
    #[builder(default)]
    pub policy: BoundaryPolicy,
    #[builder(default)]
    pub format: OutputFormat,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        let policy = if args.strict { BoundaryPolicy::Strict } else { BoundaryPolicy::Inclusive };

        let (BoundsArgs { min, max }, operation) = match args.command {
            Command::Enumerate { bounds, step } => (bounds, Operation::Enumerate { step }),
            Command::Includes { bounds, value } => (bounds, Operation::Includes { value }),
            Command::Incorporate { bounds, value } => (bounds, Operation::Incorporate { value }),
        };

        ConfigBuilder::default()
            .min(min)
            .max(max)
            .operation(operation)
            .policy(policy)
            .format(args.format)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
