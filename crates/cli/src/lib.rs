// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod options;
pub mod presentation;

use numeric_range_domain::Range;
use numeric_range_shared_kernel::{ErrorContext, Number, Result};
use serde::Serialize;

use crate::config::{Config, Operation};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of one operation against a range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Values(Vec<f64>),
    Includes(bool),
    Incorporated(Number),
}

/// The range an operation ran against, together with its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub range: Range,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Builds the configured range and runs the configured operation on it.
pub fn run(config: &Config) -> Result<Report> {
    let range = Range::with_policy(config.min.as_str(), config.max.as_str(), config.policy)
        .with_context(|| format!("building range from {} and {}", config.min, config.max))?;

    let outcome = match config.operation {
        Operation::Enumerate { step } => {
            Outcome::Values(range.enumerate_by(step).context("enumerating")?)
        }
        Operation::Includes { value } => {
            Outcome::Includes(range.includes(value).context("checking membership")?)
        }
        Operation::Incorporate { value } => {
            let clamped = range.incorporate(value).context("incorporating")?;
            Outcome::Incorporated(Number::new(clamped)?)
        }
    };

    Ok(Report { range, outcome })
}
