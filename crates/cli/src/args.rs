use clap::{Parser, Subcommand};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "numeric-range",
    version = crate::VERSION,
    about = "Enumerate, test and clamp numbers against a closed range [MIN, MAX]"
)]
pub struct Args {
    /// Reject ranges whose bounds are equal
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "lines", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the values from MIN to MAX in increments of STEP
    Enumerate {
        #[command(flatten)]
        bounds: BoundsArgs,

        /// Increment between consecutive values
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        step: f64,
    },
    /// Print whether VALUE lies within the range
    Includes {
        #[command(flatten)]
        bounds: BoundsArgs,

        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Print VALUE clamped into the range
    Incorporate {
        #[command(flatten)]
        bounds: BoundsArgs,

        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

/// Range bounds, kept as text so they go through the same coercion as the
/// range's own setters.
#[derive(clap::Args, Debug, Clone)]
pub struct BoundsArgs {
    /// Lower bound
    #[arg(allow_hyphen_values = true)]
    pub min: String,

    /// Upper bound
    #[arg(allow_hyphen_values = true)]
    pub max: String,
}
