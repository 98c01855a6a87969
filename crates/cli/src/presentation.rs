// crates/cli/src/presentation.rs
use std::io::{self, Write};

use numeric_range_shared_kernel::Result;

use crate::{Outcome, Report, options::OutputFormat};

pub fn print_report(report: &Report, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, format)?;
    out.flush()?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Lines => write_lines(out, &report.outcome),
        OutputFormat::Json => write_json(out, report),
    }
}

fn write_lines<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Values(values) => {
            for value in values {
                writeln!(out, "{value}")?;
            }
        }
        Outcome::Includes(included) => writeln!(out, "{included}")?,
        Outcome::Incorporated(value) => writeln!(out, "{value}")?,
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
