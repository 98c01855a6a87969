use clap::Parser;
use numeric_range_cli::args::Args;
use numeric_range_cli::config::Config;
use numeric_range_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match numeric_range_cli::run(&config)
        .and_then(|report| presentation::print_report(&report, config.format))
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
