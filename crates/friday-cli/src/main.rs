//! Command-line runner for the is-it-friday behaviour scenarios.

mod cli;
mod config;
mod discover;
mod error;
mod logging;
mod output;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::logging::init_logging;

fn main() -> ExitCode {
    let args = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config.apply_overrides(args.log_level, args.format_override()),
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            report_error(&eyre::Report::new(e));
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), ?config, "starting");

    match cli::run(args.command, &config) {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            ExitCode::from(2)
        }
    }
}

fn report_error(error: &eyre::Report) {
    let _ = writeln!(std::io::stderr(), "error: {error:#}");
}
