//! Command dispatch for the `is-it-friday` entrypoint.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use friday::{RunSummary, friday_steps, load_feature, run_feature};

use crate::config::{CliConfig, LogLevel, ReportFormat};
use crate::discover::feature_files;
use crate::output::{write_report, write_step};

/// Ask whether it's Friday yet, or check the answer with feature files.
#[derive(Parser, Debug)]
#[command(name = "is-it-friday", author, version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub(crate) log_level: Option<LogLevel>,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Run feature files against the Friday step bindings.
    Run(RunArgs),
    /// Answer for a single day.
    Ask(AskArgs),
    /// List the registered step bindings.
    Steps,
}

#[derive(Args, Debug)]
pub(crate) struct RunArgs {
    /// Feature files or directories to search for `*.feature`.
    #[arg(required = true)]
    pub(crate) paths: Vec<PathBuf>,
    /// Report format (text, json, junit).
    #[arg(long)]
    pub(crate) format: Option<ReportFormat>,
    /// Treat pending scenarios as failures.
    #[arg(long)]
    pub(crate) fail_on_pending: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Day name, compared exactly.
    pub(crate) day: String,
}

impl Cli {
    /// The `--format` flag of `run`, if given.
    pub(crate) fn format_override(&self) -> Option<ReportFormat> {
        match &self.command {
            Commands::Run(args) => args.format,
            Commands::Ask(_) | Commands::Steps => None,
        }
    }
}

pub(crate) fn run(command: Commands, config: &CliConfig) -> Result<ExitCode> {
    match command {
        Commands::Run(args) => handle_run(&args, config),
        Commands::Ask(args) => handle_ask(&args).map(|()| ExitCode::SUCCESS),
        Commands::Steps => handle_steps().map(|()| ExitCode::SUCCESS),
    }
}

fn handle_run(args: &RunArgs, config: &CliConfig) -> Result<ExitCode> {
    if args.fail_on_pending {
        friday::config::set_fail_on_pending(true);
    }
    let registry = friday_steps().wrap_err("failed to register Friday steps")?;
    let mut records = Vec::new();
    for path in feature_files(&args.paths)? {
        tracing::info!(path = %path.display(), "running feature");
        let feature = load_feature(&path)
            .wrap_err_with(|| format!("failed to load {}", path.display()))?;
        records.extend(run_feature(&registry, &feature));
    }

    let mut stdout = io::stdout();
    write_report(&mut stdout, config.format, &records)?;
    stdout.flush().wrap_err("failed to flush report to stdout")?;

    let summary = RunSummary::from_records(&records);
    let strict = friday::config::fail_on_pending();
    tracing::info!(
        passed = summary.passed,
        failed = summary.failed,
        pending = summary.pending,
        strict,
        "run finished"
    );
    Ok(if summary.is_success(strict) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn handle_ask(args: &AskArgs) -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", friday::evaluate(&args.day)).wrap_err("failed to write answer")?;
    stdout.flush().wrap_err("failed to flush answer to stdout")
}

fn handle_steps() -> Result<()> {
    let registry = friday_steps().wrap_err("failed to register Friday steps")?;
    let mut stdout = io::stdout();
    for step in registry.definitions() {
        write_step(&mut stdout, step)?;
    }
    stdout.flush().wrap_err("failed to flush step listing to stdout")
}
