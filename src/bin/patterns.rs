use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use design_patterns::cli::{Cli, Command};
use design_patterns::config::Scenario;
use design_patterns::{logging, runner};

fn run(cli: Cli) -> Result<()> {
    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    cli.command.apply_overrides(&mut scenario);
    debug!(?scenario, "resolved scenario");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Factory { approach, .. } => runner::run_factory(approach, &scenario.factory, &mut out),
        Command::Strategy { approach, .. } => runner::run_strategy(approach, &scenario.strategy, &mut out),
        Command::Adapter { approach, .. } => runner::run_adapter(approach, &scenario.adapter, &mut out),
        Command::Template { approach, .. } => runner::run_template(approach, &scenario.template, &mut out),
        Command::Observer { approach } => runner::run_observer(approach, &scenario.observer, &mut out),
        Command::All => runner::run_all(&scenario, &mut out),
    }
    .context("demo failed")?;

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
