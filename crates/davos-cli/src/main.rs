//! davos - smuggle packages into the running environment

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use davos_cli::ui::ConsoleReporter;
use davos_cli::{Cli, Commands, Config, cmd};
use davos_core::{Disposition, Installer, Reporter, TracingReporter};

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let reporter: &dyn Reporter = if cli.quiet {
        &TracingReporter
    } else {
        &ConsoleReporter
    };

    match cli.command {
        Commands::Install {
            specs,
            installer,
            show_stdout,
            hide_stdout,
        } => {
            let config = Config::load()?;
            let show = if show_stdout {
                Some(true)
            } else if hide_stdout {
                Some(false)
            } else {
                config.show_stdout
            };
            let installer = match installer {
                Some(program) if program.trim().is_empty() => {
                    anyhow::bail!("--installer must name a program, e.g. \"python -m pip\"")
                }
                Some(program) => Installer::new(program.split_whitespace()),
                None => Installer::new(config.installer),
            }
            .with_show_stdout(show);

            match cmd::install::install(&installer, &specs, cli.dry_run, reporter) {
                Some(Disposition::Abort) => Ok(ExitCode::FAILURE),
                Some(Disposition::Warn) | None => Ok(ExitCode::SUCCESS),
            }
        }
        Commands::Kinds => {
            cmd::kinds::kinds();
            Ok(ExitCode::SUCCESS)
        }
    }
}
