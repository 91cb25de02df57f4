//! Extpack CLI - packages a browser extension into a versioned zip archive.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    let result = match &cli.command {
        None => commands::build::execute(&cli::BuildArgs::default(), &*formatter),
        Some(cli::Commands::Build(args)) => commands::build::execute(args, &*formatter),
        Some(cli::Commands::List(args)) => {
            commands::list::execute(args, &*formatter).map(|()| ExitCode::SUCCESS)
        }
        Some(cli::Commands::Completion(args)) => {
            commands::completion::execute(args.shell);
            Ok(ExitCode::SUCCESS)
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            let operation = match &cli.command {
                Some(cli::Commands::List(_)) => "list",
                _ => "build",
            };
            formatter.format_error(operation, &err);
            ExitCode::from(error::EXIT_FAILURE)
        }
    }
}

/// Initializes logging on stderr.
///
/// `RUST_LOG` wins unless `--verbose` or `--quiet` was given.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
