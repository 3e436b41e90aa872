// crates/stamp-cli/src/main.rs - CLI Application Entry Point
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│  Command Router  │───▶│  Command Handlers   │
// │ (clap + words)  │    │ (stamp_core)     │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                                          │
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │◀───│  Services / Output  │
//                        │ (config + store) │    │ (notebook, stdout)  │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// stamp notebook ~/notes            # Choose (or create) a notebook
// stamp page work                   # Choose (or create) a page
// stamp - checking email            # Append a timestamped note
// stamp foot 5                      # Last five notes
// stamp timenote 2025-07-30         # Notes from one day
// ```
//
// Exit code is 0 on success and 1 on any failure. Failures are printed to
// stderr as `stamp failed: <reason>`; usage errors add the command list.

use anyhow::Result;
use clap::Parser;
use stamp_core::{Command, StampError};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod output;
mod services;
mod stdin;

use cli::{COMMANDS_HELP, Cli};
use context::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_failure(&err);
            if err
                .downcast_ref::<StampError>()
                .is_some_and(StampError::is_usage)
            {
                eprintln!();
                eprintln!("{}", COMMANDS_HELP);
            }
            ExitCode::FAILURE
        }
    }
}

/// Route the command words, then load the config and dispatch
///
/// Routing happens first so `stamp help` and typos never touch the disk.
fn run(cli: Cli) -> Result<()> {
    let command = Command::parse(&cli.words)?;
    tracing::debug!(?command, "routed");

    if command == Command::Help {
        return commands::dispatch_help();
    }

    let mut ctx = Context::new(cli.config)?;
    commands::dispatch(&mut ctx, command)
}

/// Log to stderr; `RUST_LOG` wins unless `--verbose` is given
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("stamp=debug,stamp_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
