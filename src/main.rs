//! sssp - single-source shortest paths CLI
//!
//! Builds a weighted directed graph from command-line edges and runs
//! Bellman-Ford, Dijkstra or topological-order relaxation over it.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use sssp_core::error::{ExitCode as SsspExitCode, SsspError};
use sssp_core::logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json_errors() => match usage_error(&err) {
            Some(error) => return report_json(&error),
            None => err.exit(),
        },
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::dispatch::run(&cli) {
        Ok(()) => ExitCode::from(SsspExitCode::Success as u8),
        Err(e) if cli.format == OutputFormat::Json => report_json(&e),
        Err(e) => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn report_json(error: &SsspError) -> ExitCode {
    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

/// Map a clap failure onto the error envelope; `None` for help and version
fn usage_error(err: &clap::Error) -> Option<SsspError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::Io | ErrorKind::Format => Some(SsspError::Other(err.to_string())),
        _ => Some(SsspError::UsageError(err.to_string())),
    }
}

/// `Cli.format` is unavailable when parsing fails, so look at argv directly
fn wants_json_errors() -> bool {
    let args: Vec<String> = std::env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
