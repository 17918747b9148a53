//! Command dispatch logic for sssp
use clap::CommandFactory;

use sssp_core::config::SolverConfig;
use sssp_core::error::Result;
use sssp_core::graph::{Algorithm, Solver};

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::helpers::build_graph_from_args;

pub fn run(cli: &Cli) -> Result<()> {
    let config = SolverConfig::load_or_default(cli.config.as_deref())?;
    let solver = Solver::new(config);

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Solve {
            graph,
            source,
            target,
            algorithm,
        }) => {
            let graph = build_graph_from_args(graph)?;
            let algorithm = resolve_algorithm(&solver, *algorithm);
            commands::solve::execute(cli, &solver, &graph, algorithm, source, target)
        }

        Some(Commands::Distances {
            graph,
            source,
            algorithm,
        }) => {
            let graph = build_graph_from_args(graph)?;
            let algorithm = resolve_algorithm(&solver, *algorithm);
            commands::distances::execute(cli, &solver, &graph, algorithm, source)
        }

        Some(Commands::Compare {
            graph,
            source,
            target,
        }) => {
            let graph = build_graph_from_args(graph)?;
            commands::compare::execute(cli, &solver, &graph, source, target)
        }

        Some(Commands::Algorithms) => commands::algorithms::execute(cli, &solver),
    }
}

fn resolve_algorithm(solver: &Solver, requested: Option<Algorithm>) -> Algorithm {
    requested.unwrap_or(solver.config().default_algorithm)
}

fn handle_no_command() -> Result<()> {
    Cli::command().print_help()?;
    Ok(())
}
