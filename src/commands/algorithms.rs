//! Algorithms command: list the available strategies
use sssp_core::error::Result;
use sssp_core::graph::{Algorithm, Solver};

use crate::cli::{Cli, OutputFormat};

/// Execute the algorithms command
pub fn execute(cli: &Cli, solver: &Solver) -> Result<()> {
    let default = solver.config().default_algorithm;

    match cli.format {
        OutputFormat::Json => {
            let algorithms: Vec<serde_json::Value> = Algorithm::ALL
                .iter()
                .map(|algorithm| {
                    serde_json::json!({
                        "id": algorithm.id(),
                        "description": algorithm.description(),
                        "negative_weights": algorithm.supports_negative_weights(),
                        "acyclic_only": algorithm.requires_acyclic(),
                        "default": *algorithm == default,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&algorithms)?);
        }
        OutputFormat::Human => {
            for algorithm in Algorithm::ALL {
                let marker = if algorithm == default { " (default)" } else { "" };
                println!("{}{}\t{}", algorithm.id(), marker, algorithm.description());
            }
        }
    }

    Ok(())
}
