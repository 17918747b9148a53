//! Solve command: shortest path between two vertices
use std::time::{Duration, Instant};

use sssp_core::error::Result;
use sssp_core::format::format_distance;
use sssp_core::graph::{shortest_path, Algorithm, PathResult, Solver, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

/// Execute the solve command
pub fn execute(
    cli: &Cli,
    solver: &Solver,
    graph: &WeightedGraph<String>,
    algorithm: Algorithm,
    source: &str,
    target: &str,
) -> Result<()> {
    let start = Instant::now();
    let store = solver.run(algorithm, graph, &source.to_string())?;
    let running_time = start.elapsed();

    let result = shortest_path(&store, &target.to_string())?;

    match cli.format {
        OutputFormat::Json => output_json(&result, algorithm, running_time)?,
        OutputFormat::Human => output_human(cli, &result, algorithm, running_time),
    }

    Ok(())
}

fn output_human(
    cli: &Cli,
    result: &PathResult<String>,
    algorithm: Algorithm,
    running_time: Duration,
) {
    println!("Path: {}", result.path.join(" -> "));
    println!("Total cost: {}", format_distance(result.cost));
    if !cli.quiet {
        let hops = result.hops();
        println!(
            "Path length: {} {}",
            hops,
            if hops == 1 { "hop" } else { "hops" }
        );
        println!("Algorithm: {}", algorithm);
        println!("Running time: {:?}", running_time);
    }
}

fn output_json(
    result: &PathResult<String>,
    algorithm: Algorithm,
    running_time: Duration,
) -> Result<()> {
    let output = serde_json::json!({
        "algorithm": algorithm,
        "source": result.source,
        "target": result.target,
        "path": result.path,
        "hops": result.hops(),
        "cost": result.cost,
        "running_time_us": running_time.as_micros() as u64,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
