//! Distances command: full state table for one run
use sssp_core::error::Result;
use sssp_core::format::format_distance;
use sssp_core::graph::{Algorithm, Solver, VertexStateStore, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

/// Execute the distances command
pub fn execute(
    cli: &Cli,
    solver: &Solver,
    graph: &WeightedGraph<String>,
    algorithm: Algorithm,
    source: &str,
) -> Result<()> {
    let store = solver.run(algorithm, graph, &source.to_string())?;

    match cli.format {
        OutputFormat::Json => output_json(&store)?,
        OutputFormat::Human => output_human(cli, &store),
    }

    Ok(())
}

fn output_human(cli: &Cli, store: &VertexStateStore<'_, String>) {
    if !cli.quiet {
        println!(
            "Distances from {} ({}):",
            store.source(),
            store.algorithm()
        );
    }
    for entry in store.entries() {
        let predecessor = entry.predecessor.map(String::as_str).unwrap_or("-");
        println!(
            "{}\t{}\t{}",
            entry.vertex,
            format_distance(entry.distance),
            predecessor
        );
    }
}

fn output_json(store: &VertexStateStore<'_, String>) -> Result<()> {
    let vertices: Vec<serde_json::Value> = store
        .entries()
        .map(|entry| {
            let reachable = entry.distance.is_finite();
            serde_json::json!({
                "vertex": entry.vertex,
                "distance": if reachable { Some(entry.distance) } else { None },
                "predecessor": entry.predecessor,
                "reachable": reachable,
            })
        })
        .collect();

    let output = serde_json::json!({
        "algorithm": store.algorithm(),
        "source": store.source(),
        "vertices": vertices,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
