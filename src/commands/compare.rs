//! Compare command: cross-validate every applicable algorithm
use std::time::{Duration, Instant};

use sssp_core::error::{Result, SsspError};
use sssp_core::format::format_distance;
use sssp_core::graph::{shortest_path, Algorithm, Solver, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

/// Result of one algorithm in a comparison
#[derive(Debug)]
struct Outcome {
    algorithm: Algorithm,
    /// Why the algorithm was not run on this graph
    skipped: Option<&'static str>,
    /// `None` when the target is unreachable
    path: Option<(Vec<String>, f64)>,
    running_time: Duration,
}

impl Outcome {
    fn cost(&self) -> Option<f64> {
        self.path.as_ref().map(|(_, cost)| *cost)
    }
}

/// Why `algorithm` cannot run on `graph`, if it cannot
fn skip_reason(algorithm: Algorithm, graph: &WeightedGraph<String>) -> Option<&'static str> {
    if !algorithm.supports_negative_weights() && graph.has_negative_weight() {
        Some("negative weights")
    } else if algorithm.requires_acyclic() && !graph.is_acyclic() {
        Some("graph has a cycle")
    } else {
        None
    }
}

/// Execute the compare command
pub fn execute(
    cli: &Cli,
    solver: &Solver,
    graph: &WeightedGraph<String>,
    source: &str,
    target: &str,
) -> Result<()> {
    let source = source.to_string();
    let target = target.to_string();

    let mut outcomes = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        if let Some(reason) = skip_reason(algorithm, graph) {
            tracing::debug!(algorithm = %algorithm, reason, "compare_skip");
            outcomes.push(Outcome {
                algorithm,
                skipped: Some(reason),
                path: None,
                running_time: Duration::ZERO,
            });
            continue;
        }

        let start = Instant::now();
        let store = solver.run(algorithm, graph, &source)?;
        let running_time = start.elapsed();

        let path = match shortest_path(&store, &target) {
            Ok(result) => Some((result.path, result.cost)),
            Err(SsspError::NoPath { .. }) => None,
            Err(e) => return Err(e),
        };
        outcomes.push(Outcome {
            algorithm,
            skipped: None,
            path,
            running_time,
        });
    }

    match cli.format {
        OutputFormat::Json => output_json(&source, &target, &outcomes)?,
        OutputFormat::Human => output_human(cli, &outcomes),
    }

    check_agreement(&target, &outcomes)
}

/// Every algorithm that ran must report the same cost (or all none)
fn check_agreement(target: &str, outcomes: &[Outcome]) -> Result<()> {
    let ran: Vec<&Outcome> = outcomes.iter().filter(|o| o.skipped.is_none()).collect();
    let Some(first) = ran.first() else {
        return Ok(());
    };

    if ran.iter().all(|o| o.cost() == first.cost()) {
        return Ok(());
    }

    let details = ran
        .iter()
        .map(|o| {
            format!(
                "{}={}",
                o.algorithm,
                o.cost().map_or_else(|| "unreachable".to_string(), format_distance)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    Err(SsspError::Disagreement {
        target: target.to_string(),
        details,
    })
}

fn output_human(cli: &Cli, outcomes: &[Outcome]) {
    for outcome in outcomes {
        match (&outcome.skipped, &outcome.path) {
            (Some(reason), _) => println!("{}: skipped ({})", outcome.algorithm, reason),
            (None, Some((path, cost))) => {
                println!(
                    "{}: cost {} via {}",
                    outcome.algorithm,
                    format_distance(*cost),
                    path.join(" -> ")
                );
                if !cli.quiet {
                    println!("  Running time: {:?}", outcome.running_time);
                }
            }
            (None, None) => println!("{}: unreachable", outcome.algorithm),
        }
    }
}

fn output_json(source: &str, target: &str, outcomes: &[Outcome]) -> Result<()> {
    let results: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|outcome| {
            serde_json::json!({
                "algorithm": outcome.algorithm,
                "skipped": outcome.skipped,
                "reachable": outcome.path.is_some(),
                "path": outcome.path.as_ref().map(|(path, _)| path),
                "cost": outcome.cost(),
                "running_time_us": outcome.running_time.as_micros() as u64,
            })
        })
        .collect();

    let output = serde_json::json!({
        "source": source,
        "target": target,
        "results": results,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
