//! `graphplay run` - execute one algorithm over a graph file.

use std::time::Instant;

use graphplay_core::error::{GraphplayError, Result};
use graphplay_core::format::OutputFormat;
use graphplay_core::{default_algorithm, get_algorithm, AlgoResult, Algorithm};

use crate::cli::{Cli, RunArgs};
use crate::commands::load_input;

/// Resolve an algorithm id, falling back to the first-registered algorithm
/// when none was requested.
pub(super) fn resolve_algorithm(id: Option<&str>) -> Result<&'static Algorithm> {
    match id {
        None => Ok(default_algorithm()),
        Some(id) => {
            get_algorithm(id).ok_or_else(|| GraphplayError::UnknownAlgorithm(id.to_string()))
        }
    }
}

pub(super) fn handle(cli: &Cli, args: &RunArgs, start: Instant) -> Result<()> {
    let algo = resolve_algorithm(args.algo.as_deref())?;
    let input = load_input(&args.graph, args.from, args.to)?;

    tracing::debug!(algo = algo.id, elapsed = ?start.elapsed(), "input_loaded");

    let result = (algo.run)(&input);

    match cli.format {
        OutputFormat::Json => print_json(algo, &result)?,
        OutputFormat::Human => print_human(cli, algo, &result, args),
    }

    Ok(())
}

fn print_json(algo: &Algorithm, result: &AlgoResult) -> Result<()> {
    let envelope = serde_json::json!({
        "algorithm": algo.id,
        "path": result.path,
        "steps": result.steps,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn print_human(cli: &Cli, algo: &Algorithm, result: &AlgoResult, args: &RunArgs) {
    if !cli.quiet {
        println!("algorithm: {} ({})", algo.id, algo.name);
        println!("steps: {}", result.steps.len());
    }

    if result.path.is_empty() {
        // An empty path is a defined outcome, not an error.
        println!("no path between {} and {}", args.from, args.to);
    } else {
        let rendered: Vec<String> = result.path.iter().map(ToString::to_string).collect();
        println!(
            "path: {} ({} hops)",
            rendered.join(" -> "),
            result.path.len() - 1
        );
    }
}
