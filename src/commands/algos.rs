//! `graphplay algos` - enumerate the algorithm registry.

use graphplay_core::error::Result;
use graphplay_core::format::OutputFormat;
use graphplay_core::ALGORITHMS;

use crate::cli::Cli;

pub(super) fn handle(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let list: Vec<_> = ALGORITHMS
                .iter()
                .map(|algo| serde_json::json!({"id": algo.id, "name": algo.name}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        OutputFormat::Human => {
            for algo in ALGORITHMS {
                println!("{:<14} {}", algo.id, algo.name);
            }
        }
    }

    Ok(())
}
