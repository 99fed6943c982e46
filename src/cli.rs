//! CLI argument parsing for graphplay
//!
//! Uses clap for argument parsing. Global flags: --format, --quiet,
//! --verbose, --log-level, --log-json.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use graphplay_core::format::OutputFormat;
use graphplay_core::NodeId;

/// Graphplay - run graph algorithms and replay their traces
#[derive(Parser, Debug)]
#[command(name = "graphplay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered algorithms
    Algos,

    /// Run an algorithm over a graph file and print path and trace
    Run(RunArgs),

    /// Animate an algorithm trace step by step
    Play(PlayArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Graph JSON file: {"nodes": [..], "edges": [{"source", "target", "directed", "weight"}, ..]}
    pub graph: PathBuf,

    /// Algorithm id (see `graphplay algos`; defaults to the first registered)
    #[arg(long, short)]
    pub algo: Option<String>,

    /// Start node id
    #[arg(long)]
    pub from: NodeId,

    /// End node id
    #[arg(long)]
    pub to: NodeId,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Milliseconds between animation frames
    #[arg(long, default_value_t = 700)]
    pub interval_ms: u64,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
