//! `graphplay play` - animate a trace frame by frame.
//!
//! One frame per tick through the playback driver. The tick interval is the
//! original player's 700 ms by default; Ctrl-C stops the animation cleanly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use graphplay_core::error::Result;
use graphplay_core::format::OutputFormat;
use graphplay_core::playback::Playback;

use crate::cli::{Cli, PlayArgs};
use crate::commands::load_input;
use crate::commands::run::resolve_algorithm;

pub(super) fn handle(cli: &Cli, args: &PlayArgs, start: Instant) -> Result<()> {
    let algo = resolve_algorithm(args.run.algo.as_deref())?;
    let input = load_input(&args.run.graph, args.run.from, args.run.to)?;
    let result = (algo.run)(&input);

    tracing::debug!(
        algo = algo.id,
        steps = result.steps.len(),
        elapsed = ?start.elapsed(),
        "trace_ready"
    );

    if result.steps.is_empty() {
        println!("no steps to play between {} and {}", args.run.from, args.run.to);
        return Ok(());
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        let _ = ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst));
    }

    let mut playback = Playback::new(result);
    print_frame(cli.format, &playback);
    playback.play();

    while playback.is_playing() && !interrupted.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(args.interval_ms));
        if playback.advance().is_some() {
            print_frame(cli.format, &playback);
        }
    }

    if interrupted.load(Ordering::SeqCst) {
        playback.pause();
        let progress = playback.progress();
        if !cli.quiet {
            println!("interrupted at step {}/{}", progress.current, progress.total);
        }
        return Ok(());
    }

    print_summary(cli, &playback, args);
    Ok(())
}

fn print_frame(format: OutputFormat, playback: &Playback) {
    let Some(node) = playback.current_node() else {
        return;
    };
    let progress = playback.progress();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "step": progress.current,
                    "total": progress.total,
                    "nodeId": node,
                    "visited": playback.visited(),
                })
            );
        }
        OutputFormat::Human => {
            let visited: Vec<String> = playback.visited().iter().map(ToString::to_string).collect();
            println!(
                "step {}/{}: visit {} (visited: {})",
                progress.current,
                progress.total,
                node,
                visited.join(", ")
            );
        }
    }
}

fn print_summary(cli: &Cli, playback: &Playback, args: &PlayArgs) {
    let path = &playback.result().path;

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::json!({ "path": path }));
        return;
    }

    if path.is_empty() {
        println!("no path between {} and {}", args.run.from, args.run.to);
        return;
    }

    let rendered: Vec<String> = path.iter().map(ToString::to_string).collect();
    println!("path: {}", rendered.join(" -> "));

    if !cli.quiet {
        let edges: Vec<String> = playback
            .path_edges()
            .iter()
            .map(|(a, b)| format!("{}-{}", a, b))
            .collect();
        println!("highlighted edges: {}", edges.join(", "));
    }
}
