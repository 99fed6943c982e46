//! Command dispatch logic for graphplay

use std::time::Instant;

use graphplay_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands::{algos, play, run};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        // Bare `graphplay` shows what it can do.
        None | Some(Commands::Algos) => algos::handle(cli),

        Some(Commands::Run(args)) => run::handle(cli, args, start),

        Some(Commands::Play(args)) => play::handle(cli, args, start),
    }
}
