//! Almanac CLI: the `almanac` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    support::setup_tracing(cli.verbose);

    match cli.command {
        Commands::Lowest { file, mode, json } => commands::lowest::run(file, mode, json),

        Commands::Resolve { file, mode, json } => commands::resolve::run(file, mode, json),

        Commands::Chain { file, from, json } => commands::chain::run(file, from, json),
    }
}
