use almanac_input::Puzzle;
use almanac_kernel::{Category, Range, Unit};
use serde_json::Value;
use std::fmt::Display;

pub fn exit_with(error: impl Display) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

pub fn load_puzzle_or_exit(file: &str) -> Puzzle {
    almanac_input::load(file)
        .unwrap_or_else(|e| exit_with(format_args!("failed to load {file}: {e}")))
}

pub fn seed_ranges_or_exit(puzzle: &Puzzle) -> Vec<Range> {
    puzzle.seed_ranges().unwrap_or_else(|e| exit_with(e))
}

pub fn parse_category_or_exit(name: &str) -> Category {
    name.parse().unwrap_or_else(|e: String| exit_with(e))
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}

pub fn unit_json(unit: Unit) -> Value {
    serde_json::to_value(unit).expect("json serialization")
}

pub fn range_json(range: Range) -> Value {
    serde_json::to_value(range).expect("json serialization")
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("almanac_kernel=debug,almanac_input=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
