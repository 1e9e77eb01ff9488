use crate::cli::SeedMode;
use crate::support::{
    exit_with, load_puzzle_or_exit, print_json, range_json, seed_ranges_or_exit, unit_json,
};
use serde_json::{Value, json};

pub fn run(file: String, mode: SeedMode, json_output: bool) {
    let puzzle = load_puzzle_or_exit(&file);

    let (seeds, lowest, lowest_json): (usize, Option<String>, Value) = match mode {
        SeedMode::Points => {
            let units = puzzle.seed_units();
            let lowest = puzzle
                .almanac
                .lowest_unit(units.iter().copied())
                .unwrap_or_else(|e| exit_with(e));
            (
                units.len(),
                lowest.map(|unit| unit.to_string()),
                lowest.map_or(Value::Null, unit_json),
            )
        }
        SeedMode::Ranges => {
            let ranges = seed_ranges_or_exit(&puzzle);
            let lowest = puzzle
                .almanac
                .lowest_range(ranges.iter().copied())
                .unwrap_or_else(|e| exit_with(e));
            (
                ranges.len(),
                lowest.map(|range| format!("{} {}", range.category(), range.start())),
                lowest.map_or(Value::Null, range_json),
            )
        }
    };

    if json_output {
        print_json(&json!({
            "action": "lowest",
            "file": file,
            "mode": mode.as_str(),
            "seeds": seeds,
            "lowest": lowest_json,
        }));
    } else {
        println!(
            "almanac lowest\n  File: {}\n  Mode: {}\n  Seeds: {}\n  Lowest: {}",
            file,
            mode.as_str(),
            seeds,
            lowest.as_deref().unwrap_or("(none)")
        );
    }
}
