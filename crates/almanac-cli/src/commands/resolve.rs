use crate::cli::SeedMode;
use crate::support::{
    exit_with, load_puzzle_or_exit, print_json, range_json, seed_ranges_or_exit, unit_json,
};
use serde_json::json;

pub fn run(file: String, mode: SeedMode, json_output: bool) {
    let puzzle = load_puzzle_or_exit(&file);

    match mode {
        SeedMode::Points => {
            let seeds = puzzle.seed_units();
            let resolved = puzzle
                .almanac
                .resolve_units(seeds.iter().copied())
                .unwrap_or_else(|e| exit_with(e));

            if json_output {
                let pairs: Vec<_> = seeds
                    .iter()
                    .zip(&resolved)
                    .map(|(&seed, &unit)| {
                        json!({ "seed": unit_json(seed), "resolved": unit_json(unit) })
                    })
                    .collect();
                print_json(&json!({
                    "action": "resolve",
                    "file": file,
                    "mode": mode.as_str(),
                    "units": pairs,
                }));
            } else {
                println!("almanac resolve ({})", mode.as_str());
                for (seed, unit) in seeds.iter().zip(&resolved) {
                    println!("  {seed} -> {unit}");
                }
            }
        }
        SeedMode::Ranges => {
            let seeds = seed_ranges_or_exit(&puzzle);
            let resolved = puzzle
                .almanac
                .resolve_ranges(seeds.iter().copied())
                .unwrap_or_else(|e| exit_with(e));

            if json_output {
                let ranges: Vec<_> = resolved.iter().copied().map(range_json).collect();
                print_json(&json!({
                    "action": "resolve",
                    "file": file,
                    "mode": mode.as_str(),
                    "seeds": seeds.len(),
                    "ranges": ranges,
                }));
            } else {
                println!(
                    "almanac resolve ({})\n  Seeds: {}\n  Ranges: {}",
                    mode.as_str(),
                    seeds.len(),
                    resolved.len()
                );
                for range in &resolved {
                    println!("  {range}");
                }
            }
        }
    }
}
