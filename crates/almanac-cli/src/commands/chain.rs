use crate::support::{exit_with, load_puzzle_or_exit, parse_category_or_exit, print_json};
use serde_json::json;

pub fn run(file: String, from: String, json_output: bool) {
    let start = parse_category_or_exit(&from);
    let puzzle = load_puzzle_or_exit(&file);
    let path = puzzle
        .almanac
        .path(start)
        .unwrap_or_else(|e| exit_with(e));
    let terminal = path.last().copied().unwrap_or(start);

    if json_output {
        print_json(&json!({
            "action": "chain",
            "file": file,
            "from": start,
            "path": path,
            "stages": path.len() - 1,
            "terminal": terminal,
        }));
    } else {
        let rendered: Vec<String> = path.iter().map(ToString::to_string).collect();
        println!(
            "almanac chain\n  Path: {}\n  Stages: {}\n  Terminal: {}",
            rendered.join(" -> "),
            path.len() - 1,
            terminal
        );
    }
}
