use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "almanac-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn example_path() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/example.txt")
        .display()
        .to_string()
}

fn run_almanac<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_almanac");
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("almanac command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not valid json: {e}\nstdout:\n{}",
            stdout_text(output)
        )
    })
}

#[test]
fn lowest_points_json() {
    let example = example_path();
    let output = run_almanac(["lowest", example.as_str(), "--json"]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["action"], "lowest");
    assert_eq!(payload["mode"], "points");
    assert_eq!(payload["seeds"], 4);
    assert_eq!(payload["lowest"]["category"], "location");
    assert_eq!(payload["lowest"]["id"], 35);
}

#[test]
fn lowest_ranges_json() {
    let example = example_path();
    let output = run_almanac(["lowest", example.as_str(), "--mode", "ranges", "--json"]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["mode"], "ranges");
    assert_eq!(payload["seeds"], 2);
    assert_eq!(payload["lowest"]["start"], 46);
    assert_eq!(payload["lowest"]["length"], 10);
}

#[test]
fn lowest_text_output() {
    let example = example_path();
    let output = run_almanac(["lowest", example.as_str()]);
    assert_success(&output);
    assert!(stdout_text(&output).contains("Lowest: location 35"));
}

#[test]
fn resolve_points_json_keeps_seed_order() {
    let example = example_path();
    let output = run_almanac(["resolve", example.as_str(), "--json"]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    let ids: Vec<i64> = payload["units"]
        .as_array()
        .expect("units array")
        .iter()
        .map(|pair| pair["resolved"]["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![82, 43, 86, 35]);
}

#[test]
fn resolve_ranges_json_lists_every_piece() {
    let example = example_path();
    let output = run_almanac(["resolve", example.as_str(), "--mode", "ranges", "--json"]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    let starts: Vec<i64> = payload["ranges"]
        .as_array()
        .expect("ranges array")
        .iter()
        .map(|range| range["start"].as_i64().expect("start"))
        .collect();
    assert_eq!(starts, vec![46, 56, 60, 82, 86, 94, 97]);
}

#[test]
fn chain_text_output() {
    let example = example_path();
    let output = run_almanac(["chain", example.as_str()]);
    assert_success(&output);

    let text = stdout_text(&output);
    assert!(text.contains(
        "seed -> soil -> fertilizer -> water -> light -> temperature -> humidity -> location"
    ));
    assert!(text.contains("Stages: 7"));
}

#[test]
fn chain_from_middle_json() {
    let example = example_path();
    let output = run_almanac(["chain", example.as_str(), "--from", "light", "--json"]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["from"], "light");
    assert_eq!(payload["stages"], 3);
    assert_eq!(payload["terminal"], "location");
}

#[test]
fn unknown_start_category_fails() {
    let example = example_path();
    let output = run_almanac(["chain", example.as_str(), "--from", "moisture"]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("unknown category"));
}

#[test]
fn missing_file_fails() {
    let tmp = TempDirGuard::new("missing");
    let path = tmp.path().join("nope.txt");
    let output = run_almanac([OsStr::new("lowest"), path.as_os_str()]);
    assert_failure(&output);
    assert!(stderr_text(&output).contains("failed to load"));
}

#[test]
fn odd_seed_count_fails_in_range_mode_only() {
    let tmp = TempDirGuard::new("odd");
    let path = tmp.path().join("odd.txt");
    fs::write(&path, "seeds: 1 2 3\n\nseed-to-soil map:\n10 0 5\n").expect("write input");

    let points = run_almanac([OsStr::new("lowest"), path.as_os_str(), OsStr::new("--json")]);
    assert_success(&points);
    assert_eq!(parse_json_stdout(&points)["lowest"]["id"], 11);

    let ranges = run_almanac([
        OsStr::new("lowest"),
        path.as_os_str(),
        OsStr::new("--mode"),
        OsStr::new("ranges"),
    ]);
    assert_failure(&ranges);
    assert!(stderr_text(&ranges).contains("(start, length) pairs"));
}
