//! End-to-end tests for the `grid` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SPIKE_SERIES: &str = r#"[
    {"consumption": 10, "timestamp": 1},
    {"consumption": 11, "timestamp": 2},
    {"consumption": 10, "timestamp": 3},
    {"consumption": 200, "timestamp": 4},
    {"consumption": 12, "timestamp": 5},
    {"consumption": 13, "timestamp": 6}
]"#;

const OUTLIER_SERIES: &str = r#"[
    {"consumption": 1, "timestamp": 1},
    {"consumption": 2, "timestamp": 2},
    {"consumption": 3, "timestamp": 3},
    {"consumption": 4, "timestamp": 4},
    {"consumption": 5, "timestamp": 5},
    {"consumption": 6, "timestamp": 6},
    {"consumption": 7, "timestamp": 7},
    {"consumption": 8, "timestamp": 8},
    {"consumption": 100, "timestamp": 9}
]"#;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

/// Command with an isolated config file so the user's own config never leaks in.
fn grid(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("grid").unwrap();
    cmd.env("GRID_CONFIG", config.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn empty_config() -> NamedTempFile {
    temp_file("")
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn demo_reports_spike_and_outlier() {
    let config = empty_config();
    grid(&config)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("5,000 kWh -> MWh: 5"))
        .stdout(predicate::str::contains("Spikes: [200@4]"))
        .stdout(predicate::str::contains("Outliers: [200@4]"))
        .stdout(predicate::str::contains("MovingAverage(2): [12.5, 17.5, 22.5]"));
}

#[test]
fn spikes_json_flags_only_the_spike() {
    let config = empty_config();
    let input = temp_file(SPIKE_SERIES);
    let value = json_stdout(grid(&config).args([
        "spikes",
        "-i",
        input.path().to_str().unwrap(),
        "-w",
        "3",
        "-t",
        "2.0",
        "-o",
        "json",
    ]));

    let spikes = value.as_array().unwrap();
    assert_eq!(spikes.len(), 1);
    assert_eq!(spikes[0]["timestamp"], 4);
    assert_eq!(spikes[0]["consumption"], 200.0);
}

#[test]
fn spikes_take_parameters_from_config_file() {
    let config = temp_file("[detector]\nthreshold = 2.0\nwindow_size = 3\n");
    let input = temp_file(SPIKE_SERIES);
    grid(&config)
        .args(["spikes", "-i", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("window=3, threshold=2"))
        .stdout(predicate::str::contains("200"));
}

#[test]
fn outliers_text_prints_fences() {
    let config = empty_config();
    let input = temp_file(OUTLIER_SERIES);
    grid(&config)
        .args(["outliers", "-i", input.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1=3 Q3=7 IQR=4 fences=[-3, 13]"))
        .stdout(predicate::str::contains("100"));
}

#[test]
fn outliers_read_from_stdin() {
    let config = empty_config();
    let value = json_stdout(
        grid(&config)
            .args(["outliers", "-i", "-", "--output", "json"])
            .write_stdin(OUTLIER_SERIES),
    );
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn short_series_reports_nothing() {
    let config = empty_config();
    let input = temp_file(
        r#"[{"consumption": 1, "timestamp": 1},
            {"consumption": 900, "timestamp": 2},
            {"consumption": 2, "timestamp": 3}]"#,
    );
    let value = json_stdout(grid(&config).args([
        "analyze",
        "-i",
        input.path().to_str().unwrap(),
        "-w",
        "3",
        "-o",
        "json",
    ]));
    assert!(value["spikes"].as_array().unwrap().is_empty());
    assert!(value["outliers"].as_array().unwrap().is_empty());
    assert!(value["fences"].is_null());
}

#[test]
fn aggregate_points() {
    let config = empty_config();
    let input = temp_file(
        r#"[
            {"value": 10, "timestamp": "2024-03-01T08:00:00Z"},
            {"value": 15, "timestamp": "2024-03-01T20:00:00Z"},
            {"value": 20, "timestamp": "2024-03-02T08:00:00Z"},
            {"value": 25, "timestamp": "2024-03-03T08:00:00Z"}
        ]"#,
    );
    let value = json_stdout(grid(&config).args([
        "aggregate",
        "-i",
        input.path().to_str().unwrap(),
        "-w",
        "2",
        "-o",
        "json",
    ]));
    assert_eq!(value["sum"], 70.0);
    assert_eq!(value["average"], 17.5);
    assert_eq!(value["moving_average"], serde_json::json!([12.5, 17.5, 22.5]));
    assert_eq!(value["daily_totals"]["2024-03-01"], 25.0);
}

#[test]
fn convert_cost_with_tier() {
    let config = empty_config();
    grid(&config)
        .args(["convert", "cost", "100", "--rate", "0.2", "--tier", "peak"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost (peak, 100 kWh @ 0.2): 30"));
}

#[test]
fn convert_cost_uses_configured_tariff() {
    let config = temp_file("[tariff]\nrate = 0.5\ntier = \"offpeak\"\n");
    grid(&config)
        .args(["convert", "cost", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost (offpeak, 100 kWh @ 0.5): 35"));
}

#[test]
fn unknown_configured_tier_bills_standard() {
    let config = temp_file("[tariff]\nrate = 0.5\ntier = \"weekend\"\n");
    grid(&config)
        .args(["convert", "cost", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost (standard, 100 kWh @ 0.5): 50"));
    grid(&config).arg("demo").assert().success();
}

#[test]
fn maintenance_next_service() {
    let config = empty_config();
    grid(&config)
        .args([
            "maintenance",
            "next-service",
            "--last-service",
            "2024-01-01T00:00:00Z",
            "--interval-days",
            "100",
            "--hours-run",
            "5000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-21T00:00:00+00:00"));
}

#[test]
fn missing_config_file_fails() {
    Command::cargo_bin("grid")
        .unwrap()
        .env("GRID_CONFIG", "/nonexistent/grid/config.toml")
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn malformed_input_fails() {
    let config = empty_config();
    let input = temp_file("{not json");
    grid(&config)
        .args(["spikes", "-i", input.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}
