use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/sample_network.json")
        .canonicalize()
        .expect("fixture network present")
}

fn prepare_command() -> Command {
    let mut cmd = cargo_bin_cmd!("metro-planner");
    cmd.env_remove("METRO_NETWORK")
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--no-logo");
    cmd
}

#[test]
fn heuristic_route_stays_on_line() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "e1", "--line", "azul", "--to", "e6"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Heuristic search: E1 -> E6 (5 hops, 0 transfers)",
        ))
        .stdout(predicate::str::contains("E5 (azul) -> E6 (azul)"))
        .stdout(predicate::str::contains("Estimated time: 81.60 minutes"))
        .stdout(predicate::str::contains("line change").not());
}

#[test]
fn heuristic_route_reports_line_change() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "E1", "--line", "azul", "--to", "E7"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 transfer)"))
        .stdout(predicate::str::contains("(amarela) (line change)"))
        .stdout(predicate::str::contains("Estimated time: 84.40 minutes"));
}

#[test]
fn blind_algorithm_is_supported_without_line() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "E1", "--to", "E6", "--algorithm", "blind"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Path found (not optimised): E1 -> E2 -> E3 -> E4 -> E5 -> E6",
        ))
        .stdout(predicate::str::contains("Estimated time: 81.60 minutes"));
}

#[test]
fn heuristic_route_requires_line() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "E1", "--to", "E6"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--line is required"));
}

#[test]
fn unknown_station_error_is_friendly() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "E1X", "--line", "azul", "--to", "E6"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown station 'E1X'"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn origin_line_mismatch_lists_serving_lines() {
    let mut cmd = prepare_command();
    cmd.args(["route", "--from", "E1", "--line", "verde", "--to", "E6"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Station E1 is not served by line verde. Lines serving E1: azul.",
        ));
}

#[test]
fn disconnected_network_reports_route_not_found() {
    let mut cmd = prepare_command();
    cmd.arg("--network")
        .arg(fixture_path())
        .args(["route", "--from", "R1", "--line", "red", "--to", "G2"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "No route found between R1 and G2.",
        ));
}

#[test]
fn expansion_limit_is_reported() {
    let mut cmd = prepare_command();
    cmd.args([
        "--max-expansions",
        "2",
        "route",
        "--from",
        "E1",
        "--line",
        "azul",
        "--to",
        "E14",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("gave up after 2 expansions"));
}

#[test]
fn network_can_come_from_environment() {
    let mut cmd = prepare_command();
    cmd.env("METRO_NETWORK", fixture_path()).args([
        "route",
        "--from",
        "R1",
        "--line",
        "red",
        "--to",
        "B3",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Estimated time: 14.00 minutes"));
}

#[test]
fn cost_flags_change_estimated_time() {
    let mut cmd = prepare_command();
    cmd.arg("--network")
        .arg(fixture_path())
        .args(["--speed-kmh", "60", "--transfer-minutes", "0"])
        .args(["route", "--from", "R1", "--line", "red", "--to", "B3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Estimated time: 5.00 minutes"));
}

#[test]
fn invalid_speed_is_rejected() {
    let mut cmd = prepare_command();
    cmd.args(["--speed-kmh", "0", "stations"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid cost settings"));
}

#[test]
fn missing_network_file_is_reported() {
    let mut cmd = prepare_command();
    cmd.args(["--network", "/definitely/not/here.json", "stations"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load network from"));
}

#[test]
fn json_format_emits_route_summary() {
    let mut cmd = prepare_command();
    cmd.args([
        "--format",
        "json",
        "route",
        "--from",
        "E1",
        "--line",
        "azul",
        "--to",
        "E7",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let summary: serde_json::Value = serde_json::from_slice(&output).expect("stdout is JSON");
    assert_eq!(summary["algorithm"], "heuristic");
    assert_eq!(summary["transfers"], 1);
    assert_eq!(summary["goal"]["name"], "E7");
    assert_eq!(summary["steps"].as_array().map(Vec::len), Some(6));
}

#[test]
fn rich_format_uses_markdown() {
    let mut cmd = prepare_command();
    cmd.args([
        "--format", "rich", "route", "--from", "E1", "--line", "azul", "--to", "E2",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("**Heuristic search: E1 -> E2"))
        .stdout(predicate::str::contains("on `azul`"));
}
