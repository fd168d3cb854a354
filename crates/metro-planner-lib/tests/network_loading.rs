mod common;

use std::fs;

use metro_planner_lib::{load_network, Error, NetworkConfig};
use tempfile::tempdir;

use common::fixtures_dir;

#[test]
fn loads_builtin_network_without_a_path() {
    let graph = load_network(None).expect("built-in network builds");
    assert_eq!(graph.stations().len(), 14);
    assert_eq!(graph.lines().len(), 4);
    assert_eq!(graph.edge_count(), 17);
}

#[test]
fn loads_fixture_from_disk() {
    let path = fixtures_dir().join("sample_network.json");
    let graph = load_network(Some(&path)).expect("fixture builds");

    assert_eq!(graph.lines().len(), 3);
    let x = graph.station_id("x").expect("X is interned");
    let red = graph.line_id("RED").expect("red is known");
    let blue = graph.line_id("blue").expect("blue is known");
    assert_eq!(graph.lines_of(x), [red, blue]);
}

#[test]
fn loads_network_written_to_a_temp_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("network.json");
    let config = NetworkConfig::metro();
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let from_disk = NetworkConfig::from_path(&path).expect("round trips through disk");
    assert_eq!(from_disk, config);

    let graph = load_network(Some(&path)).expect("graph builds");
    assert_eq!(graph.edge_count(), 17);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("temp dir");
    let error = load_network(Some(&dir.path().join("absent.json"))).expect_err("no file");
    assert!(matches!(error, Error::Io(_)));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"lines\": [").unwrap();

    let error = load_network(Some(&path)).expect_err("truncated json");
    assert!(matches!(error, Error::Json(_)));
}

#[test]
fn invalid_graph_in_file_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("negative.json");
    fs::write(
        &path,
        r#"{
            "lines": [{ "name": "red", "stations": ["A", "B"] }],
            "edges": [{ "from": "A", "to": "B", "distance_km": -1.0 }]
        }"#,
    )
    .unwrap();

    let error = load_network(Some(&path)).expect_err("negative distance");
    assert!(matches!(error, Error::InvalidNetwork { .. }));
    assert!(error.to_string().contains("must be positive"));
}
