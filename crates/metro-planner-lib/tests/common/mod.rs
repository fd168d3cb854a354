//! Shared fixtures for integration tests.

use std::path::PathBuf;

use metro_planner_lib::{NetworkConfig, NetworkGraph, StationId};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Graph built from the built-in metro network.
#[allow(dead_code)]
pub fn metro_graph() -> NetworkGraph {
    NetworkGraph::build(&NetworkConfig::metro()).expect("metro network builds")
}

/// Graph built from `docs/fixtures/sample_network.json`.
#[allow(dead_code)]
pub fn sample_graph() -> NetworkGraph {
    let config = NetworkConfig::from_path(&fixtures_dir().join("sample_network.json"))
        .expect("sample network fixture loads");
    NetworkGraph::build(&config).expect("sample network builds")
}

/// Resolve station tokens, panicking on unknown names.
#[allow(dead_code)]
pub fn ids(graph: &NetworkGraph, tokens: &[&str]) -> Vec<StationId> {
    tokens
        .iter()
        .map(|token| {
            graph
                .station_id(token)
                .unwrap_or_else(|| panic!("station {token} exists"))
        })
        .collect()
}

/// Resolve station ids back to tokens.
#[allow(dead_code)]
pub fn names(graph: &NetworkGraph, stations: &[StationId]) -> Vec<String> {
    stations
        .iter()
        .map(|id| graph.station_name(*id).expect("known id").to_string())
        .collect()
}
