//! Static network definitions.
//!
//! A [`NetworkConfig`] is the immutable description of lines, stations and
//! distances that a [`NetworkGraph`] is built from. The built-in metro network
//! is available through [`NetworkConfig::metro`]; custom networks can be loaded
//! from JSON files with the same shape:
//!
//! ```json
//! {
//!   "lines": [{ "name": "azul", "stations": ["E1", "E2"] }],
//!   "edges": [{ "from": "E1", "to": "E2", "distance_km": 10.0 }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::NetworkGraph;

/// Named sequence of stations served by one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    pub name: String,
    pub stations: Vec<String>,
}

/// One stored direction of a connection. The reverse direction is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

/// Complete static description of a transit network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub lines: Vec<LineConfig>,
    pub edges: Vec<EdgeConfig>,
}

impl NetworkConfig {
    /// The built-in four-line metro network.
    pub fn metro() -> Self {
        let lines = [
            ("azul", &["E1", "E2", "E3", "E4", "E5", "E6"][..]),
            ("amarela", &["E10", "E2", "E9", "E8", "E5", "E7"][..]),
            ("vermelha", &["E11", "E9", "E3", "E13"][..]),
            ("verde", &["E12", "E8", "E4", "E13", "E14"][..]),
        ];
        let edges = [
            ("E1", "E2", 10.0),
            ("E2", "E3", 8.5),
            ("E3", "E4", 6.3),
            ("E4", "E5", 13.0),
            ("E5", "E6", 3.0),
            ("E10", "E2", 10.0),
            ("E2", "E9", 3.5),
            ("E9", "E8", 9.6),
            ("E8", "E5", 19.4),
            ("E5", "E7", 2.4),
            ("E11", "E9", 12.2),
            ("E9", "E3", 9.4),
            ("E3", "E13", 18.7),
            ("E12", "E8", 6.4),
            ("E8", "E4", 15.3),
            ("E4", "E13", 12.8),
            ("E13", "E14", 5.1),
        ];

        Self {
            lines: lines
                .iter()
                .map(|(name, stations)| LineConfig {
                    name: name.to_string(),
                    stations: stations.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
            edges: edges
                .iter()
                .map(|(from, to, distance_km)| EdgeConfig {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance_km: *distance_km,
                })
                .collect(),
        }
    }

    /// Parse a network definition from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a network definition from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            lines = config.lines.len(),
            edges = config.edges.len(),
            "loaded network definition"
        );
        Ok(config)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::metro()
    }
}

/// Build the network graph from `path`, or from the built-in network when no
/// path is supplied.
pub fn load_network(path: Option<&Path>) -> Result<NetworkGraph> {
    let config = match path {
        Some(path) => NetworkConfig::from_path(path)?,
        None => NetworkConfig::metro(),
    };
    NetworkGraph::build(&config)
}

/// Canonical form of a station token (`" e1 "` becomes `"E1"`).
pub fn normalize_station(token: &str) -> String {
    token.trim().to_uppercase()
}

/// Canonical form of a line name (`"Azul"` becomes `"azul"`).
pub fn normalize_line(name: &str) -> String {
    name.trim().to_lowercase()
}
