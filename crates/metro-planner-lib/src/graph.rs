use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::network::{normalize_line, normalize_station, NetworkConfig};

/// Dense identifier for a station, assigned in first-appearance order.
pub type StationId = usize;

/// Dense identifier for a line, assigned in configuration order.
pub type LineId = usize;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Edge within the network graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub target: StationId,
    pub distance_km: f64,
}

/// A stop in the network together with the lines that serve it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub lines: Vec<LineId>,
}

/// A named line and its member stations in configured order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub stations: Vec<StationId>,
}

/// Immutable, symmetric station graph used by both search strategies.
///
/// Neighbour lists keep a fixed order: the edges listed from a station come
/// first in table order, followed by the mirrored edges listed towards it.
/// When a connection is listed in both directions, each direction keeps its
/// own slot in table order and no mirror is added. Breadth-first tie-breaking
/// depends on this order.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    stations: Vec<Station>,
    lines: Vec<Line>,
    station_index: HashMap<String, StationId>,
    line_index: HashMap<String, LineId>,
    adjacency: Vec<Vec<Edge>>,
    distances: HashMap<(StationId, StationId), f64>,
}

impl NetworkGraph {
    /// Build the graph, validating the configuration and mirroring every edge.
    pub fn build(config: &NetworkConfig) -> Result<Self> {
        let mut graph = NetworkGraph::default();

        for line_config in &config.lines {
            let name = normalize_line(&line_config.name);
            if name.is_empty() {
                return Err(invalid("line with an empty name"));
            }
            if graph.line_index.contains_key(&name) {
                return Err(invalid(format!("line {name} is defined more than once")));
            }

            let line_id = graph.lines.len();
            graph.line_index.insert(name.clone(), line_id);
            graph.lines.push(Line {
                id: line_id,
                name,
                stations: Vec::new(),
            });

            for token in &line_config.stations {
                let station_id = graph.intern_station(token)?;
                let line = &mut graph.lines[line_id];
                if !line.stations.contains(&station_id) {
                    line.stations.push(station_id);
                }
                let station = &mut graph.stations[station_id];
                if !station.lines.contains(&line_id) {
                    station.lines.push(line_id);
                }
            }
        }

        // Directed entries in table order. A reverse entry that repeats an
        // existing connection keeps its own forward slot and is not mirrored.
        let mut stored: Vec<(StationId, StationId, f64)> = Vec::with_capacity(config.edges.len());
        for edge in &config.edges {
            let from = graph.intern_station(&edge.from)?;
            let to = graph.intern_station(&edge.to)?;
            if from == to {
                return Err(invalid(format!(
                    "self-loop on station {}",
                    graph.stations[from].name
                )));
            }
            if !edge.distance_km.is_finite() || edge.distance_km <= 0.0 {
                return Err(invalid(format!(
                    "distance between {} and {} must be positive, got {}",
                    graph.stations[from].name, graph.stations[to].name, edge.distance_km
                )));
            }

            match graph.distances.get(&edge_key(from, to)) {
                Some(existing) if *existing != edge.distance_km => {
                    return Err(invalid(format!(
                        "conflicting distances {} and {} between {} and {}",
                        existing,
                        edge.distance_km,
                        graph.stations[from].name,
                        graph.stations[to].name
                    )));
                }
                Some(_) => {
                    let repeated = stored.iter().any(|&(a, b, _)| a == from && b == to);
                    if !repeated {
                        stored.push((from, to, edge.distance_km));
                    }
                }
                None => {
                    graph.distances.insert(edge_key(from, to), edge.distance_km);
                    stored.push((from, to, edge.distance_km));
                }
            }
        }

        graph.adjacency = vec![Vec::new(); graph.stations.len()];
        for &(from, to, distance_km) in &stored {
            graph.adjacency[from].push(Edge {
                target: to,
                distance_km,
            });
        }
        for &(from, to, distance_km) in &stored {
            let listed = stored.iter().any(|&(a, b, _)| a == to && b == from);
            if !listed {
                graph.adjacency[to].push(Edge {
                    target: from,
                    distance_km,
                });
            }
        }

        for station in &graph.stations {
            if station.lines.is_empty() {
                warn!(
                    station = %station.name,
                    "station is connected but belongs to no line; heuristic search cannot enter it"
                );
            }
        }

        debug!(
            stations = graph.stations.len(),
            lines = graph.lines.len(),
            edges = graph.edge_count(),
            "built network graph"
        );

        Ok(graph)
    }

    fn intern_station(&mut self, token: &str) -> Result<StationId> {
        let name = normalize_station(token);
        if name.is_empty() {
            return Err(invalid("station with an empty token"));
        }
        if let Some(&id) = self.station_index.get(&name) {
            return Ok(id);
        }
        let id = self.stations.len();
        self.station_index.insert(name.clone(), id);
        self.stations.push(Station {
            id,
            name,
            lines: Vec::new(),
        });
        Ok(id)
    }

    /// Lookup a station identifier by its normalised token.
    pub fn station_id(&self, token: &str) -> Option<StationId> {
        self.station_index.get(&normalize_station(token)).copied()
    }

    /// Lookup a station token by identifier.
    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.stations.get(id).map(|station| station.name.as_str())
    }

    /// Lookup a line identifier by its normalised name.
    pub fn line_id(&self, name: &str) -> Option<LineId> {
        self.line_index.get(&normalize_line(name)).copied()
    }

    /// Lookup a line name by identifier.
    pub fn line_name(&self, id: LineId) -> Option<&str> {
        self.lines.get(id).map(|line| line.name.as_str())
    }

    /// Lines serving `station`, in line-id order. Empty for unknown stations.
    pub fn lines_of(&self, station: StationId) -> &[LineId] {
        self.stations
            .get(station)
            .map(|station| station.lines.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `line` serves `station`.
    pub fn serves(&self, line: LineId, station: StationId) -> bool {
        self.lines_of(station).contains(&line)
    }

    /// Return the neighbours for a given station identifier.
    pub fn neighbours(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Distance of the direct connection between two stations, in either direction.
    pub fn distance(&self, a: StationId, b: StationId) -> Option<f64> {
        self.distances.get(&edge_key(a, b)).copied()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of undirected connections.
    pub fn edge_count(&self) -> usize {
        self.distances.len()
    }

    /// Station token for display, or `#id` when the id is unknown.
    pub fn station_label(&self, id: StationId) -> String {
        self.station_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{id}"))
    }

    /// Station tokens similar to `token`, best match first.
    pub fn fuzzy_station_matches(&self, token: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(
            self.stations.iter().map(|station| station.name.as_str()),
            &normalize_station(token),
            limit,
        )
    }

    /// Line names similar to `name`, best match first.
    pub fn fuzzy_line_matches(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(
            self.lines.iter().map(|line| line.name.as_str()),
            &normalize_line(name),
            limit,
        )
    }
}

fn edge_key(a: StationId, b: StationId) -> (StationId, StationId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidNetwork {
        message: message.into(),
    }
}

fn fuzzy_matches<'a>(
    candidates: impl Iterator<Item = &'a str>,
    query: &str,
    limit: usize,
) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| (strsim::jaro_winkler(query, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}
