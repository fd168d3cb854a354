//! Route planning module for metro journeys.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search strategies (blind, heuristic)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//! - [`compare_routes`] - Runs both strategies side by side
//!
//! Unlike the permissive search functions in [`crate::path`], planning fails
//! fast: unknown stations or lines, and an origin that is not served by the
//! traveller's line, are reported as errors with suggestions.
//!
//! # Example
//!
//! ```
//! use metro_planner_lib::{plan_route, CostModel, NetworkConfig, NetworkGraph, RouteRequest};
//!
//! let graph = NetworkGraph::build(&NetworkConfig::metro()).unwrap();
//! let request = RouteRequest::heuristic("E1", "azul", "E6");
//! let plan = plan_route(&graph, &CostModel::default(), &request).unwrap();
//! assert_eq!(plan.hop_count(), 5);
//! ```

mod planner;

pub use planner::{select_planner, BlindPlanner, HeuristicPlanner, PlannedPath, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::cost::{hours_to_minutes, CostModel};
use crate::error::{Error, Result};
use crate::graph::{LineId, NetworkGraph, StationId};
use crate::network::{normalize_line, normalize_station};
use crate::path::SearchLimits;

/// Number of "did you mean" suggestions attached to unknown-name errors.
const MAX_SUGGESTIONS: usize = 3;

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (fewest hops, lines ignored).
    Blind,
    /// Uniform-cost search over station and line (least time).
    #[default]
    Heuristic,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Blind => "blind",
            RouteAlgorithm::Heuristic => "heuristic",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blind" | "bfs" => Ok(RouteAlgorithm::Blind),
            "heuristic" | "ucs" => Ok(RouteAlgorithm::Heuristic),
            other => Err(format!(
                "unknown algorithm '{other}', expected 'blind' or 'heuristic'"
            )),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: String,
    /// Line the traveller currently rides. Ignored by the blind strategy.
    pub origin_line: String,
    pub destination: String,
    pub algorithm: RouteAlgorithm,
    pub limits: SearchLimits,
}

impl RouteRequest {
    /// Build a request with normalised station and line tokens.
    pub fn new(
        origin: &str,
        origin_line: &str,
        destination: &str,
        algorithm: RouteAlgorithm,
    ) -> Self {
        Self {
            origin: normalize_station(origin),
            origin_line: normalize_line(origin_line),
            destination: normalize_station(destination),
            algorithm,
            limits: SearchLimits::default(),
        }
    }

    /// Convenience constructor for breadth-first routes.
    pub fn blind(origin: &str, destination: &str) -> Self {
        Self::new(origin, "", destination, RouteAlgorithm::Blind)
    }

    /// Convenience constructor for least-time routes.
    pub fn heuristic(origin: &str, origin_line: &str, destination: &str) -> Self {
        Self::new(origin, origin_line, destination, RouteAlgorithm::Heuristic)
    }

    /// Replace the expansion limits applied to the search.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Same request, but for a different algorithm.
    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Station on a planned route. `line` is `None` for blind routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedStop {
    pub station: StationId,
    pub line: Option<LineId>,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: StationId,
    pub goal: StationId,
    pub stops: Vec<PlannedStop>,
    pub travel_hours: f64,
    pub transfers: usize,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn total_minutes(&self) -> f64 {
        hours_to_minutes(self.travel_hours)
    }

    /// The visited stations without line annotations.
    pub fn stations(&self) -> Vec<StationId> {
        self.stops.iter().map(|stop| stop.station).collect()
    }
}

/// Results of both strategies for the same query. A side is `None` when that
/// strategy found no path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteComparison {
    pub blind: Option<RoutePlan>,
    pub heuristic: Option<RoutePlan>,
    /// Why the heuristic side was not searched, when the origin line was
    /// unknown or does not serve the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic_skipped: Option<String>,
}

// =============================================================================
// Helper Functions
// =============================================================================

fn resolve_station(graph: &NetworkGraph, token: &str) -> Result<StationId> {
    graph
        .station_id(token)
        .ok_or_else(|| Error::UnknownStation {
            name: token.to_string(),
            suggestions: graph.fuzzy_station_matches(token, MAX_SUGGESTIONS),
        })
}

fn resolve_line(graph: &NetworkGraph, name: &str) -> Result<LineId> {
    graph.line_id(name).ok_or_else(|| Error::UnknownLine {
        name: name.to_string(),
        suggestions: graph.fuzzy_line_matches(name, MAX_SUGGESTIONS),
    })
}

fn count_transfers(stops: &[PlannedStop]) -> usize {
    stops
        .windows(2)
        .filter(|pair| match (pair[0].line, pair[1].line) {
            (Some(from), Some(to)) => from != to,
            _ => false,
        })
        .count()
}

// =============================================================================
// Main Entry Points
// =============================================================================

/// Compute a route using the requested algorithm.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves station tokens (and the origin line for the heuristic strategy)
/// 2. Checks that the origin line serves the origin station
/// 3. Selects the planner strategy and executes the search
/// 4. Assembles the plan with its elapsed time and transfer count
pub fn plan_route(
    graph: &NetworkGraph,
    cost: &CostModel,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let start = resolve_station(graph, &request.origin)?;
    let goal = resolve_station(graph, &request.destination)?;

    let planner = select_planner(request);

    let start_line = if planner.requires_line() {
        let line = resolve_line(graph, &request.origin_line)?;
        if !graph.serves(line, start) {
            return Err(Error::StationNotOnLine {
                station: request.origin.clone(),
                line: request.origin_line.clone(),
            });
        }
        Some(line)
    } else {
        None
    };

    let path = planner
        .find_path(graph, cost, start, start_line, goal, &request.limits)?
        .ok_or_else(|| Error::RouteNotFound {
            start: request.origin.clone(),
            goal: request.destination.clone(),
        })?;

    if path.stops.is_empty() {
        return Err(Error::EmptyRoutePlan);
    }

    tracing::debug!(
        algorithm = %planner.algorithm(),
        hops = path.stops.len() - 1,
        minutes = hours_to_minutes(path.travel_hours),
        "planned route"
    );

    Ok(RoutePlan {
        algorithm: planner.algorithm(),
        start,
        goal,
        transfers: count_transfers(&path.stops),
        stops: path.stops,
        travel_hours: path.travel_hours,
    })
}

/// Plan the same query with both strategies.
///
/// Unknown stations still fail fast. "No route" outcomes become `None`, and a
/// bad origin line only skips the heuristic side, since the blind strategy
/// never looks at it.
pub fn compare_routes(
    graph: &NetworkGraph,
    cost: &CostModel,
    request: &RouteRequest,
) -> Result<RouteComparison> {
    let blind = not_found_as_none(plan_route(
        graph,
        cost,
        &request.clone().with_algorithm(RouteAlgorithm::Blind),
    ))?;

    let heuristic_result = plan_route(
        graph,
        cost,
        &request.clone().with_algorithm(RouteAlgorithm::Heuristic),
    );
    let (heuristic, heuristic_skipped) = match heuristic_result {
        Err(error @ (Error::UnknownLine { .. } | Error::StationNotOnLine { .. })) => {
            tracing::debug!(%error, "skipping heuristic comparison");
            (None, Some(error.to_string()))
        }
        other => (not_found_as_none(other)?, None),
    };

    Ok(RouteComparison {
        blind,
        heuristic,
        heuristic_skipped,
    })
}

fn not_found_as_none(result: Result<RoutePlan>) -> Result<Option<RoutePlan>> {
    match result {
        Ok(plan) => Ok(Some(plan)),
        Err(Error::RouteNotFound { .. }) => Ok(None),
        Err(error) => Err(error),
    }
}
