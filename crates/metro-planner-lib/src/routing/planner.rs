//! Route planning strategies implementing the Strategy pattern.
//!
//! Each search algorithm is wrapped in a [`RoutePlanner`] so `plan_route` can
//! orchestrate validation and result assembly without knowing which search ran.

use crate::cost::CostModel;
use crate::error::Result;
use crate::graph::{LineId, NetworkGraph, StationId};
use crate::path::{find_journey, find_route_bfs, SearchLimits};

use super::{PlannedStop, RouteAlgorithm, RouteRequest};

/// Stops and elapsed time produced by a planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPath {
    pub stops: Vec<PlannedStop>,
    pub travel_hours: f64,
}

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Whether the planner needs the traveller's current line.
    fn requires_line(&self) -> bool {
        false
    }

    /// Execute the search. `Ok(None)` means no path exists.
    fn find_path(
        &self,
        graph: &NetworkGraph,
        cost: &CostModel,
        start: StationId,
        start_line: Option<LineId>,
        goal: StationId,
        limits: &SearchLimits,
    ) -> Result<Option<PlannedPath>>;
}

/// Breadth-first planner. Finds the path with the fewest hops and prices it
/// afterwards; lines play no part in the search.
#[derive(Debug, Clone, Default)]
pub struct BlindPlanner;

impl RoutePlanner for BlindPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Blind
    }

    fn find_path(
        &self,
        graph: &NetworkGraph,
        cost: &CostModel,
        start: StationId,
        _start_line: Option<LineId>,
        goal: StationId,
        limits: &SearchLimits,
    ) -> Result<Option<PlannedPath>> {
        let Some(route) = find_route_bfs(graph, start, goal, limits)? else {
            return Ok(None);
        };

        let travel_hours = cost.route_hours(graph, &route)?;
        let stops = route
            .into_iter()
            .map(|station| PlannedStop {
                station,
                line: None,
            })
            .collect();

        Ok(Some(PlannedPath {
            stops,
            travel_hours,
        }))
    }
}

/// Uniform-cost planner over `(station, line)` states, minimising travel time
/// plus transfer penalties.
#[derive(Debug, Clone, Default)]
pub struct HeuristicPlanner;

impl RoutePlanner for HeuristicPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Heuristic
    }

    fn requires_line(&self) -> bool {
        true
    }

    fn find_path(
        &self,
        graph: &NetworkGraph,
        cost: &CostModel,
        start: StationId,
        start_line: Option<LineId>,
        goal: StationId,
        limits: &SearchLimits,
    ) -> Result<Option<PlannedPath>> {
        let Some(start_line) = start_line else {
            tracing::warn!("heuristic search requested without a starting line");
            return Ok(None);
        };

        let journey = find_journey(graph, cost, start, start_line, goal, limits)?;
        Ok(journey.map(|journey| PlannedPath {
            stops: journey
                .stops
                .iter()
                .map(|stop| PlannedStop {
                    station: stop.station,
                    line: Some(stop.line),
                })
                .collect(),
            travel_hours: journey.total_hours,
        }))
    }
}

/// Select the appropriate planner for a given request.
pub fn select_planner(request: &RouteRequest) -> Box<dyn RoutePlanner> {
    match request.algorithm {
        RouteAlgorithm::Blind => Box::new(BlindPlanner),
        RouteAlgorithm::Heuristic => Box::new(HeuristicPlanner),
    }
}
