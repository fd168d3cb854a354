//! Metro planner library entry points.
//!
//! This crate builds an immutable graph from a static network definition,
//! searches it with a breadth-first strategy and a least-time strategy that
//! prices line changes, and turns the results into summaries and reports.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cost;
pub mod error;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod report;
pub mod routing;

pub use cost::{
    hours_to_minutes, CostModel, DEFAULT_SPEED_KMH, DEFAULT_TRANSFER_MINUTES, MINUTES_PER_HOUR,
};
pub use error::{Error, Result};
pub use graph::{Edge, Line, LineId, NetworkGraph, Station, StationId};
pub use network::{
    load_network, normalize_line, normalize_station, EdgeConfig, LineConfig, NetworkConfig,
};
pub use output::{
    ComparisonSummary, RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary,
};
pub use path::{
    find_fastest_journey, find_journey, find_route, find_route_bfs, journey_hours_or_infinite,
    Journey, JourneyStop, SearchLimits, DEFAULT_MAX_EXPANSIONS,
};
pub use report::{render_html_report, ComparisonReport};
pub use routing::{
    compare_routes, plan_route, PlannedStop, RouteAlgorithm, RouteComparison, RoutePlan,
    RouteRequest,
};
