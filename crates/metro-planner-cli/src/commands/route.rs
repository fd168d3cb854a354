//! Route command handler for computing a path between two stations.

use anyhow::{Context, Result};
use clap::Args;

use metro_planner_lib::{plan_route, RouteAlgorithm, RouteRequest, RouteSummary};

use super::{describe_route_failure, PlannerContext};

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin station token (case-insensitive).
    #[arg(long = "from")]
    pub from: String,
    /// Line the traveller is currently on. Required by the heuristic algorithm.
    #[arg(long = "line")]
    pub line: Option<String>,
    /// Destination station token.
    #[arg(long = "to")]
    pub to: String,
    /// Search strategy: `blind` (fewest hops) or `heuristic` (least time).
    #[arg(long, default_value_t = RouteAlgorithm::Heuristic)]
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self, context: &PlannerContext) -> RouteRequest {
        RouteRequest::new(
            &self.from,
            self.line.as_deref().unwrap_or_default(),
            &self.to,
            self.algorithm,
        )
        .with_limits(context.limits)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(context: &PlannerContext, args: &RouteCommandArgs) -> Result<()> {
    if args.algorithm == RouteAlgorithm::Heuristic && args.line.is_none() {
        return Err(anyhow::anyhow!(
            "--line is required for the heuristic algorithm"
        ));
    }

    let request = args.to_request(context);
    let plan = plan_route(&context.graph, &context.cost, &request)
        .map_err(|err| describe_route_failure(&context.graph, &request, err))?;

    let summary = RouteSummary::from_plan(&context.graph, &plan)
        .context("failed to build route summary for display")?;

    context
        .format
        .render_route(&summary)
        .context("failed to write route output")
}
