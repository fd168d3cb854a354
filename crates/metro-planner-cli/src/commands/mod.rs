// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// builds a `PlannerContext` once and dispatches to these handlers.

pub mod compare;
pub mod prompt;
pub mod route;
pub mod stations;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use metro_planner_lib::{
    load_network, CostModel, Error as RouteError, NetworkGraph, RouteRequest, SearchLimits,
    DEFAULT_MAX_EXPANSIONS, DEFAULT_SPEED_KMH, DEFAULT_TRANSFER_MINUTES,
};

use crate::output::OutputFormat;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// JSON network definition to load instead of the built-in metro network.
    #[arg(long, global = true, env = "METRO_NETWORK")]
    pub network: Option<PathBuf>,

    /// Average train speed in km/h.
    #[arg(long, global = true, default_value_t = DEFAULT_SPEED_KMH)]
    pub speed_kmh: f64,

    /// Penalty in minutes for each change of line.
    #[arg(long, global = true, default_value_t = DEFAULT_TRANSFER_MINUTES)]
    pub transfer_minutes: f64,

    /// Maximum number of search expansions; 0 disables the limit.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    pub max_expansions: usize,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print the logo banner.
    #[arg(long, global = true)]
    pub no_logo: bool,
}

/// Network, cost model and limits resolved once at startup.
#[derive(Debug, Clone)]
pub struct PlannerContext {
    pub graph: NetworkGraph,
    pub cost: CostModel,
    pub limits: SearchLimits,
    pub format: OutputFormat,
}

impl PlannerContext {
    /// Load the network and validate the cost settings.
    pub fn from_options(options: &GlobalOptions) -> Result<Self> {
        let graph = load_network(options.network.as_deref()).with_context(|| {
            match &options.network {
                Some(path) => format!("failed to load network from {}", path.display()),
                None => "failed to build the built-in metro network".to_string(),
            }
        })?;
        let cost = CostModel::new(options.speed_kmh, options.transfer_minutes)
            .context("invalid cost settings")?;
        let limits = SearchLimits {
            max_expansions: (options.max_expansions > 0).then_some(options.max_expansions),
        };

        tracing::debug!(
            stations = graph.stations().len(),
            lines = graph.lines().len(),
            speed_kmh = cost.speed_kmh(),
            max_expansions = ?limits.max_expansions,
            "planner context ready"
        );

        Ok(Self {
            graph,
            cost,
            limits,
            format: options.format,
        })
    }
}

/// Turn a planning error into a message that tells the user what to change.
pub fn describe_route_failure(
    graph: &NetworkGraph,
    request: &RouteRequest,
    err: RouteError,
) -> anyhow::Error {
    match err {
        RouteError::UnknownStation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_message("station", &name, &suggestions))
        }
        RouteError::UnknownLine { name, suggestions } => {
            anyhow::anyhow!(format_unknown_message("line", &name, &suggestions))
        }
        RouteError::StationNotOnLine { station, line } => {
            let serving = graph
                .station_id(&station)
                .map(|id| {
                    graph
                        .lines_of(id)
                        .iter()
                        .filter_map(|&line| graph.line_name(line))
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            anyhow::anyhow!(
                "Station {} is not served by line {}. Lines serving {}: {}.",
                station,
                line,
                station,
                serving
            )
        }
        RouteError::RouteNotFound { start, goal } => anyhow::anyhow!(
            "No route found between {} and {}. The stations are not connected in this network.",
            start,
            goal
        ),
        RouteError::SearchLimitExceeded { algorithm, limit } => anyhow::anyhow!(
            "The {} search gave up after {} expansions. Try raising --max-expansions (0 disables the limit).",
            algorithm,
            limit
        ),
        other => anyhow::Error::new(other).context(format!(
            "failed to plan route from {} to {}",
            request.origin, request.destination
        )),
    }
}

fn format_unknown_message(kind: &str, name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown {} '{}'.", kind, name);
    if !suggestions.is_empty() {
        let formatted = match suggestions {
            [only] => format!("Did you mean '{only}'?"),
            _ => {
                let joined = suggestions
                    .iter()
                    .map(|s| format!("'{}'", s))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Did you mean one of: {}?", joined)
            }
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}
