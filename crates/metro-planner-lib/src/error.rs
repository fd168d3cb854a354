use thiserror::Error;

use crate::routing::RouteAlgorithm;

/// Convenient result alias for the metro planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a station token could not be found in the network.
    #[error("unknown station: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a line name could not be found in the network.
    #[error("unknown line: {name}{}", format_suggestions(.suggestions))]
    UnknownLine {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the traveller claims to be on a line that does not serve the origin.
    #[error("station {station} is not served by line {line}")]
    StationNotOnLine { station: String, line: String },

    /// Raised when no route could be found between two stations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// A route references a pair of stations with no edge between them.
    #[error("no edge between {from} and {to} in the network graph")]
    MissingEdge { from: String, to: String },

    /// Raised when the static network definition violates a graph invariant.
    #[error("invalid network definition: {message}")]
    InvalidNetwork { message: String },

    /// Raised when speed or transfer penalty are out of range.
    #[error("invalid cost model: {message}")]
    InvalidCostModel { message: String },

    /// Raised when a search expands more states than its configured budget.
    #[error("{algorithm} search exceeded the limit of {limit} expansions")]
    SearchLimitExceeded {
        algorithm: RouteAlgorithm,
        limit: usize,
    },

    /// Raised when a computed route plan lacks any stations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors in network definitions.
    #[error("failed to parse network definition: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the HTML report template fails to render.
    #[error("failed to render report: {0}")]
    Template(#[from] askama::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
