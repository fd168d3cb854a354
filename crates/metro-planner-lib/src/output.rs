use std::fmt::Write;

use serde::Serialize;

use crate::cost::hours_to_minutes;
use crate::error::{Error, Result};
use crate::graph::{NetworkGraph, StationId};
use crate::routing::{RouteAlgorithm, RouteComparison, RoutePlan, RouteRequest};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: StationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteEndpoint {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: StationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Line the traveller is on when reaching this station (heuristic routes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// True when reaching this station required a change of line.
    pub transfer: bool,
    /// Distance from the previous station; `None` for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl RouteStep {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }

    fn label(&self) -> String {
        match &self.line {
            Some(line) => format!("{} ({})", self.display_name(), line),
            None => self.display_name().to_string(),
        }
    }
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub transfers: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
    pub travel_hours: f64,
    pub total_minutes: f64,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved station and line names.
    pub fn from_plan(graph: &NetworkGraph, plan: &RoutePlan) -> Result<Self> {
        let (Some(first), Some(last)) = (plan.stops.first(), plan.stops.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(plan.stops.len());
        for (index, stop) in plan.stops.iter().enumerate() {
            let previous = index.checked_sub(1).map(|prev| plan.stops[prev]);
            let distance_km = match previous {
                Some(prev) => Some(graph.distance(prev.station, stop.station).ok_or_else(
                    || Error::MissingEdge {
                        from: graph.station_label(prev.station),
                        to: graph.station_label(stop.station),
                    },
                )?),
                None => None,
            };
            let transfer = match (previous.and_then(|prev| prev.line), stop.line) {
                (Some(from), Some(to)) => from != to,
                _ => false,
            };

            steps.push(RouteStep {
                index,
                id: stop.station,
                name: graph.station_name(stop.station).map(str::to_string),
                line: stop
                    .line
                    .and_then(|line| graph.line_name(line))
                    .map(str::to_string),
                transfer,
                distance_km,
            });
        }

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            transfers: plan.transfers,
            start: endpoint(graph, first.station),
            goal: endpoint(graph, last.station),
            steps,
            travel_hours: plan.travel_hours,
            total_minutes: hours_to_minutes(plan.travel_hours),
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.headline());

        match self.algorithm {
            RouteAlgorithm::Blind => {
                let joined = self
                    .steps
                    .iter()
                    .map(RouteStep::display_name)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                let _ = writeln!(buffer, "Path found (not optimised): {joined}");
            }
            RouteAlgorithm::Heuristic => {
                if let [only] = self.steps.as_slice() {
                    let _ = writeln!(buffer, "{}", only.label());
                }
                for pair in self.steps.windows(2) {
                    let marker = if pair[1].transfer { " (line change)" } else { "" };
                    let _ = writeln!(
                        buffer,
                        "{} -> {}{}",
                        pair[0].label(),
                        pair[1].label(),
                        marker
                    );
                }
            }
        }

        let _ = writeln!(buffer, "Estimated time: {:.2} minutes", self.total_minutes);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "**{}**", self.headline());
        for step in &self.steps {
            let line = step
                .line
                .as_deref()
                .map(|line| format!(" on `{line}`"))
                .unwrap_or_default();
            let transfer = if step.transfer { " _(line change)_" } else { "" };
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}**{}{}",
                step.index,
                step.display_name(),
                line,
                transfer
            );
        }
        let _ = writeln!(buffer, "_Estimated time: {:.2} minutes_", self.total_minutes);
        buffer
    }

    fn headline(&self) -> String {
        let transfers = match self.algorithm {
            RouteAlgorithm::Blind => String::new(),
            RouteAlgorithm::Heuristic => {
                format!(", {} {}", self.transfers, plural(self.transfers, "transfer"))
            }
        };
        format!(
            "{} search: {} -> {} ({} {}{})",
            algorithm_title(self.algorithm),
            self.start.display_name(),
            self.goal.display_name(),
            self.hops,
            plural(self.hops, "hop"),
            transfers
        )
    }
}

/// Side-by-side summaries of both strategies for one query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonSummary {
    pub origin: String,
    pub origin_line: String,
    pub destination: String,
    pub blind: Option<RouteSummary>,
    pub heuristic: Option<RouteSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic_skipped: Option<String>,
}

impl ComparisonSummary {
    pub fn from_comparison(
        graph: &NetworkGraph,
        request: &RouteRequest,
        comparison: &RouteComparison,
    ) -> Result<Self> {
        let summarise = |plan: &Option<RoutePlan>| {
            plan.as_ref()
                .map(|plan| RouteSummary::from_plan(graph, plan))
                .transpose()
        };

        Ok(Self {
            origin: request.origin.clone(),
            origin_line: request.origin_line.clone(),
            destination: request.destination.clone(),
            blind: summarise(&comparison.blind)?,
            heuristic: summarise(&comparison.heuristic)?,
            heuristic_skipped: comparison.heuristic_skipped.clone(),
        })
    }

    /// Message shown in place of a missing result for `algorithm`.
    pub fn missing_note(&self, algorithm: RouteAlgorithm) -> String {
        match (algorithm, &self.heuristic_skipped) {
            (RouteAlgorithm::Heuristic, Some(reason)) => format!("Not searched: {reason}."),
            _ => "No path found.".to_string(),
        }
    }

    /// Render both results, reporting a missing side as "No path found."
    pub fn render(&self, mode: RouteRenderMode) -> String {
        let mut buffer = String::new();
        for (algorithm, summary) in [
            (RouteAlgorithm::Blind, &self.blind),
            (RouteAlgorithm::Heuristic, &self.heuristic),
        ] {
            if !buffer.is_empty() {
                buffer.push('\n');
            }
            let title = format!("{} SEARCH RESULT:", algorithm_title(algorithm).to_uppercase());
            match mode {
                RouteRenderMode::PlainText => {
                    let _ = writeln!(buffer, "{title}");
                }
                RouteRenderMode::RichText => {
                    let _ = writeln!(buffer, "## {title}");
                }
            }
            match summary {
                Some(summary) => buffer.push_str(&summary.render(mode)),
                None => {
                    let _ = writeln!(buffer, "{}", self.missing_note(algorithm));
                }
            }
        }
        buffer
    }
}

pub(crate) fn algorithm_title(algorithm: RouteAlgorithm) -> &'static str {
    match algorithm {
        RouteAlgorithm::Blind => "Blind",
        RouteAlgorithm::Heuristic => "Heuristic",
    }
}

pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

fn endpoint(graph: &NetworkGraph, id: StationId) -> RouteEndpoint {
    RouteEndpoint {
        id,
        name: graph.station_name(id).map(str::to_string),
    }
}
