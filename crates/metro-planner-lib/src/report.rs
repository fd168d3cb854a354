//! Standalone HTML report comparing the blind and heuristic results.

use askama::Template;

use crate::error::Result;
use crate::output::{algorithm_title, plural, ComparisonSummary, RouteSummary};
use crate::routing::RouteAlgorithm;

/// Full report page. Text fields are escaped by the template.
#[derive(Template)]
#[template(path = "report.html")]
pub struct ComparisonReport {
    pub origin: String,
    pub origin_line: String,
    pub destination: String,
    pub sections: Vec<SectionView>,
}

/// One strategy's result.
#[derive(Debug, Clone)]
pub struct SectionView {
    /// CSS class distinguishing the strategies.
    pub kind: String,
    pub title: &'static str,
    pub route: Option<RouteView>,
    /// Shown when `route` is `None`.
    pub missing: String,
}

#[derive(Debug, Clone)]
pub struct RouteView {
    pub stops: Vec<StopView>,
    pub total: String,
}

#[derive(Debug, Clone)]
pub struct StopView {
    pub station: String,
    pub line: Option<String>,
    pub transfer: bool,
}

impl ComparisonReport {
    pub fn from_summary(summary: &ComparisonSummary) -> Self {
        let section = |algorithm: RouteAlgorithm, route: Option<&RouteSummary>| SectionView {
            kind: algorithm.to_string(),
            title: algorithm_title(algorithm),
            route: route.map(RouteView::from_summary),
            missing: summary.missing_note(algorithm),
        };

        Self {
            origin: summary.origin.clone(),
            origin_line: summary.origin_line.clone(),
            destination: summary.destination.clone(),
            sections: vec![
                section(RouteAlgorithm::Blind, summary.blind.as_ref()),
                section(RouteAlgorithm::Heuristic, summary.heuristic.as_ref()),
            ],
        }
    }
}

impl RouteView {
    fn from_summary(summary: &RouteSummary) -> Self {
        Self {
            stops: summary
                .steps
                .iter()
                .map(|step| StopView {
                    station: step.display_name().to_string(),
                    line: step.line.clone(),
                    transfer: step.transfer,
                })
                .collect(),
            total: format!(
                "{:.2} minutes ({} {}, {} {})",
                summary.total_minutes,
                summary.hops,
                plural(summary.hops, "hop"),
                summary.transfers,
                plural(summary.transfers, "transfer")
            ),
        }
    }
}

/// Render both results as a self-contained HTML document.
pub fn render_html_report(summary: &ComparisonSummary) -> Result<String> {
    Ok(ComparisonReport::from_summary(summary).render()?)
}
