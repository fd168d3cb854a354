//! Compare command handler: runs both search strategies for one query.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use metro_planner_lib::{compare_routes, render_html_report, ComparisonSummary, RouteRequest};

use super::{describe_route_failure, PlannerContext};

/// Arguments for the compare command.
#[derive(Args, Debug, Clone)]
pub struct CompareCommandArgs {
    /// Origin station token (case-insensitive).
    #[arg(long = "from")]
    pub from: String,
    /// Line the traveller is currently on.
    #[arg(long = "line")]
    pub line: String,
    /// Destination station token.
    #[arg(long = "to")]
    pub to: String,
    /// Also write an HTML report of both results to this file.
    #[arg(long)]
    pub html: Option<PathBuf>,
}

/// Handle the compare subcommand.
pub fn handle_compare_command(context: &PlannerContext, args: &CompareCommandArgs) -> Result<()> {
    let request = RouteRequest::heuristic(&args.from, &args.line, &args.to)
        .with_limits(context.limits);
    run_comparison(context, &request, args.html.as_deref())
}

/// Plan `request` with both strategies, print the results and optionally
/// write the HTML report.
pub fn run_comparison(
    context: &PlannerContext,
    request: &RouteRequest,
    html: Option<&Path>,
) -> Result<()> {
    let comparison = compare_routes(&context.graph, &context.cost, request)
        .map_err(|err| describe_route_failure(&context.graph, request, err))?;
    let summary = ComparisonSummary::from_comparison(&context.graph, request, &comparison)
        .context("failed to build comparison summary for display")?;

    context
        .format
        .render_comparison(&summary)
        .context("failed to write comparison output")?;

    if let Some(path) = html {
        write_html_report(&summary, path)?;
    }
    Ok(())
}

fn write_html_report(summary: &ComparisonSummary, path: &Path) -> Result<()> {
    let html = render_html_report(summary).context("failed to render HTML report")?;
    fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote HTML report");
    Ok(())
}
