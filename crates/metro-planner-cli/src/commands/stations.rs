//! Stations command handler: lists every line with its stations.

use anyhow::{Context, Result};

use super::PlannerContext;

pub fn handle_stations_command(context: &PlannerContext) -> Result<()> {
    context
        .format
        .render_stations(&context.graph)
        .context("failed to write station listing")
}
